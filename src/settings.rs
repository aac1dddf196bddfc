//! Fixed tuning values for the backdrop. Nothing here is read at runtime.

use std::time::Duration;

use eframe::egui::Color32;

pub const PARTICLE_COUNT: usize = 60;

pub const MIN_RADIUS: f32 = 2.0;
pub const MAX_RADIUS: f32 = 5.0;
pub const MIN_SPEED: f32 = 0.5;
pub const MAX_SPEED: f32 = 2.0;

/// Particles closer than this to the cursor get pushed away.
pub const REPULSION_RADIUS: f32 = 80.0;
/// Length of the push, independent of how close the cursor is.
pub const REPULSION_STEP: f32 = 2.0;

/// Pairs closer than this are joined by a line.
pub const LINK_DISTANCE: f32 = 80.0;
pub const LINK_MAX_ALPHA: f32 = 120.0;
pub const LINK_WIDTH: f32 = 1.0;

pub const BACKGROUND_COLOR: Color32 = Color32::from_rgb(30, 30, 60);
pub const PARTICLE_RGBA: [u8; 4] = [200, 200, 255, 180];
pub const LINK_RGB: [u8; 3] = [180, 180, 255];

pub const TICK_PERIOD: Duration = Duration::from_millis(16);

pub const WINDOW_TITLE: &str = "Portfolio";
pub const WINDOW_POS: [f32; 2] = [100.0, 100.0];
pub const WINDOW_SIZE: [f32; 2] = [900.0, 600.0];

pub const TITLE_TEXT: &str = "Your Name";
pub const TITLE_SIZE: f32 = 32.0;
pub const TITLE_COLOR: Color32 = Color32::WHITE;
pub const SUBTITLE_TEXT: &str = "Software Developer | Portfolio";
pub const SUBTITLE_SIZE: f32 = 18.0;
pub const SUBTITLE_COLOR: Color32 = Color32::from_rgb(0xb0, 0xb0, 0xff);
