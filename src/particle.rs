use cgmath::prelude::*;
use eframe::egui::Color32;
use rand::Rng;

use crate::settings::{
    MAX_RADIUS, MAX_SPEED, MIN_RADIUS, MIN_SPEED, PARTICLE_RGBA, REPULSION_RADIUS, REPULSION_STEP,
};

/// A single drifting dot. Only the position changes after construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: cgmath::Vector2<f32>,
    radius: f32,
    speed: f32,
    heading: f32,
    color: Color32,
}

impl Particle {
    pub fn new(position: cgmath::Vector2<f32>, radius: f32, speed: f32, heading: f32) -> Self {
        let [r, g, b, a] = PARTICLE_RGBA;
        Self {
            position,
            radius,
            speed,
            heading,
            color: Color32::from_rgba_unmultiplied(r, g, b, a),
        }
    }

    /// Places a particle uniformly inside `width` x `height` with random size,
    /// speed and heading.
    pub fn random<R: Rng + ?Sized>(width: f32, height: f32, rng: &mut R) -> Self {
        let position = cgmath::vec2(sample_extent(rng, width), sample_extent(rng, height));
        Self::new(
            position,
            rng.gen_range(MIN_RADIUS..=MAX_RADIUS),
            rng.gen_range(MIN_SPEED..=MAX_SPEED),
            rng.gen_range(0.0..std::f32::consts::TAU),
        )
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn heading(&self) -> f32 {
        self.heading
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    /// Moves the particle one tick: away from `repulsion` when it is close,
    /// then along its heading, then wrapped back into the canvas.
    pub fn advance(&mut self, width: f32, height: f32, repulsion: Option<cgmath::Vector2<f32>>) {
        if let Some(point) = repulsion {
            let offset = self.position - point;
            if offset.magnitude() < REPULSION_RADIUS {
                let away = offset.y.atan2(offset.x);
                self.position += cgmath::vec2(away.cos(), away.sin()) * REPULSION_STEP;
            }
        }

        self.position += cgmath::vec2(self.heading.cos(), self.heading.sin()) * self.speed;

        self.position.x = wrap(self.position.x, width);
        self.position.y = wrap(self.position.y, height);
    }
}

// Leaving through the near edge lands exactly on the far bound; only strict
// excess past the far bound goes back to zero.
fn wrap(coord: f32, bound: f32) -> f32 {
    if coord < 0.0 {
        bound
    } else if coord > bound {
        0.0
    } else {
        coord
    }
}

fn sample_extent<R: Rng + ?Sized>(rng: &mut R, extent: f32) -> f32 {
    if extent > 0.0 {
        rng.gen_range(0.0..extent)
    } else {
        0.0
    }
}
