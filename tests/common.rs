// Not every test file will use every helper.
#![allow(dead_code)]

use eframe::egui::{Color32, Pos2};
use particle_backdrop::{Canvas, Particle};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Fill(Color32),
    Line {
        from: Pos2,
        to: Pos2,
        color: Color32,
        width: f32,
    },
    Circle {
        center: Pos2,
        radius: f32,
        color: Color32,
    },
}

/// Canvas that remembers every draw call in order.
#[derive(Default)]
pub struct RecordingCanvas {
    pub ops: Vec<DrawOp>,
}

impl Canvas for RecordingCanvas {
    fn fill(&mut self, color: Color32) {
        self.ops.push(DrawOp::Fill(color));
    }

    fn line(&mut self, from: Pos2, to: Pos2, color: Color32, width: f32) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            color,
            width,
        });
    }

    fn circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color,
        });
    }
}

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed)
}

/// Particle of radius 3 at (x, y).
pub fn particle_at(x: f32, y: f32, heading: f32, speed: f32) -> Particle {
    Particle::new(cgmath::vec2(x, y), 3.0, speed, heading)
}

pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected {expected}, got {actual}"
    );
}
