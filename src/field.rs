use cgmath::prelude::*;
use eframe::egui::{Color32, Pos2, Rect};

use crate::canvas::{Canvas, screen_to_local};
use crate::particle::Particle;
use crate::settings::{
    BACKGROUND_COLOR, LINK_DISTANCE, LINK_MAX_ALPHA, LINK_RGB, LINK_WIDTH, PARTICLE_COUNT,
};

/// A line between two particles, by index into the field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link {
    pub from: usize,
    pub to: usize,
    pub alpha: u8,
}

/// The animated particle layer: the particles, the canvas they live on and
/// the cursor they avoid.
pub struct Field {
    width: f32,
    height: f32,
    cursor: Option<cgmath::Vector2<f32>>,
    particles: Vec<Particle>,
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        let mut field = Self::with_particles(width, height, Vec::new());
        field.reinitialize(width, height);
        field
    }

    /// Builds a field around an explicit particle layout.
    pub fn with_particles(width: f32, height: f32, particles: Vec<Particle>) -> Self {
        Self {
            width,
            height,
            cursor: None,
            particles,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn cursor(&self) -> Option<cgmath::Vector2<f32>> {
        self.cursor
    }

    /// Throws every particle away and scatters a fresh set over the new bounds.
    pub fn reinitialize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;

        let mut rng = rand::thread_rng();
        self.particles = (0..PARTICLE_COUNT)
            .map(|_| Particle::random(width, height, &mut rng))
            .collect();

        log::debug!(
            "scattered {} particles over {}x{}",
            self.particles.len(),
            width,
            height
        );
    }

    /// Returns true when the bounds changed and the particles were replaced.
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        if self.width == width && self.height == height {
            return false;
        }
        self.reinitialize(width, height);
        true
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.cursor = Some(cgmath::vec2(x, y));
    }

    pub fn pointer_left(&mut self) {
        self.cursor = None;
    }

    /// Follows the screen-space hover position while it is over the canvas at
    /// `rect`; anything else counts as the pointer leaving.
    pub fn track_hover(&mut self, hover: Option<Pos2>, rect: Rect) {
        match hover.and_then(|pos| screen_to_local(rect, pos)) {
            Some(local) => self.pointer_moved(local.x, local.y),
            None => self.pointer_left(),
        }
    }

    pub fn tick(&mut self) {
        let (width, height, cursor) = (self.width, self.height, self.cursor);
        for particle in &mut self.particles {
            particle.advance(width, height, cursor);
        }
        log::trace!("tick, cursor {:?}", cursor);
    }

    /// Every pair closer than the link distance, each pair once, in
    /// collection order.
    pub fn links(&self) -> Vec<Link> {
        let mut links = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for (j, b) in self.particles.iter().enumerate().skip(i + 1) {
                let distance = (a.position - b.position).magnitude();
                if distance < LINK_DISTANCE {
                    links.push(Link {
                        from: i,
                        to: j,
                        alpha: link_alpha(distance),
                    });
                }
            }
        }
        links
    }

    /// Background first, then links, then the particles on top.
    pub fn render(&self, canvas: &mut impl Canvas) {
        canvas.fill(BACKGROUND_COLOR);

        let [r, g, b] = LINK_RGB;
        for link in self.links() {
            let from = &self.particles[link.from];
            let to = &self.particles[link.to];
            canvas.line(
                to_pos(from.position),
                to_pos(to.position),
                Color32::from_rgba_unmultiplied(r, g, b, link.alpha),
                LINK_WIDTH,
            );
        }

        for particle in &self.particles {
            canvas.circle(to_pos(particle.position), particle.radius(), particle.color());
        }
    }
}

/// Linear fade from full alpha at distance zero to nothing at the link
/// distance, truncated toward zero.
pub fn link_alpha(distance: f32) -> u8 {
    (LINK_MAX_ALPHA * (1.0 - distance / LINK_DISTANCE)).clamp(0.0, LINK_MAX_ALPHA) as u8
}

fn to_pos(v: cgmath::Vector2<f32>) -> Pos2 {
    Pos2::new(v.x, v.y)
}
