//! Animated particle backdrop for a portfolio title card.
//!
//! Particles drift across the canvas, wrap at its edges, shy away from the
//! cursor and are joined by fading lines when they come close to each other.

pub mod canvas;
pub mod clock;
pub mod field;
pub mod particle;
pub mod settings;
pub mod title_card;

pub use canvas::{Canvas, PainterCanvas};
pub use clock::TickClock;
pub use field::{Field, Link};
pub use particle::Particle;
pub use title_card::TitleCard;
