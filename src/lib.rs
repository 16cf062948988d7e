//! Bubble Pop - clickable bubbles drifting up a 2D canvas
//!
//! Core modules:
//! - `sim`: Bodies, collisions and the per-frame world update
//! - `renderer`: Drawing surface abstraction (Canvas 2D style)
//! - `platform`: Browser canvas binding and input translation
//! - `settings`: World constants as a typed, validated config

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::AppError;
pub use settings::Settings;

use glam::Vec2;

/// Fixed world constants
pub mod consts {
    /// Number of bodies spawned at startup
    pub const BODY_COUNT: usize = 20;
    /// Upper limit accepted from settings overrides
    pub const MAX_BODY_COUNT: usize = 1_000;

    /// Body radius range [min, max)
    pub const RADIUS_MIN: f32 = 20.0;
    pub const RADIUS_MAX: f32 = 70.0;

    /// Per-frame speed scale for initial velocities
    pub const BODY_SPEED: f32 = 3.0;

    /// Vertical gap between consecutive spawn positions (below the surface)
    pub const SPAWN_SPACING: f32 = 50.0;

    /// Extra separation pushed past tangency when two bodies collide
    pub const COLLISION_MARGIN: f32 = 1.0;

    /// Colors and fonts
    pub const BODY_COLOR: &str = "blue";
    pub const LABEL_COLOR: &str = "#000";
    pub const LABEL_FONT: &str = "20px Arial";
    pub const BACKGROUND_COLOR: &str = "#ff8";
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (b - a).length()
}

/// Unit vector for an angle in radians
#[inline]
pub fn direction(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}
