//! World: the body collection and its per-frame update

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::{Body, update_body};
use super::spawn::spawn_bodies;
use crate::error::AppError;
use crate::renderer::Surface;
use crate::settings::Settings;

/// Size of the drawing surface in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Owns every body in insertion order
///
/// Order matters: it fixes which collision pairs are resolved first and which
/// body wins a click when several overlap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    bodies: Vec<Body>,
    bounds: Bounds,
    /// Frames advanced so far
    ticks: u64,
}

impl World {
    /// Spawn a world from settings and a seed
    pub fn new(settings: &Settings, bounds: Bounds, seed: u64) -> Result<Self, AppError> {
        settings.validate(bounds)?;
        let bodies = spawn_bodies(settings, bounds, seed);
        log::info!(
            "Spawned {} bodies on {}x{} surface (seed {})",
            bodies.len(),
            bounds.width,
            bounds.height,
            seed
        );
        Ok(Self::from_bodies(bodies, bounds))
    }

    /// Build a world from explicit bodies
    pub fn from_bodies(bodies: Vec<Body>, bounds: Bounds) -> Self {
        Self {
            bodies,
            bounds,
            ticks: 0,
        }
    }

    /// Advance one frame: clear the surface, then update every body in order
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear_rect(0.0, 0.0, self.bounds.width, self.bounds.height);

        let was_visible = self.visible_count();
        for index in 0..self.bodies.len() {
            update_body(&mut self.bodies, index, self.bounds, surface);
        }
        self.ticks += 1;

        if was_visible > 0 && self.is_cleared() {
            log::info!("All bodies gone after {} ticks", self.ticks);
        }
    }

    /// Hide the first visible body containing `point`
    ///
    /// Returns the index of the body hit, if any. At most one body is hidden.
    pub fn handle_click(&mut self, point: Vec2) -> Option<usize> {
        let index = self
            .bodies
            .iter()
            .position(|b| b.visible && b.contains_point(point))?;

        let body = &mut self.bodies[index];
        body.hide();
        log::info!(
            "Clicked body {} at ({:.1}, {:.1})",
            body.label,
            body.pos.x,
            body.pos.y
        );
        Some(index)
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Number of bodies still visible
    pub fn visible_count(&self) -> usize {
        self.bodies.iter().filter(|b| b.visible).count()
    }

    /// True once every body has disappeared
    pub fn is_cleared(&self) -> bool {
        self.bodies.iter().all(|b| !b.visible)
    }

    /// Serialize the world for debugging
    pub fn snapshot_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string(self)?)
    }
}
