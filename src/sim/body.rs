//! Bodies: circular, labelled, clickable disks

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{circle_contact, pair_mut, resolve_contact};
use super::world::Bounds;
use crate::consts::{LABEL_COLOR, LABEL_FONT};
use crate::renderer::{Surface, TextStyle};

/// A moving disk
///
/// Once `visible` is cleared the body is frozen: it is no longer drawn,
/// moved, or considered for collisions, and nothing sets it visible again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Center in surface pixels
    pub pos: Vec2,
    /// Displacement per frame
    pub vel: Vec2,
    /// Fixed at creation
    pub radius: f32,
    /// Outline color (display only)
    pub color: String,
    /// Text drawn at the center (display only)
    pub label: String,
    pub visible: bool,
}

impl Body {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, color: &str, label: &str) -> Self {
        Self {
            pos,
            vel,
            radius,
            color: color.to_string(),
            label: label.to_string(),
            visible: true,
        }
    }

    /// Draw the outline and centered label (no-op when invisible)
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        if !self.visible {
            return;
        }
        surface.stroke_circle(self.pos, self.radius, &self.color);
        surface.fill_text(
            &self.label,
            self.pos,
            &TextStyle::centered(LABEL_COLOR, LABEL_FONT),
        );
    }

    /// Whether `point` lies inside or on the circle
    ///
    /// Ignores visibility; callers filter invisible bodies themselves.
    pub fn contains_point(&self, point: Vec2) -> bool {
        let d = point - self.pos;
        d.length_squared() <= self.radius * self.radius
    }

    /// Advance position by one frame of velocity
    fn integrate(&mut self) {
        self.pos += self.vel;
    }

    /// Reverse horizontal velocity when an edge reaches the side of the surface
    fn bounce_horizontal(&mut self, bounds: Bounds) {
        if self.pos.x + self.radius >= bounds.width || self.pos.x - self.radius <= 0.0 {
            self.vel.x = -self.vel.x;
        }
    }

    /// Hide the body once its top edge reaches the top of the surface
    fn check_top_exit(&mut self) {
        if self.pos.y - self.radius <= 0.0 {
            self.visible = false;
            log::debug!("Body {} left through the top", self.label);
        }
    }

    /// Hide the body (terminal)
    pub fn hide(&mut self) {
        self.visible = false;
    }
}

/// Run one frame of update for `bodies[index]`
///
/// Draws, integrates, bounces off the side walls, then resolves collisions
/// against every other visible body in collection order. Each resolution
/// moves both bodies immediately, so later pairs see the corrected
/// positions. Finally the body is hidden if it reached the top edge.
///
/// An out-of-range `index` is a no-op.
pub fn update_body<S: Surface + ?Sized>(
    bodies: &mut [Body],
    index: usize,
    bounds: Bounds,
    surface: &mut S,
) {
    {
        let Some(body) = bodies.get_mut(index) else {
            return;
        };
        if !body.visible {
            return;
        }
        body.draw(surface);
        body.integrate();
        body.bounce_horizontal(bounds);
    }

    for other in 0..bodies.len() {
        if other == index || !bodies[other].visible {
            continue;
        }
        let (this, that) = pair_mut(bodies, index, other);
        if let Some(contact) = circle_contact(this.pos, this.radius, that.pos, that.radius) {
            log::trace!(
                "Collision {} <-> {} (overlap {:.2})",
                this.label,
                that.label,
                contact.overlap
            );
            resolve_contact(this, that, &contact);
        }
    }

    bodies[index].check_top_exit();
}
