//! Platform layer
//!
//! Browser binding for the drawing surface plus pointer coordinate
//! translation shared by every host.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use glam::Vec2;

/// Convert a client (viewport) position into surface coordinates
///
/// `surface_origin` is the on-screen top-left of the surface.
#[inline]
pub fn to_surface_coords(client: Vec2, surface_origin: Vec2) -> Vec2 {
    client - surface_origin
}
