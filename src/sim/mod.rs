//! Simulation module
//!
//! Bodies, collision response and the per-frame world update. Nothing in
//! here touches the browser; drawing goes through [`crate::renderer::Surface`]
//! and randomness comes from a seeded RNG.

pub mod body;
pub mod collision;
pub mod spawn;
pub mod world;

pub use body::{Body, update_body};
pub use collision::{Contact, circle_contact, resolve_contact};
pub use spawn::spawn_bodies;
pub use world::{Bounds, World};
