//! Drawing surface abstraction
//!
//! The simulation draws through the [`Surface`] trait, a small subset of the
//! Canvas 2D immediate-mode API. The browser binding lives in
//! `platform::canvas`; [`RecordingSurface`] captures commands for headless
//! runs and tests.

pub mod recording;
pub mod surface;

pub use recording::{DrawCommand, RecordingSurface};
pub use surface::{Surface, TextStyle};
