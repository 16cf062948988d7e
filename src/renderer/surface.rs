//! Immediate-mode 2D surface trait

use glam::Vec2;

/// Fill color and font for a text draw
///
/// Text is always centered on its anchor point, both horizontally and
/// vertically.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub color: String,
    pub font: String,
}

impl TextStyle {
    pub fn centered(color: &str, font: &str) -> Self {
        Self {
            color: color.to_string(),
            font: font.to_string(),
        }
    }
}

/// A 2D drawing surface
///
/// Coordinates are surface pixels with the origin at the top-left and Y
/// growing downward.
pub trait Surface {
    /// Clear a rectangular region to transparent
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    /// Stroke an unfilled circle outline
    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: &str);

    /// Fill text centered on a point
    fn fill_text(&mut self, text: &str, at: Vec2, style: &TextStyle);
}
