//! Surface that records draw calls instead of rasterizing them

use glam::Vec2;

use super::surface::{Surface, TextStyle};

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    ClearRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    StrokeCircle {
        center: Vec2,
        radius: f32,
        color: String,
    },
    FillText {
        text: String,
        at: Vec2,
        style: TextStyle,
    },
}

/// Records every draw call in order
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop recorded commands (keeps capacity)
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// Number of circles stroked since the last reset
    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::StrokeCircle { .. }))
            .count()
    }

    /// Labels drawn since the last reset, in draw order
    pub fn labels(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.commands.push(DrawCommand::ClearRect {
            x,
            y,
            width,
            height,
        });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            color: color.to_string(),
        });
    }

    fn fill_text(&mut self, text: &str, at: Vec2, style: &TextStyle) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            at,
            style: style.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut surface = RecordingSurface::new();
        surface.clear_rect(0.0, 0.0, 10.0, 10.0);
        surface.stroke_circle(Vec2::new(1.0, 2.0), 3.0, "blue");
        surface.fill_text("7", Vec2::new(1.0, 2.0), &TextStyle::centered("#000", "20px Arial"));

        assert_eq!(surface.commands.len(), 3);
        assert!(matches!(surface.commands[0], DrawCommand::ClearRect { .. }));
        assert_eq!(surface.circle_count(), 1);
        assert_eq!(surface.labels(), vec!["7"]);

        surface.reset();
        assert!(surface.commands.is_empty());
    }
}
