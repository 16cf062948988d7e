//! Canvas 2D implementation of [`Surface`]

use std::f64::consts::TAU;

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::AppError;
use crate::renderer::{Surface, TextStyle};
use crate::sim::Bounds;

/// Draws onto a `<canvas>` element through its 2D context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Look up a canvas by element id and acquire its 2D context
    pub fn from_element_id(id: &str) -> Result<Self, AppError> {
        let window = web_sys::window().ok_or(AppError::MissingEnvironment("window"))?;
        let document = window
            .document()
            .ok_or(AppError::MissingEnvironment("document"))?;

        let canvas = document
            .get_element_by_id(id)
            .ok_or_else(|| AppError::CanvasNotFound(id.to_string()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| AppError::CanvasNotFound(id.to_string()))?;

        let ctx = canvas
            .get_context("2d")?
            .ok_or(AppError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| AppError::ContextUnavailable)?;

        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Surface size from the canvas backing store
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    /// Set the CSS background shown through cleared pixels
    pub fn set_background(&self, color: &str) -> Result<(), AppError> {
        self.canvas.style().set_property("background", color)?;
        Ok(())
    }
}

impl Surface for CanvasSurface {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ctx
            .clear_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.ctx.begin_path();
        self.ctx.set_stroke_style_str(color);
        if let Err(e) = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
        {
            log::warn!("arc failed: {:?}", e);
        }
        self.ctx.stroke();
        self.ctx.close_path();
    }

    fn fill_text(&mut self, text: &str, at: Vec2, style: &TextStyle) {
        self.ctx.set_fill_style_str(&style.color);
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        self.ctx.set_font(&style.font);
        if let Err(e) = self.ctx.fill_text(text, at.x as f64, at.y as f64) {
            log::warn!("fill_text failed: {:?}", e);
        }
    }
}
