//! [`RenderTarget`] over the browser's `CanvasRenderingContext2d`.
//!
//! This is the only module that touches [`web_sys::CanvasRenderingContext2d`].

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::render::{Color, RenderTarget};
use crate::view::Point;

/// Font used for the marker and overlay text.
const TEXT_FONT: &str = "12px monospace";

/// Inset of the overlay text from the top-left corner, in pixels.
const OVERLAY_INSET_PX: f64 = 2.0;

/// A 2D context paired with the logical size of its surface.
pub struct Canvas2dTarget {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl Canvas2dTarget {
    #[must_use]
    pub fn new(ctx: CanvasRenderingContext2d, width: u32, height: u32) -> Self {
        Self { ctx, width: f64::from(width), height: f64::from(height) }
    }

    fn fill_text(&self, text: &str, x: f64, y: f64, color: Color) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.set_font(TEXT_FONT);
        self.ctx.set_text_align("left");
        self.ctx.set_text_baseline("top");
        self.ctx.fill_text(text, x, y)
    }
}

impl RenderTarget for Canvas2dTarget {
    type Error = JsValue;

    fn fill(&mut self, color: Color) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
        Ok(())
    }

    fn line(&mut self, from: Point, to: Point, color: Color) -> Result<(), JsValue> {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(1.0);
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
        Ok(())
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(x, y, width, height);
        Ok(())
    }

    #[allow(clippy::cast_precision_loss)]
    fn text_at(&mut self, text: &str, x: i64, y: i64, color: Color) -> Result<(), JsValue> {
        self.fill_text(text, x as f64, y as f64, color)
    }

    fn overlay_text(&mut self, text: &str, color: Color) -> Result<(), JsValue> {
        self.fill_text(text, OVERLAY_INSET_PX, OVERLAY_INSET_PX, color)
    }
}
