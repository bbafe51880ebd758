//! Browser canvas backend
//!
//! Wraps a `<canvas>` element and its 2D context. Canvas calls that can fail
//! are logged and skipped; a dropped circle or line never stops the loop.

use std::f64::consts::TAU;

use glam::DVec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::Surface;
use crate::app::Cursor;

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Take the 2D context of `canvas` and set its stroke/fill styles
    pub fn new(
        canvas: HtmlCanvasElement,
        stroke_style: &str,
        fill_style: &str,
        line_width: f64,
    ) -> Result<Self, JsValue> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()
            .map_err(JsValue::from)?;

        ctx.set_stroke_style_str(stroke_style);
        ctx.set_fill_style_str(fill_style);
        ctx.set_line_width(line_width);

        Ok(Self { canvas, ctx })
    }

    /// Cursor shown while hovering the canvas
    pub fn set_cursor(&self, cursor: Cursor) {
        self.set_style("cursor", cursor.as_css());
    }

    fn set_style(&self, name: &str, value: &str) {
        if let Err(e) = self.canvas.style().set_property(name, value) {
            log::warn!("Failed to set {}: {:?}", name, e);
        }
    }
}

impl Surface for CanvasSurface {
    fn fill_circle(&mut self, center: DVec2, radius: f64) {
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(center.x, center.y, radius, 0.0, TAU) {
            log::warn!("arc failed: {:?}", e);
            return;
        }
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn set_visible(&mut self, visible: bool) {
        self.set_style("display", if visible { "block" } else { "none" });
    }
}
