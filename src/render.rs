//! Render surface: the only module that touches
//! [`web_sys::CanvasRenderingContext2d`].
//!
//! A [`Surface`] receives draw commands and produces pixels; it never
//! mutates engine state. Context binding is the only fallible step and
//! happens once, at engine construction.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::DEFAULT_DRAW_COLOR;
use crate::engine::DrawCommand;

/// A canvas and its 2d context, bound once at startup and owned exclusively
/// by a single overlay.
pub struct Surface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Surface {
    /// Bind the 2d drawing context of `canvas`.
    ///
    /// # Errors
    ///
    /// Fails if the canvas cannot provide a `CanvasRenderingContext2d`.
    pub fn bind(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    /// Reset the backing store to the given dimensions. Setting the
    /// dimensions erases all prior drawing, so this doubles as the per-frame
    /// clear.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn reset(&self, width: f64, height: f64) {
        self.canvas.set_width(width.max(0.0) as u32);
        self.canvas.set_height(height.max(0.0) as u32);
    }

    /// Trace each command's polygon, closing back to its first corner, and
    /// fill or stroke it with the command's color (default black).
    pub fn draw(&self, commands: &[DrawCommand]) {
        for command in commands {
            let color = command.color.as_deref().unwrap_or(DEFAULT_DRAW_COLOR);
            self.ctx.begin_path();
            self.ctx.move_to(command.corners[0].x, command.corners[0].y);
            for corner in &command.corners[1..] {
                self.ctx.line_to(corner.x, corner.y);
            }
            self.ctx.close_path();
            if command.filled {
                self.ctx.set_fill_style_str(color);
                self.ctx.fill();
            } else {
                self.ctx.set_stroke_style_str(color);
                self.ctx.stroke();
            }
        }
    }
}
