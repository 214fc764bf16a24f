use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::render::{Canvas2d, Rgba};

/// A `<canvas>` element paired with its 2D context.
pub struct WebCanvas {
    pub element: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl WebCanvas {
    pub fn new(element: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
        Self { element, ctx }
    }

    pub fn context(&self) -> &CanvasRenderingContext2d {
        &self.ctx
    }
}

impl Canvas2d for WebCanvas {
    fn set_buffer_size(&mut self, width: u32, height: u32) {
        self.element.set_width(width);
        self.element.set_height(height);
    }

    fn set_scale(&mut self, scale: f64) {
        if let Err(e) = self.ctx.set_transform(scale, 0.0, 0.0, scale, 0.0, 0.0) {
            log::warn!("setTransform failed: {:?}", e);
        }
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.clear_rect(x, y, width, height);
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn set_round_line_cap(&mut self) {
        self.ctx.set_line_cap("round");
    }

    fn set_stroke_color(&mut self, color: Rgba) {
        self.ctx.set_stroke_style_str(&color.to_string());
    }

    fn set_fill_color(&mut self, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_string());
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.ctx.set_global_alpha(alpha);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.fill_rect(x, y, width, height);
    }
}
