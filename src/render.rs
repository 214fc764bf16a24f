//! Draws one helix frame through a minimal 2D context seam.

use std::fmt;

use crate::geometry::{HelixFrame, STRAND_PHASES};

/// Colour with 8-bit channels and a fractional alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

/// Muted violet used for both strands.
pub const STRAND_COLOR: Rgba = Rgba::new(79, 70, 229, 0.22);
pub const STRAND_ALPHA: f64 = 0.95;
pub const RUNG_COLOR: Rgba = Rgba::new(79, 70, 229, 0.06);

/// The subset of `CanvasRenderingContext2d` (plus the owning element's
/// buffer size) the helix needs.
pub trait Canvas2d {
    /// Resize the backing pixel buffer. Resizing also resets the context
    /// transform, so callers re-apply the scale afterwards.
    fn set_buffer_size(&mut self, width: u32, height: u32);
    /// Replace the current transform with a uniform `scale`.
    fn set_scale(&mut self, scale: f64);
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn set_line_width(&mut self, width: f64);
    fn set_round_line_cap(&mut self);
    fn set_stroke_color(&mut self, color: Rgba);
    fn set_fill_color(&mut self, color: Rgba);
    fn set_global_alpha(&mut self, alpha: f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn stroke(&mut self);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
}

/// Replace the contents of a `w` x `h` (logical pixels) surface with the
/// helix at `t` seconds.
pub fn draw_helix<C: Canvas2d + ?Sized>(ctx: &mut C, w: f64, h: f64, t: f64) {
    let frame = HelixFrame::new(w, h, t);
    ctx.clear_rect(0.0, 0.0, frame.width(), frame.height());

    ctx.set_line_width(frame.line_width());
    ctx.set_round_line_cap();

    for phase in STRAND_PHASES {
        ctx.begin_path();
        let mut points = frame.strand(phase);
        if let Some(first) = points.next() {
            ctx.move_to(first.x, first.y);
        }
        for p in points {
            ctx.line_to(p.x, p.y);
        }
        ctx.set_stroke_color(STRAND_COLOR);
        ctx.set_global_alpha(STRAND_ALPHA);
        ctx.stroke();
    }

    ctx.set_fill_color(RUNG_COLOR);
    for rung in frame.rungs() {
        ctx.fill_rect(rung.x, rung.y, rung.width, rung.height);
    }
}
