//! Logical/physical sizing of the drawing surface.

use crate::render::Canvas2d;

/// Physical pixels for a `logical` extent at `dpr`, never below one.
pub fn physical_extent(logical: f64, dpr: f64) -> u32 {
    let scaled = (logical * dpr).ceil();
    if scaled.is_nan() || scaled < 1.0 {
        1
    } else if scaled >= u32::MAX as f64 {
        u32::MAX
    } else {
        scaled as u32
    }
}

/// A canvas' logical (CSS) size together with its device pixel ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    logical_width: f64,
    logical_height: f64,
    dpr: f64,
}

impl Surface {
    pub fn new(logical_width: f64, logical_height: f64, dpr: f64) -> Self {
        Self {
            logical_width,
            logical_height,
            dpr,
        }
    }

    /// Width handed to the renderer.
    pub fn logical_width(&self) -> f64 {
        self.logical_width.max(1.0)
    }

    pub fn logical_height(&self) -> f64 {
        self.logical_height.max(1.0)
    }

    pub fn scale(&self) -> f64 {
        self.dpr
    }

    pub fn physical_width(&self) -> u32 {
        physical_extent(self.logical_width, self.dpr)
    }

    pub fn physical_height(&self) -> u32 {
        physical_extent(self.logical_height, self.dpr)
    }

    pub fn physical_size(&self) -> (u32, u32) {
        (self.physical_width(), self.physical_height())
    }

    /// Size the backing buffer and scale the transform so drawing happens
    /// in logical units.
    pub fn apply<C: Canvas2d + ?Sized>(&self, ctx: &mut C) {
        let (w, h) = self.physical_size();
        ctx.set_buffer_size(w, h);
        ctx.set_scale(self.dpr);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn physical_rounds_up() {
        assert_eq!(physical_extent(100.5, 1.0), 101);
        assert_eq!(physical_extent(333.0, 1.5), 500);
        assert_eq!(physical_extent(10.1, 2.0), 21);
    }

    #[test]
    fn physical_never_below_one() {
        assert_eq!(physical_extent(0.0, 2.0), 1);
        assert_eq!(physical_extent(120.0, 0.0), 1);
        assert_eq!(physical_extent(0.2, 1.0), 1);
        assert_eq!(physical_extent(f64::NAN, 1.0), 1);
    }

    #[test]
    fn physical_size_tracks_dpr() {
        let s = Surface::new(400.0, 300.0, 2.0);
        assert_eq!(s.physical_size(), (800, 600));
        assert_eq!(s.logical_width(), 400.0);
    }

    #[test]
    fn property_sweep() {
        for logical in [0.5, 1.0, 17.3, 240.0, 1920.0] {
            for dpr in [0.0, 0.75, 1.0, 1.25, 2.0, 3.0] {
                let p = physical_extent(logical, dpr);
                assert!(p >= 1);
                assert_eq!(p, ((logical * dpr).ceil() as u32).max(1));
            }
        }
    }
}
