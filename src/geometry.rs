//! Curve maths for the double helix.
//!
//! Everything here is a pure function of the logical surface size and the
//! elapsed time, so a frame can be recomputed from scratch on every tick.

use std::f64::consts::{PI, TAU};

/// Upper bound on the horizontal swing of a strand, in logical pixels.
pub const AMPLITUDE_CAP: f64 = 60.0;
/// Fraction of the surface width a strand may swing before the cap applies.
pub const AMPLITUDE_RATIO: f64 = 0.35;
/// Vertical distance between two strand samples.
pub const SAMPLE_STEP: f64 = 2.0;
/// Full rotations across the swept range.
pub const TURNS: f64 = 3.0;
/// Radians per second.
pub const ANGULAR_SPEED: f64 = 0.2;
/// Phase offset of each strand; the second strand sits half a turn behind.
pub const STRAND_PHASES: [f64; 2] = [0.0, PI];
/// Vertical distance between rungs.
pub const RUNG_SPACING: f64 = 12.0;
pub const RUNG_HEIGHT: f64 = 2.0;

/// Horizontal amplitude for a surface `width` logical pixels wide.
pub fn amplitude(width: f64) -> f64 {
    (width * AMPLITUDE_RATIO).min(AMPLITUDE_CAP)
}

/// Envelope that narrows the helix away from the vertical middle.
pub fn taper(progress: f64) -> f64 {
    1.0 - (progress - 0.5).abs()
}

/// Rotation angle at a vertical `progress`, `t` seconds in, for a strand
/// offset by `phase`.
pub fn angle(progress: f64, t: f64, phase: f64) -> f64 {
    progress * TURNS * TAU + t * ANGULAR_SPEED + phase
}

/// Horizontal position of a strand with the given `angle`.
pub fn strand_x(center_x: f64, amplitude: f64, progress: f64, angle: f64) -> f64 {
    center_x + angle.sin() * amplitude * taper(progress)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Axis-aligned rectangle in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One frame worth of helix geometry for a `width` x `height` surface.
#[derive(Debug, Clone, Copy)]
pub struct HelixFrame {
    width: f64,
    height: f64,
    t: f64,
}

impl HelixFrame {
    pub fn new(width: f64, height: f64, t: f64) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
            t,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn center_x(&self) -> f64 {
        self.width / 2.0
    }

    pub fn amplitude(&self) -> f64 {
        amplitude(self.width)
    }

    /// Stroke width, grows with the surface but never drops below a pixel.
    pub fn line_width(&self) -> f64 {
        (self.width / 200.0).max(1.0)
    }

    /// Number of strand samples; the sweep runs from `-h` to `2h` inclusive.
    pub fn sample_count(&self) -> usize {
        (3.0 * self.height / SAMPLE_STEP).floor() as usize + 1
    }

    /// Polyline for the strand offset by `phase`.
    pub fn strand(&self, phase: f64) -> impl Iterator<Item = Point> + '_ {
        let h = self.height;
        let center_x = self.center_x();
        let center_y = h / 2.0;
        let amp = self.amplitude();
        (0..self.sample_count()).map(move |k| {
            let y = -h + SAMPLE_STEP * k as f64;
            let progress = y / (h * 2.0);
            let a = angle(progress, self.t, phase);
            Point {
                x: strand_x(center_x, amp, progress, a),
                y: center_y + y / 2.0 - h / 4.0,
            }
        })
    }

    /// Half-count of rungs; rungs are laid out for `i` in `-n..=n`.
    pub fn rung_half_count(&self) -> i64 {
        (self.height / RUNG_SPACING).floor() as i64 + 2
    }

    /// Rung rectangles. Their angle ignores the per-strand phase, so they
    /// follow the first strand's phase family.
    pub fn rungs(&self) -> impl Iterator<Item = Rect> + '_ {
        let n = self.rung_half_count();
        let nf = n as f64;
        let w = self.width;
        let h = self.height;
        let center_x = self.center_x();
        let amp = self.amplitude();
        (-n..=n).map(move |i| {
            let progress = (i as f64 / nf + 1.0) / 2.0;
            let a = angle(progress, self.t, 0.0);
            let x1 = strand_x(center_x, amp, progress, a);
            let x2 = strand_x(center_x, amp, progress, a + PI);
            let y = i as f64 * RUNG_SPACING + h / 2.0 - nf * RUNG_SPACING / 2.0;
            let cx = (x1 + x2) / 2.0;
            Rect {
                x: cx - 0.5 * (w / 40.0),
                y: y - RUNG_HEIGHT / 2.0,
                width: w / 20.0,
                height: RUNG_HEIGHT,
            }
        })
    }
}
