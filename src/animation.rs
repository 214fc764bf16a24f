//! Frame-by-frame lifecycle of a mounted helix.
//!
//! The browser binding owns one [`HelixAnimation`] behind an `Rc<RefCell<_>>`
//! and forwards two independent signals to it: display frames and container
//! resizes. Both run on the same event queue, so they never overlap.

use crate::render::{draw_helix, Canvas2d};
use crate::surface::Surface;

/// Facts read once when the page loads.
#[derive(Debug, Clone, Copy, Default)]
pub struct StartupProbe {
    pub has_mount: bool,
    pub narrow_screen: bool,
    pub reduced_motion: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingMount,
    NarrowScreen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Skip(SkipReason),
    /// Draw a single frame at `t = 0` and stop.
    StaticFrame,
    Animate,
}

impl Activation {
    pub fn decide(probe: StartupProbe) -> Self {
        if !probe.has_mount {
            Activation::Skip(SkipReason::MissingMount)
        } else if probe.narrow_screen {
            Activation::Skip(SkipReason::NarrowScreen)
        } else if probe.reduced_motion {
            Activation::StaticFrame
        } else {
            Activation::Animate
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Animate,
    Static,
}

/// What the frame callback should do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Reschedule,
    Halt,
}

/// Seconds since the effect started.
#[derive(Debug, Clone, Copy)]
pub struct AnimationClock {
    start_ms: f64,
}

impl AnimationClock {
    pub fn new(start_ms: f64) -> Self {
        Self { start_ms }
    }

    /// Frame timestamps may precede the start stamp by a fraction of a frame;
    /// those read as zero.
    pub fn elapsed(&self, now_ms: f64) -> f64 {
        ((now_ms - self.start_ms) / 1000.0).max(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopState {
    Running,
    Halted,
    TornDown,
}

#[derive(Debug)]
pub struct HelixAnimation {
    surface: Surface,
    clock: AnimationClock,
    motion: Motion,
    state: LoopState,
    /// Time of the most recent draw, reused when a resize forces a redraw.
    last_t: f64,
}

impl HelixAnimation {
    pub fn new(surface: Surface, motion: Motion, started_at_ms: f64) -> Self {
        Self {
            surface,
            clock: AnimationClock::new(started_at_ms),
            motion,
            state: LoopState::Running,
            last_t: 0.0,
        }
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn motion(&self) -> Motion {
        self.motion
    }

    pub fn is_torn_down(&self) -> bool {
        self.state == LoopState::TornDown
    }

    /// Render one frame. `measured` is the surface as laid out right now; a
    /// change in physical size since the last resize is picked up here.
    pub fn frame<C: Canvas2d + ?Sized>(
        &mut self,
        ctx: &mut C,
        measured: Surface,
        now_ms: f64,
    ) -> FrameOutcome {
        if self.state != LoopState::Running {
            return FrameOutcome::Halt;
        }

        if measured.physical_size() != self.surface.physical_size()
            || measured.scale() != self.surface.scale()
        {
            log::debug!(
                "surface changed between frames: {:?} -> {:?}",
                self.surface.physical_size(),
                measured.physical_size()
            );
            measured.apply(ctx);
        }
        self.surface = measured;

        match self.motion {
            Motion::Animate => {
                let t = self.clock.elapsed(now_ms);
                self.draw(ctx, t);
                FrameOutcome::Reschedule
            }
            Motion::Static => {
                self.draw(ctx, 0.0);
                self.state = LoopState::Halted;
                FrameOutcome::Halt
            }
        }
    }

    /// Resize the backing buffer now so the next frame draws at the new
    /// scale. Resizing wipes the canvas, so the last frame is redrawn at the
    /// same time before the browser paints.
    pub fn resize<C: Canvas2d + ?Sized>(&mut self, ctx: &mut C, surface: Surface) {
        if self.state == LoopState::TornDown {
            return;
        }
        if surface.physical_size() == self.surface.physical_size()
            && surface.scale() == self.surface.scale()
        {
            self.surface = surface;
            return;
        }
        log::debug!(
            "resize: logical {}x{} @ {} -> physical {:?}",
            surface.logical_width(),
            surface.logical_height(),
            surface.scale(),
            surface.physical_size()
        );
        self.surface = surface;
        surface.apply(ctx);
        let t = self.last_t;
        self.draw(ctx, t);
    }

    /// Returns `true` only for the call that actually tore down.
    pub fn teardown(&mut self) -> bool {
        if self.state == LoopState::TornDown {
            return false;
        }
        self.state = LoopState::TornDown;
        true
    }

    fn draw<C: Canvas2d + ?Sized>(&mut self, ctx: &mut C, t: f64) {
        self.last_t = t;
        draw_helix(
            ctx,
            self.surface.logical_width(),
            self.surface.logical_height(),
            t,
        );
    }
}
