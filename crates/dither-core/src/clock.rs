//! Frame lifecycle and per-tick state.

use glam::Vec2;
use std::time::Duration;

/// Lifecycle of the frame loop. `Disposed` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Paused,
    Disposed,
}

/// State owned by the loop controller and mutated once per tick.
///
/// Elapsed animation time advances by the real duration between ticks, so
/// playback speed does not depend on the display refresh rate. When the
/// caller freezes animation, time simply stops advancing; the field is still
/// sampled at the frozen timestamp.
#[derive(Clone, Debug)]
pub struct FrameState {
    phase: Phase,
    elapsed: f64,
    pointer: Option<Vec2>,
    redraw_queued: bool,
}

impl Default for FrameState {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            elapsed: 0.0,
            pointer: None,
            redraw_queued: false,
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Idle/Paused -> Running. Returns false (and does nothing) once
    /// disposed.
    pub fn start(&mut self) -> bool {
        match self.phase {
            Phase::Idle | Phase::Paused => {
                self.phase = Phase::Running;
                true
            }
            Phase::Running => true,
            Phase::Disposed => false,
        }
    }

    /// Running -> Paused; retained state, no further time advancement.
    pub fn pause(&mut self) {
        if self.phase == Phase::Running {
            self.phase = Phase::Paused;
        }
    }

    /// Any state -> Disposed. Idempotent.
    pub fn dispose(&mut self) {
        self.phase = Phase::Disposed;
        self.pointer = None;
        self.redraw_queued = false;
    }

    /// Advance animation time by the real elapsed duration. No-op unless
    /// Running, and held still while `frozen` (the caller's
    /// `disable_animation`).
    pub fn advance(&mut self, dt: Duration, frozen: bool) {
        if self.phase == Phase::Running && !frozen {
            self.elapsed += dt.as_secs_f64();
        }
    }

    /// Animation time handed to the field generator.
    #[inline]
    pub fn time(&self) -> f32 {
        self.elapsed as f32
    }

    /// Last-known pointer position in normalized viewport units, written by
    /// the event handler and read only at tick boundaries. Last value wins.
    pub fn set_pointer(&mut self, uv: Vec2) {
        if self.phase != Phase::Disposed {
            self.pointer = Some(uv);
        }
    }

    #[inline]
    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    /// Mark that the next opportunity must redraw even if animation is
    /// frozen (config push or viewport change).
    pub fn queue_redraw(&mut self) {
        if self.phase != Phase::Disposed {
            self.redraw_queued = true;
        }
    }

    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw_queued)
    }
}
