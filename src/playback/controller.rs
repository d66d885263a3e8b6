//! Playback state machine over a step trace
//!
//! Owns one [`StepTrace`] and a cursor into it, and exposes the transport
//! controls: play, pause, single-step both ways, reset, seek-to-end, speed.
//! The only side effects are the cursor and the single pending
//! [`TickTimer`]; the controller never touches the list or the mutation
//! engine.
//!
//! All timing methods take `now: Instant` so the event loop supplies real
//! time and tests supply synthetic time.

use std::time::{Duration, Instant};

use crate::engine::{Step, StepTrace};

use super::timer::TickTimer;

/// Auto-play period when the speed slider is at zero.
pub const BASE_PERIOD_MS: u64 = 2000;

/// Floor for the auto-play period, whatever the speed.
pub const MIN_PERIOD_MS: u64 = 100;

/// Where the controller is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackMode {
    /// At the first step, not advancing.
    Idle,
    /// Auto-advancing on the timer.
    Playing,
    /// Stopped mid-trace.
    Paused,
    /// Cursor reached the last step.
    Finished,
}

/// The playback controller.
#[derive(Debug)]
pub struct PlaybackController {
    trace: StepTrace,
    cursor: usize,
    mode: PlaybackMode,
    speed: u64,
    timer: Option<TickTimer>,
}

impl PlaybackController {
    /// A controller with no trace loaded. [`current_step`] returns `None`
    /// until the first [`load`].
    ///
    /// [`current_step`]: Self::current_step
    /// [`load`]: Self::load
    pub fn new() -> Self {
        PlaybackController {
            trace: StepTrace::new(),
            cursor: 0,
            mode: PlaybackMode::Idle,
            speed: BASE_PERIOD_MS / 2,
            timer: None,
        }
    }

    /// Replace the trace. Always resets first: cursor to zero, mode to
    /// Idle, pending timer dropped. The speed setting survives.
    pub fn load(&mut self, trace: StepTrace) {
        self.reset();
        self.trace = trace;
    }

    /// Start auto-advancing. Only from Idle or Paused, and only when there
    /// is a step left to advance to.
    pub fn play(&mut self, now: Instant) {
        if !matches!(self.mode, PlaybackMode::Idle | PlaybackMode::Paused) {
            return;
        }
        if !self.has_next() {
            return;
        }
        self.mode = PlaybackMode::Playing;
        self.timer = Some(TickTimer::new(self.period(), now));
    }

    /// Apply at most one due tick. Returns true if the cursor advanced.
    ///
    /// The tick that lands on the last step still applies, then playback
    /// halts there; it never loops.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.mode != PlaybackMode::Playing {
            return false;
        }
        let due = self.timer.is_some_and(|t| t.is_due(now));
        if !due {
            return false;
        }
        self.cursor += 1;
        if self.has_next() {
            if let Some(timer) = self.timer.as_mut() {
                timer.reschedule(now);
            }
        } else {
            self.mode = PlaybackMode::Finished;
            self.timer = None;
        }
        true
    }

    /// Stop auto-advancing, keeping the cursor where it is.
    pub fn pause(&mut self) {
        if self.mode == PlaybackMode::Playing {
            self.mode = PlaybackMode::Paused;
            self.timer = None;
        }
    }

    /// Advance one step. No-op at the last step. Cancels auto-play.
    pub fn step_forward(&mut self) {
        self.pause();
        if self.has_next() {
            self.cursor += 1;
        }
    }

    /// Go back one step. No-op at the first step. Leaving the last step
    /// drops out of Finished so play can resume.
    pub fn step_backward(&mut self) {
        self.pause();
        if self.cursor > 0 {
            self.cursor -= 1;
            if self.mode == PlaybackMode::Finished {
                self.mode = PlaybackMode::Paused;
            }
        }
    }

    /// Back to the first step, Idle, timer dropped.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.mode = PlaybackMode::Idle;
        self.timer = None;
    }

    /// Jump to the last step. Cancels auto-play.
    pub fn seek_to_end(&mut self) {
        self.pause();
        if !self.trace.is_empty() {
            self.cursor = self.trace.len() - 1;
            self.mode = PlaybackMode::Finished;
        }
    }

    /// Set the speed slider, clamped to `0..=BASE_PERIOD_MS`. Takes effect
    /// on the next scheduled tick; a pending wait is never shortened.
    pub fn set_speed(&mut self, speed: u64) {
        self.speed = speed.min(BASE_PERIOD_MS);
        let period = self.period();
        if let Some(timer) = self.timer.as_mut() {
            timer.set_period(period);
        }
    }

    pub fn speed(&self) -> u64 {
        self.speed
    }

    /// The tick period the current speed maps to.
    pub fn period(&self) -> Duration {
        Duration::from_millis((BASE_PERIOD_MS - self.speed).max(MIN_PERIOD_MS))
    }

    /// The single read point for the presentation layer.
    pub fn current_step(&self) -> Option<&Step> {
        self.trace.get(self.cursor)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    pub fn trace(&self) -> &StepTrace {
        &self.trace
    }

    fn has_next(&self) -> bool {
        self.cursor + 1 < self.trace.len()
    }
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self::new()
    }
}
