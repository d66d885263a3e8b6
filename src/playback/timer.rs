#![allow(dead_code)] // Complete API module, not all methods used by the binary
//! Cancellable tick timer for auto-play
//!
//! A single pending deadline owned by the playback controller. There is no
//! background thread: the event loop polls [`TickTimer::is_due`] with the
//! current instant, the same way the app loop polls for input. Cancellation
//! is dropping the timer.

use std::time::{Duration, Instant};

/// One pending tick plus the period for the ticks after it.
#[derive(Debug, Clone, Copy)]
pub struct TickTimer {
    deadline: Instant,
    period: Duration,
}

impl TickTimer {
    /// Schedule the first tick one period after `now`.
    pub fn new(period: Duration, now: Instant) -> Self {
        TickTimer {
            deadline: now + period,
            period,
        }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    /// Schedule the next tick one period after `now`.
    pub fn reschedule(&mut self, now: Instant) {
        self.deadline = now + self.period;
    }

    /// Change the period for future ticks. The pending deadline is not
    /// moved; a speed change never shortens or extends an in-flight wait.
    pub fn set_period(&mut self, period: Duration) {
        self.period = period;
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn due_only_at_or_after_deadline() {
        let now = Instant::now();
        let timer = TickTimer::new(Duration::from_millis(100), now);
        assert!(!timer.is_due(now));
        assert!(!timer.is_due(now + Duration::from_millis(99)));
        assert!(timer.is_due(now + Duration::from_millis(100)));
        assert!(timer.is_due(now + Duration::from_millis(500)));
    }

    #[test]
    fn set_period_leaves_pending_deadline_alone() {
        let now = Instant::now();
        let mut timer = TickTimer::new(Duration::from_millis(1000), now);
        timer.set_period(Duration::from_millis(100));
        assert!(!timer.is_due(now + Duration::from_millis(500)));
        assert!(timer.is_due(now + Duration::from_millis(1000)));

        timer.reschedule(now + Duration::from_millis(1000));
        assert!(timer.is_due(now + Duration::from_millis(1100)));
    }
}
