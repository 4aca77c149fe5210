//! Single-phase countdown.

use std::time::{Duration, Instant};

use crate::clock::{SystemClock, TimeSource};

/// Tracks one phase's start time and duration.
///
/// `reset` and `set_duration` are independent: starting a clean phase on an
/// existing timer takes both. [`Session`](crate::Session) sidesteps this by
/// building a fresh timer per phase.
#[derive(Debug, Clone)]
pub struct SessionTimer<C = SystemClock> {
    clock: C,
    started: Instant,
    duration: Duration,
}

impl<C: TimeSource> SessionTimer<C> {
    /// Starts counting down from now.
    pub fn new(clock: C, duration: Duration) -> Self {
        let started = clock.now();
        Self {
            clock,
            started,
            duration,
        }
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.clock.now().saturating_duration_since(self.started)
    }

    /// A zero-length phase is done as soon as it starts.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.elapsed() >= self.duration
    }

    /// Whole seconds left, rounded up; zero once the phase is done.
    #[must_use]
    pub fn seconds_remaining(&self) -> u64 {
        match self.duration.checked_sub(self.elapsed()) {
            Some(left) => left.as_secs() + u64::from(left.subsec_nanos() > 0),
            None => 0,
        }
    }

    /// Fraction of the phase that has passed, clamped to `[0, 1]`.
    #[must_use]
    pub fn percent_elapsed(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed().as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Restarts the countdown from now without touching the duration.
    pub fn reset(&mut self) {
        self.started = self.clock.now();
    }

    /// Replaces the duration without restarting the countdown.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }
}
