//! Phase driver.

use termodoro_types::{PhaseKind, SessionSettings};
use tracing::info;

use crate::clock::{SystemClock, TimeSource};
use crate::state::SessionState;
use crate::timer::SessionTimer;

/// A running work/break cycle.
///
/// Owns the round counter and the current phase's timer. Each phase gets a
/// fresh [`SessionTimer`]; the previous one is dropped on transition.
#[derive(Debug)]
pub struct Session<C = SystemClock> {
    clock: C,
    state: SessionState,
    timer: SessionTimer<C>,
    phase: PhaseKind,
}

impl<C: TimeSource + Clone> Session<C> {
    /// Leaves idle and begins the first work phase.
    pub fn start(clock: C, settings: SessionSettings) -> Self {
        let mut state = SessionState::new(settings);
        let duration = state.work_duration();
        let timer = SessionTimer::new(clock.clone(), duration);

        info!(
            phase = %PhaseKind::Work,
            round = state.round(),
            duration_secs = duration.as_secs(),
            "Session started"
        );

        Self {
            clock,
            state,
            timer,
            phase: PhaseKind::Work,
        }
    }

    /// Advances to the next phase if the current one is done.
    ///
    /// Returns the phase that just began. At most one transition happens per
    /// call, so zero-length phases still alternate one tick at a time.
    pub fn tick(&mut self) -> Option<PhaseKind> {
        if !self.timer.is_done() {
            return None;
        }

        let (next, duration) = match self.phase {
            PhaseKind::Work => self.state.begin_break(),
            PhaseKind::ShortBreak | PhaseKind::LongBreak => {
                (PhaseKind::Work, self.state.work_duration())
            }
        };

        self.timer = SessionTimer::new(self.clock.clone(), duration);
        self.phase = next;

        info!(
            phase = %next,
            round = self.state.round(),
            completed = self.state.completed_rounds(),
            duration_secs = duration.as_secs(),
            "Phase started"
        );

        Some(next)
    }

    #[must_use]
    pub fn phase(&self) -> PhaseKind {
        self.phase
    }

    #[must_use]
    pub fn timer(&self) -> &SessionTimer<C> {
        &self.timer
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn completed_rounds(&self) -> u32 {
        self.state.completed_rounds()
    }

    #[must_use]
    pub fn next_long_in(&self) -> u32 {
        self.state.next_long_in()
    }

    #[must_use]
    pub fn seconds_remaining(&self) -> u64 {
        self.timer.seconds_remaining()
    }

    /// Fraction of the current phase that has passed, for the hand.
    ///
    /// `None` once the phase is done: the face is drawn without a hand until
    /// the next tick starts the following phase.
    #[must_use]
    pub fn hand_position(&self) -> Option<f64> {
        if self.timer.is_done() {
            None
        } else {
            Some(self.timer.percent_elapsed())
        }
    }
}
