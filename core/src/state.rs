//! Round counting and break selection.

use std::time::Duration;

use termodoro_types::{PhaseKind, SessionSettings};

/// Round counter and long-break cadence.
///
/// `round` counts work phases *entered*: fetching the work duration is what
/// starts a round. A long break is due when the round just worked is a
/// multiple of `before_long`.
#[derive(Debug, Clone)]
pub struct SessionState {
    settings: SessionSettings,
    round: u32,
    phase: Option<PhaseKind>,
}

impl SessionState {
    #[must_use]
    pub fn new(settings: SessionSettings) -> Self {
        Self {
            settings,
            round: 0,
            phase: None,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// `None` until the first work phase is entered.
    #[must_use]
    pub fn phase(&self) -> Option<PhaseKind> {
        self.phase
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Work rounds left after the current one before a long break.
    ///
    /// `0` means the break following the current round is long. Before any
    /// round has started the full cadence is still ahead, so the result is
    /// `before_long`.
    #[must_use]
    pub fn next_long_in(&self) -> u32 {
        let before_long = self.settings.before_long().get();
        let remainder = self.round % before_long;
        if self.round > 0 && remainder == 0 {
            0
        } else {
            before_long - remainder
        }
    }

    #[must_use]
    pub fn break_kind(&self) -> PhaseKind {
        if self.next_long_in() == 0 {
            PhaseKind::LongBreak
        } else {
            PhaseKind::ShortBreak
        }
    }

    #[must_use]
    pub fn break_duration(&self) -> Duration {
        self.settings.duration(self.break_kind())
    }

    /// Enters a work phase and returns its duration.
    ///
    /// Advances the round counter: call exactly once per work phase.
    pub fn work_duration(&mut self) -> Duration {
        self.round = self.round.saturating_add(1);
        self.phase = Some(PhaseKind::Work);
        self.settings.work()
    }

    /// Enters the break that follows the current round.
    ///
    /// The kind is fixed here, when the break begins.
    pub fn begin_break(&mut self) -> (PhaseKind, Duration) {
        let kind = self.break_kind();
        self.phase = Some(kind);
        (kind, self.settings.duration(kind))
    }

    /// Fully finished work phases.
    #[must_use]
    pub fn completed_rounds(&self) -> u32 {
        match self.phase {
            Some(PhaseKind::Work) => self.round.saturating_sub(1),
            _ => self.round,
        }
    }
}
