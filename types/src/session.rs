//! Phase kinds, session durations and remaining-time text.

use std::fmt;
use std::num::NonZeroU32;
use std::time::Duration;

use thiserror::Error;

const SECONDS_PER_MINUTE: u64 = 60;

/// One interval of the work/break cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseKind {
    Work,
    ShortBreak,
    LongBreak,
}

impl PhaseKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            PhaseKind::Work => "Work",
            PhaseKind::ShortBreak => "Short break",
            PhaseKind::LongBreak => "Long break",
        }
    }

    #[must_use]
    pub const fn is_break(self) -> bool {
        matches!(self, PhaseKind::ShortBreak | PhaseKind::LongBreak)
    }
}

impl fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("before-long-rounds must be at least 1")]
    ZeroBeforeLong,
    #[error("{field} of {minutes} minutes does not fit in a duration")]
    DurationOverflow { field: &'static str, minutes: u64 },
}

/// Phase durations and the long-break cadence for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    work: Duration,
    short_break: Duration,
    long_break: Duration,
    before_long: NonZeroU32,
}

impl SessionSettings {
    pub const DEFAULT_WORK_MINUTES: u64 = 30;
    pub const DEFAULT_SHORT_BREAK_MINUTES: u64 = 5;
    pub const DEFAULT_LONG_BREAK_MINUTES: u64 = 15;
    pub const DEFAULT_BEFORE_LONG_ROUNDS: u32 = 4;

    pub fn new(
        work: Duration,
        short_break: Duration,
        long_break: Duration,
        before_long: u32,
    ) -> Result<Self, SettingsError> {
        let before_long = NonZeroU32::new(before_long).ok_or(SettingsError::ZeroBeforeLong)?;
        Ok(Self {
            work,
            short_break,
            long_break,
            before_long,
        })
    }

    pub fn from_minutes(
        work: u64,
        short_break: u64,
        long_break: u64,
        before_long: u32,
    ) -> Result<Self, SettingsError> {
        Self::new(
            minutes("work-minutes", work)?,
            minutes("short-break-minutes", short_break)?,
            minutes("long-break-minutes", long_break)?,
            before_long,
        )
    }

    #[must_use]
    pub const fn work(&self) -> Duration {
        self.work
    }

    #[must_use]
    pub const fn short_break(&self) -> Duration {
        self.short_break
    }

    #[must_use]
    pub const fn long_break(&self) -> Duration {
        self.long_break
    }

    /// Work rounds between long breaks.
    #[must_use]
    pub const fn before_long(&self) -> NonZeroU32 {
        self.before_long
    }

    #[must_use]
    pub const fn duration(&self, kind: PhaseKind) -> Duration {
        match kind {
            PhaseKind::Work => self.work,
            PhaseKind::ShortBreak => self.short_break,
            PhaseKind::LongBreak => self.long_break,
        }
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            work: Duration::from_secs(Self::DEFAULT_WORK_MINUTES * SECONDS_PER_MINUTE),
            short_break: Duration::from_secs(
                Self::DEFAULT_SHORT_BREAK_MINUTES * SECONDS_PER_MINUTE,
            ),
            long_break: Duration::from_secs(Self::DEFAULT_LONG_BREAK_MINUTES * SECONDS_PER_MINUTE),
            before_long: NonZeroU32::new(Self::DEFAULT_BEFORE_LONG_ROUNDS)
                .unwrap_or(NonZeroU32::MIN),
        }
    }
}

fn minutes(field: &'static str, minutes: u64) -> Result<Duration, SettingsError> {
    minutes
        .checked_mul(SECONDS_PER_MINUTE)
        .map(Duration::from_secs)
        .ok_or(SettingsError::DurationOverflow { field, minutes })
}

/// Remaining time as zero-padded `MM:SS`.
///
/// Minutes are not wrapped into hours, so 100 minutes reads `100:00`.
///
/// ```
/// assert_eq!(termodoro_types::format_remaining(61), "01:01");
/// ```
#[must_use]
pub fn format_remaining(seconds: u64) -> String {
    format!(
        "{:02}:{:02}",
        seconds / SECONDS_PER_MINUTE,
        seconds % SECONDS_PER_MINUTE
    )
}
