//! Count-up reminder of how long the DJ has been playing.

use std::time::{SystemTime, UNIX_EPOCH};

const HOUR: i64 = 60 * 60;
const MINUTE: i64 = 60;

/// Elapsed time split into whole hours, minutes and seconds.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Elapsed {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Elapsed {
    /// Time since `start - offset` at `now`, all in unix seconds.
    ///
    /// Zero or negative spans yield all zeros. Out-of-range offsets
    /// saturate instead of wrapping.
    pub fn between(start: i64, offset: i64, now: i64) -> Self {
        let total = now.saturating_sub(start.saturating_sub(offset));
        if total <= 0 {
            return Self::default();
        }
        Self {
            hours: total / HOUR,
            minutes: total % HOUR / MINUTE,
            seconds: total % MINUTE,
        }
    }
}

impl std::fmt::Display for Elapsed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} hours, {} minutes and {} seconds",
            self.hours, self.minutes, self.seconds
        )
    }
}

/// Current wall-clock time in unix seconds.
pub fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
