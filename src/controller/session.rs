//! Intermission session data

use chrono::{DateTime, Utc};

/// Per-screening intermission session
///
/// `started` latches once the scheduled intermission fires and is never reset
/// for the life of the screening, so the automatic trigger cannot fire twice.
/// `countdown` is present exactly while the overlay is visible; the driving
/// loop keeps its 1-second ticker alive iff this record exists, which also
/// guarantees at most one ticker at a time.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalSession {
    pub started: bool,
    pub countdown: Option<Countdown>,
}

impl IntervalSession {
    pub fn new() -> Self {
        Self::default()
    }
}

/// An armed countdown, anchored to the wall-clock time it began
///
/// Remaining time is recomputed from the absolute start timestamp on every
/// tick rather than decremented, so the countdown self-corrects after timer
/// jitter or missed ticks.
#[derive(Debug, Clone, Copy)]
pub struct Countdown {
    started_at: DateTime<Utc>,
    duration_seconds: u64,
}

impl Countdown {
    /// Arm a countdown starting now
    pub fn begin(started_at: DateTime<Utc>, duration_seconds: u64) -> Self {
        Self {
            started_at,
            duration_seconds,
        }
    }

    /// Whole seconds elapsed since the countdown began, clamped at zero
    pub fn elapsed_seconds(&self, now: DateTime<Utc>) -> u64 {
        (now - self.started_at).num_seconds().max(0) as u64
    }

    /// Whole seconds left on the countdown
    pub fn remaining_seconds(&self, now: DateTime<Utc>) -> u64 {
        self.duration_seconds
            .saturating_sub(self.elapsed_seconds(now))
    }

    /// Whether the countdown has run out
    pub fn expired(&self, now: DateTime<Utc>) -> bool {
        self.elapsed_seconds(now) >= self.duration_seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 20, 0, 0).unwrap()
    }

    #[test]
    fn remaining_recomputes_from_absolute_start() {
        let countdown = Countdown::begin(base(), 60);
        assert_eq!(countdown.remaining_seconds(base()), 60);
        assert_eq!(countdown.remaining_seconds(base() + Duration::seconds(17)), 43);
        assert_eq!(countdown.remaining_seconds(base() + Duration::seconds(60)), 0);
        assert!(countdown.expired(base() + Duration::seconds(60)));
    }

    #[test]
    fn clock_going_backwards_clamps_elapsed() {
        let countdown = Countdown::begin(base(), 60);
        let earlier = base() - Duration::seconds(5);
        assert_eq!(countdown.elapsed_seconds(earlier), 0);
        assert_eq!(countdown.remaining_seconds(earlier), 60);
    }
}
