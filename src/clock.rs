//! Wall-clock abstraction for the interval controller
//!
//! The countdown recomputes remaining time from absolute timestamps, so the
//! only thing the core needs from its environment is "what time is it now".
//! Tests substitute a hand-advanced clock.

use chrono::{DateTime, Utc};

/// Source of the current wall-clock time
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
