//! Countdown state structure and management

use serde::{Deserialize, Serialize};

use crate::utils::format_remaining;

/// Countdown state for tracking the intermission overlay timer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownState {
    pub active: bool,
    pub remaining_seconds: Option<u64>,
}

impl CountdownState {
    /// Create a new inactive countdown state
    pub fn new() -> Self {
        Self {
            active: false,
            remaining_seconds: None,
        }
    }

    /// Create an active countdown state with remaining seconds
    pub fn active(remaining_seconds: u64) -> Self {
        Self {
            active: true,
            remaining_seconds: Some(remaining_seconds),
        }
    }

    /// Create an inactive countdown state
    pub fn inactive() -> Self {
        Self {
            active: false,
            remaining_seconds: None,
        }
    }

    /// Check if the countdown is active
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Get remaining seconds if the countdown is active
    pub fn remaining_seconds(&self) -> Option<u64> {
        if self.active {
            self.remaining_seconds
        } else {
            None
        }
    }

    /// Overlay display string for the remaining time, if active
    pub fn display(&self) -> Option<String> {
        self.remaining_seconds().map(format_remaining)
    }
}

impl Default for CountdownState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_remaining_time() {
        assert_eq!(CountdownState::active(65).display().as_deref(), Some("1:05"));
        assert_eq!(CountdownState::inactive().display(), None);
    }

    #[test]
    fn inactive_state_reports_no_remaining_time() {
        let state = CountdownState {
            active: false,
            remaining_seconds: Some(30),
        };
        assert_eq!(state.remaining_seconds(), None);
    }
}
