//! Presentation shell backed by the shared screening state
//!
//! The countdown display has no pixels here; rendering means publishing the
//! remaining time to the countdown channel and the debug log, where the
//! status API and any attached front end pick it up.

use std::sync::Arc;

use tracing::{debug, error};

use crate::state::{AppState, Screen};
use crate::utils::format_remaining;

use super::PresentationShell;

/// Handle that switches screens and the overlay via the shared state
#[derive(Debug, Clone)]
pub struct ShellHandle {
    state: Arc<AppState>,
}

impl ShellHandle {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }
}

impl PresentationShell for ShellHandle {
    fn show_intro_screen(&mut self) {
        if let Err(e) = self.state.set_screen(Screen::Intro) {
            error!("Failed to present intro screen: {}", e);
        }
    }

    fn show_player_screen(&mut self) {
        if let Err(e) = self.state.set_screen(Screen::Player) {
            error!("Failed to present player screen: {}", e);
        }
    }

    fn show_overlay(&mut self) {
        if let Err(e) = self.state.set_overlay(true) {
            error!("Failed to show intermission overlay: {}", e);
        }
    }

    fn hide_overlay(&mut self) {
        if let Err(e) = self.state.set_overlay(false) {
            error!("Failed to hide intermission overlay: {}", e);
        }
        if let Err(e) = self.state.update_countdown(false, None) {
            error!("Failed to clear countdown state: {}", e);
        }
    }

    fn is_overlay_visible(&self) -> bool {
        match self.state.snapshot() {
            Ok(screening) => screening.overlay_visible,
            Err(e) => {
                error!("Failed to read overlay state: {}", e);
                false
            }
        }
    }

    fn render_countdown(&mut self, remaining_seconds: u64) {
        debug!("Intermission countdown: {}", format_remaining(remaining_seconds));
        if let Err(e) = self.state.update_countdown(true, Some(remaining_seconds)) {
            error!("Failed to publish countdown update: {}", e);
        }
    }
}
