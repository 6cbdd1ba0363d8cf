//! Playback surface backed by the shared screening state

use std::sync::Arc;

use tracing::error;

use crate::state::AppState;

use super::PlaybackSurface;

/// Handle that drives playback by mutating the shared screening state
#[derive(Debug, Clone)]
pub struct PlayerHandle {
    state: Arc<AppState>,
}

impl PlayerHandle {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }
}

impl PlaybackSurface for PlayerHandle {
    fn play(&mut self) {
        if let Err(e) = self.state.set_playing(true) {
            error!("Failed to resume playback: {}", e);
        }
    }

    fn pause(&mut self) {
        if let Err(e) = self.state.set_playing(false) {
            error!("Failed to pause playback: {}", e);
        }
    }

    fn is_paused(&self) -> bool {
        match self.state.snapshot() {
            Ok(screening) => !screening.playing,
            Err(e) => {
                error!("Failed to read playback state: {}", e);
                true
            }
        }
    }
}
