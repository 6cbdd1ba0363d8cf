//! Screening state structure and management

use serde::{Deserialize, Serialize};

/// Which screen the kiosk is currently presenting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    Intro,
    Player,
}

/// Screening state structure - the visible surface of the kiosk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Screening {
    /// Currently presented screen
    pub screen: Screen,
    /// Whether playback is advancing
    pub playing: bool,
    /// Whether the presentation surface is fullscreen
    pub fullscreen: bool,
    /// Whether the intermission overlay is visible
    pub overlay_visible: bool,
    /// Current playback position in seconds
    pub position_seconds: f64,
    /// Total running time of the media in seconds
    pub media_duration_seconds: f64,
    /// Whether the scheduled intermission has fired this session
    pub interval_fired: bool,
}

impl Screening {
    /// Create a new screening resting on the intro screen
    pub fn new(media_duration_seconds: f64) -> Self {
        Self {
            screen: Screen::Intro,
            playing: false,
            fullscreen: false,
            overlay_visible: false,
            position_seconds: 0.0,
            media_duration_seconds,
            interval_fired: false,
        }
    }

    /// Advance the playhead by `dt_seconds` of real time
    ///
    /// Returns the new position when playback actually advanced, `None` when
    /// the kiosk is on the intro screen or paused. Positions clamp at the end
    /// of the media; crossing the end stops playback.
    pub fn advance_playhead(&mut self, dt_seconds: f64) -> Option<f64> {
        if self.screen != Screen::Player || !self.playing {
            return None;
        }

        self.position_seconds =
            (self.position_seconds + dt_seconds).min(self.media_duration_seconds);
        if self.at_end() {
            self.playing = false;
        }

        Some(self.position_seconds)
    }

    /// Check whether the playhead has reached the end of the media
    pub fn at_end(&self) -> bool {
        self.position_seconds >= self.media_duration_seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playhead_only_advances_while_playing() {
        let mut screening = Screening::new(100.0);
        assert_eq!(screening.advance_playhead(1.0), None);

        screening.screen = Screen::Player;
        screening.playing = true;
        assert_eq!(screening.advance_playhead(1.5), Some(1.5));

        screening.playing = false;
        assert_eq!(screening.advance_playhead(1.0), None);
        assert_eq!(screening.position_seconds, 1.5);
    }

    #[test]
    fn playhead_clamps_at_end_and_stops() {
        let mut screening = Screening::new(10.0);
        screening.screen = Screen::Player;
        screening.playing = true;

        assert_eq!(screening.advance_playhead(25.0), Some(10.0));
        assert!(screening.at_end());
        assert!(!screening.playing);
    }
}
