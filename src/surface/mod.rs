//! Collaborator seams between the interval controller and the kiosk
//!
//! The controller core never touches the shared state or the log directly;
//! it commands these two surfaces. Production implementations write through
//! [`crate::state::AppState`], tests substitute recording fakes.

pub mod player;
pub mod shell;

pub use player::PlayerHandle;
pub use shell::ShellHandle;

/// Playback commands and queries consumed by the controller
pub trait PlaybackSurface {
    /// Resume playback
    fn play(&mut self);
    /// Pause playback
    fn pause(&mut self);
    /// Whether playback is currently paused
    fn is_paused(&self) -> bool;
}

/// Screen and overlay commands consumed by the controller
pub trait PresentationShell {
    /// Present the intro screen
    fn show_intro_screen(&mut self);
    /// Present the player screen
    fn show_player_screen(&mut self);
    /// Make the intermission overlay visible
    fn show_overlay(&mut self);
    /// Hide the intermission overlay
    fn hide_overlay(&mut self);
    /// Whether the intermission overlay is visible
    fn is_overlay_visible(&self) -> bool;
    /// Update the overlay countdown display with the remaining seconds
    fn render_countdown(&mut self, remaining_seconds: u64);
}
