//! Events consumed by the screening loop
//!
//! Everything that mutates the interval controller flows through one mpsc
//! channel into a single task, so events are processed strictly in arrival
//! order and the controller never sees concurrent calls.

/// Input events for the screening loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScreeningEvent {
    /// Leave the intro screen and begin playback
    StartScreening,
    /// Playhead advanced to a new position (seconds)
    PositionUpdate(f64),
    /// Playback reached the end of the media
    PlaybackFinished,
    /// Manual intermission toggle (test controls)
    IntervalToggle,
    /// Play/pause toggle from the keyboard or control API
    PlaybackToggle,
    /// Fullscreen toggle request
    FullscreenToggle,
}
