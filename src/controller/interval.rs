//! Intermission controller
//!
//! Owns all intermission timing state and reacts to three inputs: playback
//! position updates, countdown ticks, and the manual toggle. The controller
//! runs on a single task; every mutation arrives through one event loop, so
//! there is no locking here.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::clock::Clock;
use crate::surface::{PlaybackSurface, PresentationShell};

use super::session::{Countdown, IntervalSession};

/// Controller for the scheduled intermission of one screening
#[derive(Debug)]
pub struct IntervalController<P, S, C> {
    threshold_seconds: f64,
    duration_seconds: u64,
    playback: P,
    shell: S,
    clock: C,
    session: IntervalSession,
}

impl<P, S, C> IntervalController<P, S, C>
where
    P: PlaybackSurface,
    S: PresentationShell,
    C: Clock,
{
    /// Create a controller with a fixed schedule
    pub fn new(threshold_seconds: u64, duration_seconds: u64, playback: P, shell: S, clock: C) -> Self {
        Self {
            threshold_seconds: threshold_seconds as f64,
            duration_seconds,
            playback,
            shell,
            clock,
            session: IntervalSession::new(),
        }
    }

    /// React to a playback position update
    ///
    /// Fires the intermission the first time the position reaches the
    /// threshold. Latched once fired: later positions, including seeks back
    /// and forth across the threshold, never retrigger.
    pub fn on_position_update(&mut self, position_seconds: f64) {
        if position_seconds >= self.threshold_seconds && !self.session.started {
            info!(
                "Playback reached {:.1}s, starting the intermission",
                position_seconds
            );
            self.show_interval();
        }
    }

    /// Pause playback and show the countdown overlay
    pub fn show_interval(&mut self) {
        self.session.started = true;
        self.playback.pause();
        self.shell.show_overlay();
        self.start_countdown(self.clock.now());
    }

    /// Hide the overlay and resume playback
    ///
    /// Cancels the countdown; the `started` latch survives.
    pub fn hide_interval(&mut self) {
        self.shell.hide_overlay();
        self.playback.play();
        self.session.countdown = None;
    }

    /// Arm the countdown and render the full duration immediately
    fn start_countdown(&mut self, now: DateTime<Utc>) {
        self.session.countdown = Some(Countdown::begin(now, self.duration_seconds));
        self.shell.render_countdown(self.duration_seconds);
    }

    /// Advance the countdown by one tick
    ///
    /// Remaining time comes from the absolute start timestamp, not a
    /// decremented counter, so a late or missed tick lands on the right
    /// value. A tick with no armed countdown is a no-op.
    pub fn on_countdown_tick(&mut self) {
        let Some(countdown) = self.session.countdown else {
            debug!("Countdown tick with no armed countdown, ignoring");
            return;
        };

        let now = self.clock.now();
        if countdown.expired(now) {
            info!("Intermission over, resuming playback");
            self.session.countdown = None;
            self.hide_interval();
        } else {
            self.shell.render_countdown(countdown.remaining_seconds(now));
        }
    }

    /// Manual toggle: hide the overlay if visible, show it otherwise
    ///
    /// Unlike the automatic path this is not latched; it can re-arm a
    /// countdown after the scheduled intermission already ran.
    pub fn toggle_interval(&mut self) {
        if self.shell.is_overlay_visible() {
            self.hide_interval();
        } else {
            self.show_interval();
        }
    }

    /// Whether the scheduled intermission has fired this session
    pub fn interval_started(&self) -> bool {
        self.session.started
    }

    /// Whether a countdown is currently armed
    ///
    /// The driving loop keeps exactly one 1-second ticker alive while this
    /// returns true.
    pub fn countdown_active(&self) -> bool {
        self.session.countdown.is_some()
    }
}
