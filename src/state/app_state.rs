//! Main application state management

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};

use chrono::{DateTime, Utc};
use tokio::sync::{mpsc, watch};
use tracing::{info, warn};

use crate::config::Config;
use crate::events::ScreeningEvent;

use super::{CountdownState, Screen, Screening};

/// Main application state shared between the tasks and the control API
#[derive(Debug)]
pub struct AppState {
    /// Current screening state (screen, playback, overlay)
    pub screening: Arc<Mutex<Screening>>,
    /// Intermission schedule
    pub threshold_seconds: u64,
    pub duration_seconds: u64,
    /// Kiosk hardening and test-control flags
    pub kiosk: bool,
    pub manual_toggle: bool,
    /// Countdown overlay state
    pub countdown: Arc<Mutex<CountdownState>>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
    /// Channel into the screening loop
    pub event_tx: mpsc::UnboundedSender<ScreeningEvent>,
    /// Channel for countdown updates
    pub countdown_tx: watch::Sender<CountdownState>,
    /// Keep the receiver alive to prevent channel closure
    pub _countdown_rx: watch::Receiver<CountdownState>,
}

impl AppState {
    /// Create a new AppState from the parsed configuration
    pub fn new(config: &Config, event_tx: mpsc::UnboundedSender<ScreeningEvent>) -> Self {
        let (countdown_tx, countdown_rx) = watch::channel(CountdownState::new());

        Self {
            screening: Arc::new(Mutex::new(Screening::new(config.media_duration as f64))),
            threshold_seconds: config.threshold,
            duration_seconds: config.duration,
            kiosk: config.kiosk,
            manual_toggle: config.manual_toggle,
            countdown: Arc::new(Mutex::new(CountdownState::new())),
            start_time: Instant::now(),
            port: config.port,
            host: config.host.clone(),
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
            event_tx,
            countdown_tx,
            _countdown_rx: countdown_rx,
        }
    }

    /// Update the screening state and track the triggering action
    pub fn update_screening<F>(&self, action: &str, updater: F) -> Result<Screening, String>
    where
        F: FnOnce(&mut Screening),
    {
        // Lock the screening state and apply the update
        let mut screening = self.screening.lock()
            .map_err(|e| format!("Failed to lock screening state: {}", e))?;

        updater(&mut *screening);
        let snapshot = screening.clone();
        drop(screening); // Release the lock early

        // Update last action tracking
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }

        Ok(snapshot)
    }

    /// Set the playback state
    pub fn set_playing(&self, playing: bool) -> Result<Screening, String> {
        info!("Setting playback to: {}", if playing { "playing" } else { "paused" });
        self.update_screening(
            if playing { "play" } else { "pause" },
            |screening| screening.playing = playing,
        )
    }

    /// Switch the presented screen
    pub fn set_screen(&self, screen: Screen) -> Result<Screening, String> {
        info!("Presenting screen: {:?}", screen);
        self.update_screening(
            match screen {
                Screen::Intro => "intro-screen",
                Screen::Player => "player-screen",
            },
            |screening| screening.screen = screen,
        )
    }

    /// Show or hide the intermission overlay
    pub fn set_overlay(&self, visible: bool) -> Result<Screening, String> {
        info!("Intermission overlay {}", if visible { "shown" } else { "hidden" });
        self.update_screening(
            if visible { "interval-show" } else { "interval-hide" },
            |screening| screening.overlay_visible = visible,
        )
    }

    /// Set the fullscreen state of the presentation surface
    pub fn set_fullscreen(&self, fullscreen: bool) -> Result<Screening, String> {
        info!("Fullscreen {}", if fullscreen { "entered" } else { "left" });
        self.update_screening(
            "fullscreen",
            |screening| screening.fullscreen = fullscreen,
        )
    }

    /// Toggle the fullscreen state
    pub fn toggle_fullscreen(&self) -> Result<Screening, String> {
        let fullscreen = !self.snapshot()?.fullscreen;
        self.set_fullscreen(fullscreen)
    }

    /// Record that the scheduled intermission has fired this session
    pub fn mark_interval_fired(&self) -> Result<(), String> {
        let mut screening = self.screening.lock()
            .map_err(|e| format!("Failed to lock screening state: {}", e))?;

        if !screening.interval_fired {
            screening.interval_fired = true;
            info!("Scheduled intermission latched for this session");
        }

        Ok(())
    }

    /// Get a snapshot of the current screening state
    pub fn snapshot(&self) -> Result<Screening, String> {
        self.screening.lock()
            .map(|screening| screening.clone())
            .map_err(|e| format!("Failed to lock screening state: {}", e))
    }

    /// Get the current countdown state
    pub fn get_countdown(&self) -> Result<CountdownState, String> {
        self.countdown.lock()
            .map(|countdown| countdown.clone())
            .map_err(|e| format!("Failed to lock countdown state: {}", e))
    }

    /// Update the countdown state and notify watchers
    pub fn update_countdown(&self, active: bool, remaining_seconds: Option<u64>) -> Result<(), String> {
        let mut countdown = self.countdown.lock()
            .map_err(|e| format!("Failed to lock countdown state: {}", e))?;

        countdown.active = active;
        countdown.remaining_seconds = remaining_seconds;
        let new_countdown = countdown.clone();
        drop(countdown);

        // Notify countdown watchers
        if let Err(e) = self.countdown_tx.send(new_countdown) {
            warn!("Failed to send countdown update: {}", e);
        }

        Ok(())
    }

    /// Send an event into the screening loop
    pub fn dispatch(&self, event: ScreeningEvent) -> Result<(), String> {
        self.event_tx.send(event)
            .map_err(|e| format!("Screening loop is not running: {}", e))
    }

    /// Calculate daemon uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}
