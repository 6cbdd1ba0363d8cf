//! Screening event loop
//!
//! The single task through which every controller mutation flows. Position
//! updates, manual toggles, and countdown ticks are handled strictly in
//! arrival order, so the interval controller needs no locking.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::time::{interval_at, Duration, Instant, Interval};
use tracing::{debug, error, info};

use crate::clock::{Clock, SystemClock};
use crate::controller::IntervalController;
use crate::events::ScreeningEvent;
use crate::state::AppState;
use crate::surface::{PlaybackSurface, PlayerHandle, PresentationShell, ShellHandle};

/// Background task that owns the interval controller for one screening
pub async fn screening_task(
    state: Arc<AppState>,
    mut events: mpsc::UnboundedReceiver<ScreeningEvent>,
) {
    info!("Starting screening loop");

    let mut player = PlayerHandle::new(Arc::clone(&state));
    let mut shell = ShellHandle::new(Arc::clone(&state));
    let mut controller = IntervalController::new(
        state.threshold_seconds,
        state.duration_seconds,
        PlayerHandle::new(Arc::clone(&state)),
        ShellHandle::new(Arc::clone(&state)),
        SystemClock,
    );

    // The 1-second countdown ticker exists exactly while a countdown is armed
    let mut ticker: Option<Interval> = None;

    loop {
        tokio::select! {
            maybe_event = events.recv() => {
                let Some(event) = maybe_event else {
                    info!("Event channel closed, stopping screening loop");
                    break;
                };
                handle_event(event, &state, &mut controller, &mut player, &mut shell);
            }
            _ = countdown_tick(&mut ticker) => {
                controller.on_countdown_tick();
            }
        }

        // Reconcile the ticker with the controller: arm a single ticker when
        // a countdown starts, drop it as soon as the countdown clears
        if controller.countdown_active() {
            if ticker.is_none() {
                let period = Duration::from_secs(1);
                ticker = Some(interval_at(Instant::now() + period, period));
            }
        } else {
            ticker = None;
        }

        if controller.interval_started() {
            if let Err(e) = state.mark_interval_fired() {
                error!("Failed to record intermission latch: {}", e);
            }
        }
    }
}

/// Wait for the next countdown tick, or forever when none is armed
async fn countdown_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(interval) => {
            interval.tick().await;
        }
        None => futures::future::pending::<()>().await,
    }
}

fn handle_event<P, S, C>(
    event: ScreeningEvent,
    state: &AppState,
    controller: &mut IntervalController<P, S, C>,
    player: &mut PlayerHandle,
    shell: &mut ShellHandle,
) where
    P: PlaybackSurface,
    S: PresentationShell,
    C: Clock,
{
    match event {
        ScreeningEvent::StartScreening => {
            info!("Screening started");
            shell.show_player_screen();
            player.play();
        }
        ScreeningEvent::PositionUpdate(position_seconds) => {
            controller.on_position_update(position_seconds);
        }
        ScreeningEvent::PlaybackFinished => {
            info!("Screening complete, returning to the intro screen");
            shell.show_intro_screen();
        }
        ScreeningEvent::IntervalToggle => {
            controller.toggle_interval();
        }
        ScreeningEvent::PlaybackToggle => {
            if shell.is_overlay_visible() {
                // Play/pause is ignored while the intermission overlay is up
                debug!("Ignoring play/pause toggle during the intermission");
            } else if player.is_paused() {
                player.play();
            } else {
                player.pause();
            }
        }
        ScreeningEvent::FullscreenToggle => {
            // Fullscreen failures are logged and the screening continues
            if let Err(e) = state.toggle_fullscreen() {
                error!("Fullscreen toggle failed: {}", e);
            }
        }
    }
}
