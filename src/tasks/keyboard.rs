//! Keyboard control task
//!
//! Line-based control keys on stdin, the kiosk's test and operator surface.
//! Kiosk mode suppresses the keys that would let an audience member leave
//! the presentation.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::events::ScreeningEvent;
use crate::state::AppState;

/// Background task translating stdin keys into screening events
pub async fn keyboard_task(state: Arc<AppState>, quit_tx: mpsc::Sender<()>) {
    info!("Starting keyboard control task");

    let stdin = tokio::io::stdin();
    let mut lines = BufReader::new(stdin).lines();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => {
                debug!("stdin closed, keyboard controls disabled");
                break;
            }
            Err(e) => {
                warn!("Failed to read keyboard input: {}", e);
                break;
            }
        };

        match line.trim() {
            "s" => dispatch(&state, ScreeningEvent::StartScreening),
            "p" => dispatch(&state, ScreeningEvent::PlaybackToggle),
            "i" => {
                if state.manual_toggle {
                    dispatch(&state, ScreeningEvent::IntervalToggle);
                } else {
                    debug!("Manual intermission toggle is disabled");
                }
            }
            "f" => {
                if state.kiosk {
                    warn!("Fullscreen toggle suppressed in kiosk mode");
                } else {
                    dispatch(&state, ScreeningEvent::FullscreenToggle);
                }
            }
            "q" => {
                if state.kiosk {
                    warn!("Quit key suppressed in kiosk mode");
                } else {
                    info!("Quit requested from keyboard");
                    let _ = quit_tx.send(()).await;
                    break;
                }
            }
            "" => {}
            other => debug!("Ignoring unknown control key: {:?}", other),
        }
    }
}

fn dispatch(state: &AppState, event: ScreeningEvent) {
    if let Err(e) = state.dispatch(event) {
        error!("Failed to dispatch {:?}: {}", event, e);
    }
}
