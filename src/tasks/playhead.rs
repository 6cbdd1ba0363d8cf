//! Playhead background task
//!
//! Stands in for a real player's position notifications: while the kiosk is
//! playing, the playhead advances with real elapsed time and reports the
//! position into the screening loop on a regular cadence.

use std::sync::Arc;
use std::time::Instant;

use tokio::time::{interval, Duration};
use tracing::{debug, error, info};

use crate::events::ScreeningEvent;
use crate::state::AppState;

const POSITION_CADENCE: Duration = Duration::from_millis(250);

/// Background task that advances the playback position while playing
pub async fn playhead_task(state: Arc<AppState>) {
    info!("Starting playhead task");

    let mut ticker = interval(POSITION_CADENCE);
    let mut last_tick = Instant::now();

    loop {
        ticker.tick().await;

        // Advance from measured elapsed time, not the nominal cadence, so a
        // delayed tick does not slow the playhead down
        let now = Instant::now();
        let dt_seconds = now.duration_since(last_tick).as_secs_f64();
        last_tick = now;

        let advanced = match state.screening.lock() {
            Ok(mut screening) => screening
                .advance_playhead(dt_seconds)
                .map(|position| (position, screening.at_end())),
            Err(e) => {
                error!("Failed to lock screening state: {}", e);
                None
            }
        };

        let Some((position, finished)) = advanced else {
            continue;
        };

        if let Err(e) = state.dispatch(ScreeningEvent::PositionUpdate(position)) {
            debug!("Dropping position update: {}", e);
        }

        if finished {
            info!("Playback reached the end of the media");
            if let Err(e) = state.dispatch(ScreeningEvent::PlaybackFinished) {
                debug!("Dropping playback finish notification: {}", e);
            }
        }
    }
}
