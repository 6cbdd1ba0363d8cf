//! Intermission - a state-managed kiosk controller for screenings
//!
//! This is the main entry point for the intermission daemon.

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tracing::info;

use intermission::{
    api::create_router,
    config::Config,
    services::check_media_available,
    state::AppState,
    tasks::{keyboard_task, playhead_task, screening_task},
    utils::{format_remaining, format_time, shutdown_signal},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("intermission={},tower_http=info", config.log_level()))
        .init();

    info!("Starting intermission kiosk controller v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration: host={}, port={}, threshold={}s, duration={}s",
        config.host, config.port, config.threshold, config.duration
    );

    // Check the media source before presenting anything
    if let Err(e) = check_media_available(&config.media).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }

    // Channels: screening events in, keyboard quit out
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let (quit_tx, mut quit_rx) = mpsc::channel(1);

    // Create application state
    let state = Arc::new(AppState::new(&config, event_tx));

    info!("Media duration: {}", format_time(config.media_duration as f64));
    info!(
        "Intermission begins at {} and lasts {}",
        format_time(config.threshold as f64),
        format_remaining(config.duration)
    );

    if config.kiosk {
        // Fullscreen failure is not fatal, the screening continues windowed
        if let Err(e) = state.set_fullscreen(true) {
            tracing::warn!("Failed to lock fullscreen: {}", e);
        }
        info!("Kiosk mode: fullscreen locked, exit keys suppressed");
    }
    if config.manual_toggle {
        info!("Manual intermission toggle enabled (testing)");
    }

    // Start the background tasks
    let screening_state = Arc::clone(&state);
    tokio::spawn(async move {
        screening_task(screening_state, event_rx).await;
    });

    let playhead_state = Arc::clone(&state);
    tokio::spawn(async move {
        playhead_task(playhead_state).await;
    });

    let keyboard_state = Arc::clone(&state);
    tokio::spawn(async move {
        keyboard_task(keyboard_state, quit_tx).await;
    });

    // Create HTTP router with all endpoints
    let app = create_router(Arc::clone(&state));

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Control API running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /screening/start - Leave the intro screen and start playback");
    info!("  POST /playback/toggle - Toggle play/pause");
    info!("  POST /interval/toggle - Toggle the intermission (manual mode)");
    info!("  GET  /status          - Screening and countdown status");
    info!("  GET  /health          - Health check");
    info!("Keyboard: s = start, p = play/pause, i = intermission toggle, f = fullscreen, q = quit");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Control API error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
        _ = quit_rx.recv() => {
            info!("Quit requested, shutting down");
        }
    }

    info!("Kiosk controller shutdown complete");
    Ok(())
}
