//! Intermission - a state-managed kiosk controller for screenings
//!
//! The daemon presents an intro screen, plays a feature, and pauses it once
//! at a scheduled position for a countdown intermission before resuming.

pub mod api;
pub mod clock;
pub mod config;
pub mod controller;
pub mod events;
pub mod services;
pub mod state;
pub mod surface;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use api::create_router;
pub use config::Config;
pub use controller::IntervalController;
pub use state::AppState;
pub use utils::shutdown_signal;
