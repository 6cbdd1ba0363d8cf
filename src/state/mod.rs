//! State management module
//!
//! This module contains all state-related structures and their management logic.

pub mod app_state;
pub mod countdown;
pub mod screening;

// Re-export main types
pub use app_state::AppState;
pub use countdown::CountdownState;
pub use screening::{Screen, Screening};
