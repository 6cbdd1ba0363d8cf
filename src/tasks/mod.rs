//! Background tasks module
//!
//! This module contains the background tasks that run alongside the control API.

pub mod keyboard;
pub mod playhead;
pub mod screening;

// Re-export main functions
pub use keyboard::keyboard_task;
pub use playhead::playhead_task;
pub use screening::screening_task;
