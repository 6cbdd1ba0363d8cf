//! External collaborator checks
//!
//! This module contains startup checks against the world outside the
//! process, currently just the media source.

pub mod media;

// Re-export main functions
pub use media::check_media_available;
