//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::Screening;

/// API response structure for control endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub screening: Screening,
}

impl ApiResponse {
    /// Create a new API response
    pub fn new(status: String, message: String, screening: Screening) -> Self {
        Self {
            status,
            message,
            timestamp: Utc::now(),
            screening,
        }
    }

    /// Create a success response
    pub fn ok(message: String, screening: Screening) -> Self {
        Self::new("ok".to_string(), message, screening)
    }

    /// Create an error response
    pub fn error(message: String, screening: Screening) -> Self {
        Self::new("error".to_string(), message, screening)
    }
}

/// Status response with screening and countdown information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub screening: Screening,
    pub interval_threshold_seconds: u64,
    pub interval_duration_seconds: u64,
    pub countdown_active: bool,
    pub countdown_remaining_seconds: Option<u64>,
    pub countdown_display: Option<String>,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
