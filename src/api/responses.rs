//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::TimerSnapshot;

/// API response structure for the control endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub display: String,
    pub timer: TimerSnapshot,
}

impl ApiResponse {
    /// Build a response whose status mirrors the timer's run state
    pub fn new(message: String, timer: TimerSnapshot) -> Self {
        Self {
            status: timer.run_state.as_str().to_string(),
            message,
            timestamp: Utc::now(),
            display: timer.display(),
            timer,
        }
    }
}

/// Status response with timer and server information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub display: String,
    pub timer: TimerSnapshot,
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
