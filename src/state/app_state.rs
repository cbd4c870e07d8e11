//! Shared application state handed to the HTTP handlers

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tracing::debug;

use super::TimerController;

/// Server-side state: the timer plus server metadata
#[derive(Debug)]
pub struct AppState {
    /// The timer widget driven by the control endpoints
    pub timer: Arc<TimerController>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
}

impl AppState {
    pub fn new(port: u16, host: String, timer: Arc<TimerController>) -> Self {
        Self {
            timer,
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
        }
    }

    /// Remember which control was used last
    pub fn record_action(&self, action: &str) {
        debug!("Recording action: {}", action);
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        format_uptime(self.start_time.elapsed().as_secs())
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}

fn format_uptime(total: u64) -> String {
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uptime_formatting() {
        assert_eq!(format_uptime(7), "7s");
        assert_eq!(format_uptime(125), "2m 5s");
        assert_eq!(format_uptime(3725), "1h 2m 5s");
    }

    #[test]
    fn records_last_action() {
        let state = AppState::new(0, "127.0.0.1".to_string(), Arc::new(TimerController::default()));
        assert_eq!(state.get_last_action(), (None, None));

        state.record_action("start");
        let (action, time) = state.get_last_action();
        assert_eq!(action.as_deref(), Some("start"));
        assert!(time.is_some());
    }
}
