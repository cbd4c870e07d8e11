//! Values published to the rendering and notification surfaces

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Readout, RunState, TimerState};

/// Message carried by every completion event
pub const COMPLETION_MESSAGE: &str = "Pomodoro finished!";

/// What the display shows after a render
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub remaining_seconds: u64,
    pub configured_seconds: u64,
    pub run_state: RunState,
    pub readout: Readout,
    pub completed_sessions: u64,
}

impl TimerSnapshot {
    pub fn capture(state: &TimerState, completed_sessions: u64) -> Self {
        Self {
            remaining_seconds: state.remaining_seconds,
            configured_seconds: state.configured_seconds,
            run_state: state.run_state,
            readout: state.readout(),
            completed_sessions,
        }
    }

    /// `MM:SS` form of the readout
    pub fn display(&self) -> String {
        self.readout.to_string()
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }
}

/// Emitted once for every countdown that runs out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionEvent {
    pub message: String,
    /// 1-based count of completed sessions, including this one
    pub session: u64,
    pub finished_at: DateTime<Utc>,
}

impl CompletionEvent {
    pub fn new(session: u64) -> Self {
        Self {
            message: COMPLETION_MESSAGE.to_string(),
            session,
            finished_at: Utc::now(),
        }
    }
}
