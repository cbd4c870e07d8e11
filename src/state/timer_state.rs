//! Countdown state and the pure decrement/render logic

use serde::{Deserialize, Serialize};

/// Default Pomodoro length: 25 minutes
pub const DEFAULT_DURATION_SECONDS: u64 = 25 * 60;

/// Whether the countdown is ticking or frozen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunState {
    Paused,
    Running,
}

impl RunState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunState::Paused => "paused",
            RunState::Running => "running",
        }
    }
}

/// The two display slots, each zero-padded to two digits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Readout {
    pub minutes: String,
    pub seconds: String,
}

impl Readout {
    pub fn from_seconds(total: u64) -> Self {
        Self {
            minutes: format!("{:02}", total / 60),
            seconds: format!("{:02}", total % 60),
        }
    }
}

impl std::fmt::Display for Readout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.minutes, self.seconds)
    }
}

/// Result of one decrement step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// One second was taken off; the countdown continues
    Decremented,
    /// The countdown is exhausted and must complete
    Exhausted,
}

/// Remaining duration plus run state for one timer instance
#[derive(Debug, Clone)]
pub struct TimerState {
    pub remaining_seconds: u64,
    pub configured_seconds: u64,
    pub run_state: RunState,
}

impl TimerState {
    /// Create a paused timer holding the full configured duration
    pub fn new(configured_seconds: u64) -> Self {
        Self {
            remaining_seconds: configured_seconds,
            configured_seconds,
            run_state: RunState::Paused,
        }
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    /// Take one second off the countdown.
    ///
    /// Zero is checked before decrementing, so the value never goes below
    /// zero. Reaching zero through this call also reports exhaustion.
    pub fn step(&mut self) -> Step {
        if self.remaining_seconds == 0 {
            return Step::Exhausted;
        }
        self.remaining_seconds -= 1;
        if self.remaining_seconds == 0 {
            Step::Exhausted
        } else {
            Step::Decremented
        }
    }

    /// Freeze and restore the configured duration
    pub fn reset(&mut self) {
        self.run_state = RunState::Paused;
        self.remaining_seconds = self.configured_seconds;
    }

    pub fn readout(&self) -> Readout {
        Readout::from_seconds(self.remaining_seconds)
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_SECONDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_reads_twenty_five_minutes() {
        let state = TimerState::default();
        assert_eq!(state.readout().to_string(), "25:00");
        assert_eq!(state.run_state, RunState::Paused);
    }

    #[test]
    fn readout_is_zero_padded() {
        assert_eq!(Readout::from_seconds(65).to_string(), "01:05");
        assert_eq!(Readout::from_seconds(5).to_string(), "00:05");
        assert_eq!(Readout::from_seconds(0).to_string(), "00:00");

        let readout = Readout::from_seconds(605);
        assert_eq!(readout.minutes, "10");
        assert_eq!(readout.seconds, "05");
    }

    #[test]
    fn step_decrements_by_one() {
        let mut state = TimerState::new(90);
        assert_eq!(state.step(), Step::Decremented);
        assert_eq!(state.remaining_seconds, 89);
        assert_eq!(state.readout().to_string(), "01:29");
    }

    #[test]
    fn step_reports_exhaustion_without_going_negative() {
        let mut state = TimerState::new(2);
        assert_eq!(state.step(), Step::Decremented);
        assert_eq!(state.step(), Step::Exhausted);
        assert_eq!(state.remaining_seconds, 0);

        // Already at zero: no further decrement
        assert_eq!(state.step(), Step::Exhausted);
        assert_eq!(state.remaining_seconds, 0);
    }

    #[test]
    fn reset_restores_configured_duration() {
        let mut state = TimerState::new(300);
        state.run_state = RunState::Running;
        state.remaining_seconds = 17;

        state.reset();
        assert_eq!(state.remaining_seconds, 300);
        assert!(!state.is_running());
    }
}
