//! State management module
//! 
//! This module contains the countdown state, the timer controller that owns
//! it, and the server state shared with the HTTP handlers.

pub mod app_state;
pub mod controller;
pub mod events;
pub mod timer_state;

// Re-export main types
pub use app_state::AppState;
pub use controller::{TickOutcome, TimerController};
pub use events::{CompletionEvent, TimerSnapshot, COMPLETION_MESSAGE};
pub use timer_state::{Readout, RunState, Step, TimerState, DEFAULT_DURATION_SECONDS};
