//! Background tasks module
//! 
//! This module contains the ticker that drives the countdown and the task
//! that announces finished sessions.

pub mod completion_listener;
pub mod ticker;

// Re-export main functions
pub use completion_listener::completion_listener_task;
pub use ticker::{spawn_ticker, TICK_PERIOD};
