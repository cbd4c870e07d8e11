//! Pomodoro Timer - a countdown timer with an HTTP control surface
//! 
//! The core is [`TimerController`]: a 25 minute countdown with start, pause
//! and reset, ticking once per second. Renders are published on a watch
//! channel and finished countdowns on a broadcast channel.

pub mod config;
pub mod state;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::{AppState, CompletionEvent, TimerController, TimerSnapshot};
pub use api::create_router;
pub use utils::signals::shutdown_signal;
