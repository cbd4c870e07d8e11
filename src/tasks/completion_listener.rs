//! Presents completion events to the user

use std::{io::Write, sync::Arc};
use tokio::sync::broadcast::error::RecvError;
use tracing::{info, warn};

use crate::state::TimerController;

/// Background task that announces every finished countdown.
///
/// Rings the terminal bell unless `quiet` is set.
pub async fn completion_listener_task(timer: Arc<TimerController>, quiet: bool) {
    info!("Starting completion listener task");

    let mut completions = timer.subscribe_completions();

    loop {
        match completions.recv().await {
            Ok(event) => {
                warn!("{} (session {})", event.message, event.session);

                if !quiet {
                    let mut stdout = std::io::stdout();
                    if let Err(e) = stdout.write_all(b"\x07").and_then(|_| stdout.flush()) {
                        warn!("Failed to ring terminal bell: {}", e);
                    }
                }
            }
            Err(RecvError::Lagged(skipped)) => {
                warn!("Completion listener lagged, {} events skipped", skipped);
            }
            Err(RecvError::Closed) => {
                info!("Completion channel closed, stopping listener");
                break;
            }
        }
    }
}
