//! Signal handling for graceful shutdown

use signal_hook_tokio::Signals;
use futures::stream::StreamExt;
use tracing::{error, info};

/// Wait for SIGTERM or SIGINT and return the signal number.
///
/// If the handler cannot be installed this never resolves, leaving the
/// server to run until killed.
pub async fn shutdown_signal() -> i32 {
    let mut signals = match Signals::new([
        signal_hook::consts::SIGTERM,
        signal_hook::consts::SIGINT,
    ]) {
        Ok(signals) => signals,
        Err(e) => {
            error!("Failed to create signal handler: {}", e);
            return std::future::pending().await;
        }
    };

    match signals.next().await {
        Some(signal) => {
            info!("Received signal: {}", signal);
            signal
        }
        None => std::future::pending().await,
    }
}
