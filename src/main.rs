//! Pomodoro Timer - a countdown timer with an HTTP control surface
//! 
//! This is the main entry point for the pomodoro-timer application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use pomodoro_timer::{
    config::Config,
    state::{AppState, TimerController},
    api::create_router,
    tasks::completion_listener_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("pomodoro_timer={},tower_http=info", config.log_level()))
        .init();

    info!("Starting pomodoro-timer server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, timer={}min",
          config.host, config.port, config.timer);

    let timer = Arc::new(TimerController::new(config.duration_seconds()));

    // Announce finished sessions
    let listener_timer = Arc::clone(&timer);
    let quiet = config.quiet;
    tokio::spawn(async move {
        completion_listener_task(listener_timer, quiet).await;
    });

    let state = Arc::new(AppState::new(config.port, config.host.clone(), Arc::clone(&timer)));
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /start  - Start the countdown");
    info!("  POST /pause  - Pause the countdown");
    info!("  POST /reset  - Pause and restore the full duration");
    info!("  GET  /status - Current display and timer state");
    info!("  GET  /health - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    if let Err(e) = timer.pause() {
        tracing::warn!("Failed to stop timer on shutdown: {}", e);
    }

    info!("Server shutdown complete");
    Ok(())
}
