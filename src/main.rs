//! Dotboard - A state-managed service that mirrors IoT telemetry widgets
//!
//! This is the main entry point for the dotboard application.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use dotboard::{
    api::create_router,
    client::UbidotsClient,
    config::Config,
    state::AppState,
    tasks::{device_timer_task, position_poller_task, tick_task},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("dotboard={},tower_http=info", config.log_level()))
        .init();

    info!("Starting dotboard v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration: host={}, port={}, api_base={}, poll={}ms, stale_threshold={}ms",
        config.host, config.port, config.api_base,
        config.poll_interval_ms, config.stale_threshold_ms
    );

    // Create application state and the telemetry client
    let state = Arc::new(AppState::new(
        config.port,
        config.host.clone(),
        config.position_variable.is_some(),
    ));
    let client = UbidotsClient::new(config.api_base.clone(), config.token.clone());

    // Start the timer widget's poll loop
    let poll_state = Arc::clone(&state);
    let poll_client = client.clone();
    let timer_variable = config.timer_variable.clone();
    let poll_interval_ms = config.poll_interval_ms;
    let stale_threshold_ms = config.stale_threshold_ms;
    tokio::spawn(async move {
        device_timer_task(
            poll_state,
            poll_client,
            timer_variable,
            poll_interval_ms,
            stale_threshold_ms,
        )
        .await;
    });

    // Start the one-second tick of the elapsed counter
    let tick_state = Arc::clone(&state);
    tokio::spawn(async move {
        tick_task(tick_state).await;
    });

    // Start the position widget's poll loop when a variable is configured
    if let Some(position_variable) = config.position_variable.clone() {
        let position_state = Arc::clone(&state);
        let position_client = client.clone();
        let position_interval_ms = config.position_poll_interval_ms;
        tokio::spawn(async move {
            position_poller_task(
                position_state,
                position_client,
                position_variable,
                position_interval_ms,
            )
            .await;
        });
    } else {
        info!("No position variable configured, position widget disabled");
    }

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET  /status - Current widget surfaces and timer state");
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

    info!("Server shutdown complete");
    Ok(())
}
