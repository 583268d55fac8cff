use std::sync::Arc;

use fleetdrive::api;
use fleetdrive::config::Config;
use fleetdrive::engine::auto_trigger::AutoTrigger;
use fleetdrive::error::AppError;
use fleetdrive::seed::FixedSeed;
use fleetdrive::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_level.clone()))
        .with_target(false)
        .compact()
        .init();

    let shared_state = Arc::new(AppState::new(&FixedSeed, config.event_buffer_size));

    let app = api::rest::router(shared_state.clone());

    let auto_trigger = config.urgent_demo_auto.then(|| {
        tracing::info!(
            delay_secs = config.urgent_demo_delay.as_secs(),
            "urgent demo auto-trigger scheduled"
        );
        AutoTrigger::spawn(shared_state.clone(), config.urgent_demo_delay)
    });

    let bind_addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|err| AppError::Internal(format!("failed to bind {bind_addr}: {err}")))?;

    tracing::info!(http_port = config.http_port, "http server started");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|err| AppError::Internal(format!("server error: {err}")))?;

    if let Some(trigger) = &auto_trigger {
        trigger.cancel();
    }
    tracing::info!("http server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
