//! services/web/src/bin/web.rs

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use web_lib::{
    adapters::FileStorageAdapter,
    config::Config,
    error::AppError,
    web::{router, state::AppState},
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Arc::new(Config::from_env()?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Restoring session...");

    // --- 2. Open Durable Storage & Restore the Session ---
    let storage = Arc::new(FileStorageAdapter::open(&config.storage_path)?);
    let app_state = Arc::new(AppState::new(config.clone(), storage)?);
    info!(
        authenticated = app_state.session().is_authenticated(),
        "Session restored from {}",
        config.storage_path.display()
    );

    // --- 3. Create the Router ---
    let app = router(app_state);

    // --- 4. Start the Server ---
    info!("Starting server on {}", config.bind_address);
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
