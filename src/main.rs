use anyhow::Context;
use nexus::api::{self, app_state::AppState};
use nexus::config::loader::ConfigLoader;
use nexus::observability::{ObservabilityState, create_observability_router, init_tracing};
use nexus::services::ThreadRandom;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConfigLoader::load().context("failed to load configuration")?;
    ConfigLoader::validate(&config)?;

    let _log_guard = init_tracing(&config.logging)?;
    info!(
        "Starting {} ({} environment)...",
        config.app_name, config.environment
    );

    let app_state = AppState::from_config(&config, Arc::new(ThreadRandom));
    info!(
        "Session gateway initialized (xp_per_exchange={}, xp_per_level={})",
        config.chat.xp_per_exchange, config.chat.xp_per_level
    );

    let store = app_state.gateway.store().clone();
    let observability_state = ObservabilityState::new(
        env!("CARGO_PKG_VERSION").to_string(),
        app_state.metrics.clone(),
    )
    .with_session_count(move || store.len());

    let api_router = api::create_router(app_state, &config.cors);
    let router = create_observability_router(observability_state).merge(api_router);
    info!("API router created with observability endpoints");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("🚀 Server listening on {}", addr);
    info!("💬 WebSocket chat available at ws://{}/ws", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
