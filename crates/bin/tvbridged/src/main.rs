//! # tvbridged — tvbridge daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env var overrides) including the
//!   device catalog
//! - Initialise tracing
//! - Construct the reqwest transport and the JSON file cache (adapters)
//! - Run one reconciliation pass over the configured catalog
//! - Build the axum router and serve until ctrl-c
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use tracing_subscriber::EnvFilter;

use tvbridge_adapter_cache_json::JsonFileCache;
use tvbridge_adapter_http_axum::state::AppState;
use tvbridge_adapter_transport_reqwest::ReqwestTransport;
use tvbridge_app::services::platform::PlatformService;

use config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let transport = ReqwestTransport::new(&config.transport)?;
    let cache = JsonFileCache::new(&config.cache.path);

    let mut platform = PlatformService::new(transport, cache);
    let summary = platform.reload(&config.devices).await?;
    tracing::info!(
        added = summary.added,
        updated = summary.updated,
        removed = summary.removed,
        skipped = summary.skipped,
        "startup reconciliation complete"
    );

    let app = tvbridge_adapter_http_axum::router::build(AppState::new(platform));

    let bind_addr = config.bind_addr();
    tracing::info!(%bind_addr, "tvbridged listening");
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
