//! Tokenscope API Server
//!
//! Run with: cargo run --bin tokenscope
//!
//! # Configuration
//!
//! Read from `config.toml` in the usual locations (see `tokenscope-cli
//! config`), then overridden by environment variables:
//! - `TOKENSCOPE_HOST`: Host to bind to (default: 0.0.0.0)
//! - `TOKENSCOPE_PORT`: Port to listen on (default: 8083)
//! - `TOKENSCOPE_UPSTREAM_URL`: Research service endpoint
//! - `TOKENSCOPE_UPSTREAM_TIMEOUT_MS`: Upstream timeout (default: 30000)
//! - `TOKENSCOPE_STATIC_DIR`: Built dashboard to serve at `/`
//! - `RUST_LOG`: Log filter (default: tokenscope=info,tower_http=debug)

use std::sync::Arc;
use tokenscope::api::{serve, AppState};
use tokenscope::config::Config;
use tokenscope::upstream::UpstreamClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let loaded = Config::load_default();
    tokenscope::logging::init(&loaded.config.logging);
    loaded.log();
    let config = loaded.config;

    tracing::info!("Starting Tokenscope API server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Research service: {}", config.upstream.url);
    tracing::info!(
        "Upstream status propagation: {}",
        if config.upstream.propagate_status { "on" } else { "off" }
    );

    let upstream = Arc::new(UpstreamClient::new(config.upstream.clone())?);
    let state = AppState::new(upstream, config.api.clone());

    tracing::info!("Starting server on {}", config.api.addr());
    serve(state, &config.api).await?;

    tracing::info!("Tokenscope API server stopped");
    Ok(())
}
