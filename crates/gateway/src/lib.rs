//! User Detail Gateway Library
//!
//! HTTP facade that merges an upstream user profile and repository list into
//! one flattened view, cached briefly per username.

pub mod cache;
pub mod clients;
pub mod config;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod services;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use crate::cache::UserCache;
use crate::clients::HttpUpstreamClient;
use crate::config::GatewayConfig;
use crate::routes::create_router;
use crate::services::UserDetailAggregator;
use crate::state::AppState;

/// Wire the upstream client, cache and service into application state.
pub fn build_state(config: GatewayConfig) -> Result<AppState, Box<dyn std::error::Error>> {
    let client = Arc::new(HttpUpstreamClient::new(&config.upstream)?);
    let cache = UserCache::new(&config.cache);
    let service = Arc::new(UserDetailAggregator::new(
        client,
        cache.clone(),
        config.upstream.repo_url_base.clone(),
    ));

    Ok(AppState::new(service, cache, config))
}

/// Run the HTTP server with the given configuration.
pub async fn run_server(config: GatewayConfig) -> Result<(), Box<dyn std::error::Error>> {
    info!("Upstream configuration: {:?}", config.upstream);

    let addr: SocketAddr = config.server_addr().parse()?;
    let state = build_state(config)?;

    // Build router
    let app = create_router(state);

    info!("Gateway listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
