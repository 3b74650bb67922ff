use axum::{extract::DefaultBodyLimit, routing::get, Router};
use release_gateway_types::UpstreamConfig;
use std::sync::Arc;

use crate::error::AppResult;
use crate::proxy::handlers;
use crate::proxy::upstream::client::UpstreamClient;

/// Upper bound on buffered inbound request bodies.
pub const MAX_REQUEST_BODY: usize = 100 * 1024 * 1024;

/// Axum state shared by the proxy handlers. Immutable after construction.
#[derive(Clone)]
pub struct GatewayState {
    pub upstream: Arc<UpstreamClient>,
}

impl GatewayState {
    pub fn new(upstream: UpstreamClient) -> Self {
        Self { upstream: Arc::new(upstream) }
    }

    pub fn from_config(config: &UpstreamConfig) -> AppResult<Self> {
        Ok(Self::new(UpstreamClient::from_config(config)?))
    }
}

/// Build the proxy router (releases forwarder + tag download resolver).
pub fn build_proxy_router(state: GatewayState) -> Router<()> {
    Router::new()
        .route("/:owner/:repo/releases", get(handlers::handle_release_query))
        // `*rest` never matches an empty remainder
        .route("/:owner/:repo/releases/", get(handlers::handle_release_query))
        .route("/:owner/:repo/releases/*rest", get(handlers::handle_release_query))
        .route("/:owner/:repo/download/tags/:tag/:name", get(handlers::handle_tag_download))
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY))
        .with_state(state)
}
