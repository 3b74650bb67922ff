//! Tag-based asset download resolver.

use axum::{
    extract::{rejection::PathRejection, Path, Request, State},
    response::Response,
};
use release_gateway_types::RouteParams;

use super::{bind_params, ApiError};
use crate::proxy::common::trace_id::TraceId;
use crate::proxy::forward::Director;
use crate::proxy::server::GatewayState;

/// `GET /{owner}/{repo}/download/tags/{tag}/{name}`
///
/// Probes the upstream "download by tag" URL with HEAD, then streams the asset
/// from the redirect target. The caller never sees the 302.
pub async fn handle_tag_download(
    State(state): State<GatewayState>,
    params: Result<Path<RouteParams>, PathRejection>,
    request: Request,
) -> Result<Response, ApiError> {
    let asset = bind_params(params)?.asset()?;
    let trace_id = TraceId::new();

    tracing::info!(
        "[{}] Resolving {}/{} tag {} asset {}",
        trace_id,
        asset.repo.owner,
        asset.repo.repo,
        asset.tag,
        asset.name
    );

    let location = state.upstream.resolve_download(&asset).await?;
    tracing::info!(
        "[{}] Streaming from {}{}",
        trace_id,
        location.host_str().unwrap_or_default(),
        location.path()
    );

    let response = state.upstream.proxy().forward(request, &Director::Rewrite(location)).await?;
    tracing::debug!("[{}] Upstream answered {}", trace_id, response.status());
    Ok(response)
}
