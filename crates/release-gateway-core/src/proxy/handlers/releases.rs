//! Release metadata forwarder.

use axum::{
    extract::{rejection::PathRejection, Path, Request, State},
    response::Response,
};
use release_gateway_types::RouteParams;

use super::{bind_params, ApiError};
use crate::proxy::forward::Director;
use crate::proxy::server::GatewayState;

/// `GET /{owner}/{repo}/releases[/...]`
///
/// Forwards the whole request (method, headers, body, path, query) to the
/// upstream API host and streams the answer back unchanged.
pub async fn handle_release_query(
    State(state): State<GatewayState>,
    params: Result<Path<RouteParams>, PathRejection>,
    request: Request,
) -> Result<Response, ApiError> {
    let repo = bind_params(params)?.repo()?;
    tracing::debug!("Release query for {}/{}: {}", repo.owner, repo.repo, request.uri());

    let director = Director::SingleHost(state.upstream.api_base().clone());
    let response = state.upstream.proxy().forward(request, &director).await?;
    Ok(response)
}
