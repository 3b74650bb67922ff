//! Route handlers
//!
//! Every handler binds [`RouteParams`] from the path, validates them, and hands
//! the untouched request to the reverse proxy with a handler-specific director.

pub mod download;
pub mod error_response;
pub mod releases;

pub use download::handle_tag_download;
pub use error_response::ApiError;
pub use releases::handle_release_query;

use axum::extract::{rejection::PathRejection, Path};
use release_gateway_types::{GatewayError, RouteParams};

/// Unwrap bound path parameters, turning a binding failure into a 400.
fn bind_params(params: Result<Path<RouteParams>, PathRejection>) -> Result<RouteParams, GatewayError> {
    params.map(|Path(p)| p).map_err(|rejection| GatewayError::invalid_request(rejection.body_text()))
}
