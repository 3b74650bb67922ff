//! JSON error responses (`{"msg": "..."}`) for handler failures.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use release_gateway_types::GatewayError;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ErrorBody {
    msg: String,
}

/// Handler-boundary wrapper so `GatewayError` can be returned from axum handlers.
#[derive(Debug)]
pub struct ApiError(pub GatewayError);

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if self.0.is_client_error() {
            tracing::debug!("Responding {}: {}", status.as_u16(), self.0);
        } else {
            tracing::warn!("Responding {}: {}", status.as_u16(), self.0);
        }

        (status, Json(ErrorBody { msg: self.0.to_string() })).into_response()
    }
}
