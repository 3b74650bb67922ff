use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use tower_http::trace::TraceLayer;

use release_gateway_core::proxy::{build_proxy_router, GatewayState};

pub fn build_router(state: GatewayState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
        .route("/version", get(version_info))
        .with_state(state.clone());

    public_routes.merge(build_proxy_router(state)).layer(TraceLayer::new_for_http())
}

/// Liveness plus the upstream hosts this instance fronts. No upstream is contacted.
async fn health_check(State(state): State<GatewayState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "ok",
            "release_api": state.upstream.api_base().as_str(),
            "download_redirector": state.upstream.download_base().as_str(),
        })),
    )
}

async fn version_info() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "service": "release-gateway",
            "version": option_env!("GIT_VERSION").unwrap_or("dev"),
            "build_time": option_env!("BUILD_TIME").unwrap_or("unknown"),
            "cargo_version": env!("CARGO_PKG_VERSION"),
        })),
    )
}
