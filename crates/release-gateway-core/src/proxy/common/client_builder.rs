use release_gateway_types::UpstreamConfig;
use std::time::Duration;

use crate::error::AppResult;

const USER_AGENT: &str = concat!("release-gateway/", env!("CARGO_PKG_VERSION"));

/// Build the outbound HTTP client shared by every handler.
///
/// Redirects are never followed: the download resolver needs to read the
/// `Location` of the upstream 302 itself. Only the connect budget lives on the
/// client; probe and response-header budgets are applied per call so asset
/// bodies can stream without a deadline.
pub fn build_http_client(config: &UpstreamConfig) -> AppResult<reqwest::Client> {
    if config.insecure_skip_verify {
        tracing::warn!("TLS certificate verification is disabled for upstream calls");
    }

    let client = reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs.max(1)))
        .redirect(reqwest::redirect::Policy::none())
        .danger_accept_invalid_certs(config.insecure_skip_verify)
        .user_agent(USER_AGENT)
        .tcp_nodelay(true)
        .build()?;

    Ok(client)
}
