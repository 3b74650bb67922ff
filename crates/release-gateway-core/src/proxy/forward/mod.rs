//! Generic reverse-proxy primitive.
//!
//! A [`ReverseProxy`] sends one inbound request to the URL chosen by a
//! [`Director`] and streams the upstream response back. Failures before the
//! upstream response headers arrive become [`GatewayError::ProxyStream`];
//! failures after that point can only abort the body and are logged.

mod director;
pub mod headers;

pub use director::Director;

use axum::{
    body::Body,
    extract::{ConnectInfo, Request},
    response::Response,
};
use futures::TryStreamExt;
use release_gateway_types::GatewayError;
use reqwest::Client;
use std::net::SocketAddr;
use std::time::Duration;
use url::Url;

use crate::proxy::server::MAX_REQUEST_BODY;

#[derive(Debug, Clone)]
pub struct ReverseProxy {
    http_client: Client,
    response_timeout: Duration,
}

impl ReverseProxy {
    pub fn new(http_client: Client, response_timeout: Duration) -> Self {
        Self { http_client, response_timeout }
    }

    /// Forward `request` to the target chosen by `director`.
    pub async fn forward(
        &self,
        request: Request,
        director: &Director,
    ) -> Result<Response, GatewayError> {
        let (parts, body) = request.into_parts();
        let target = director.target_for(&parts.uri);
        let client_ip = parts.extensions.get::<ConnectInfo<SocketAddr>>().map(|info| info.0.ip());
        let outbound_headers = headers::outbound_request_headers(&parts.headers, client_ip);

        let body = axum::body::to_bytes(body, MAX_REQUEST_BODY)
            .await
            .map_err(|e| GatewayError::invalid_request(format!("Failed to read request body: {}", e)))?;

        let mut builder = self
            .http_client
            .request(parts.method.clone(), target.clone())
            .headers(outbound_headers);
        if !body.is_empty() {
            builder = builder.body(body);
        }

        let label = target_label(&target);
        tracing::debug!("Forwarding {} {}", parts.method, label);

        let response = match tokio::time::timeout(self.response_timeout, builder.send()).await {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => {
                // reqwest errors embed the full target, query included
                let e = e.without_url();
                tracing::warn!("Upstream {} unreachable: {}", label, e);
                return Err(GatewayError::proxy_stream(format!("{}: {}", label, e)));
            },
            Err(_) => {
                tracing::warn!(
                    "Upstream {} sent no response within {}s",
                    label,
                    self.response_timeout.as_secs()
                );
                return Err(GatewayError::proxy_stream(format!(
                    "{}: no response within {}s",
                    label,
                    self.response_timeout.as_secs()
                )));
            },
        };

        tracing::debug!("Upstream {} answered {}", label, response.status());
        Ok(into_streaming_response(response, label))
    }
}

/// `host/path` of a target, without the query (signed CDN URLs carry tokens).
fn target_label(target: &Url) -> String {
    format!("{}{}", target.host_str().unwrap_or("<no-host>"), target.path())
}

fn into_streaming_response(upstream: reqwest::Response, label: String) -> Response {
    let status = upstream.status();
    let response_headers = headers::inbound_response_headers(upstream.headers());

    let stream = upstream.bytes_stream().inspect_err(move |e| {
        let cause = std::error::Error::source(e)
            .map(ToString::to_string)
            .unwrap_or_else(|| "body read failed".to_string());
        tracing::warn!("Stream from {} interrupted: {}", label, cause);
    });

    let mut response = Response::new(Body::from_stream(stream));
    *response.status_mut() = status;
    *response.headers_mut() = response_headers;
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_label_hides_query() {
        let target = Url::parse("https://objects.githubusercontent.com/asset/1?X-Amz-Signature=secret").unwrap();
        assert_eq!(target_label(&target), "objects.githubusercontent.com/asset/1");
    }
}
