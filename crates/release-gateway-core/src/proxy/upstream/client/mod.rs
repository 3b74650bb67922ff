#[cfg(test)]
mod tests;

use axum::http::{header, StatusCode};
use release_gateway_types::{AssetRef, GatewayError, UpstreamConfig};
use reqwest::Client;
use std::time::Duration;
use url::Url;

use crate::error::AppResult;
use crate::proxy::common::client_builder::build_http_client;
use crate::proxy::forward::ReverseProxy;

const PROBE_FAILED_MSG: &str = "Could not get download url";

/// Result of a HEAD probe against a tag download URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Upstream answered 302 with a usable `Location`.
    Resolved(Url),
    /// Upstream answered with anything other than 302.
    UnexpectedStatus(StatusCode),
    /// 302 without a `Location` header.
    MissingLocation,
    /// 302 whose `Location` could not be parsed.
    InvalidLocation(String),
    /// The HEAD request itself failed (DNS, connect, TLS, timeout).
    Transport(String),
}

impl ProbeOutcome {
    pub fn into_result(self) -> Result<Url, GatewayError> {
        match self {
            Self::Resolved(url) => Ok(url),
            Self::Transport(message) => Err(GatewayError::upstream_probe(message)),
            Self::UnexpectedStatus(_) | Self::MissingLocation | Self::InvalidLocation(_) => {
                Err(GatewayError::upstream_probe(PROBE_FAILED_MSG))
            },
        }
    }
}

/// Outbound side of the gateway: upstream endpoints plus the shared client.
///
/// Built once at startup and shared read-only by every handler.
pub struct UpstreamClient {
    http_client: Client,
    api_base: Url,
    download_base: Url,
    probe_timeout: Duration,
    proxy: ReverseProxy,
}

impl UpstreamClient {
    /// Create an UpstreamClient around a pre-built `reqwest::Client`.
    pub fn new(http_client: Client, config: &UpstreamConfig) -> AppResult<Self> {
        let api_base = config.api_base()?;
        let download_base = config.download_base()?;
        let proxy = ReverseProxy::new(
            http_client.clone(),
            Duration::from_secs(config.response_timeout_secs.max(1)),
        );

        Ok(Self {
            http_client,
            api_base,
            download_base,
            probe_timeout: Duration::from_secs(config.probe_timeout_secs.max(1)),
            proxy,
        })
    }

    /// Build the shared client from config and wrap it.
    pub fn from_config(config: &UpstreamConfig) -> AppResult<Self> {
        let http_client = build_http_client(config)?;
        Self::new(http_client, config)
    }

    pub fn api_base(&self) -> &Url {
        &self.api_base
    }

    pub fn download_base(&self) -> &Url {
        &self.download_base
    }

    pub fn proxy(&self) -> &ReverseProxy {
        &self.proxy
    }

    /// `{download_base}/{owner}/{repo}/releases/download/{tag}/{name}`
    pub fn download_url(&self, asset: &AssetRef) -> Result<Url, GatewayError> {
        let mut url = self.download_base.clone();
        url.path_segments_mut()
            .map_err(|()| {
                GatewayError::configuration(format!(
                    "'{}' cannot take path segments",
                    self.download_base
                ))
            })?
            .pop_if_empty()
            .extend([
                asset.repo.owner.as_str(),
                asset.repo.repo.as_str(),
                "releases",
                "download",
                asset.tag.as_str(),
                asset.name.as_str(),
            ]);
        Ok(url)
    }

    /// Issue a HEAD request without following redirects and classify the answer.
    pub async fn probe_download(&self, url: &Url) -> ProbeOutcome {
        let response = match self
            .http_client
            .head(url.clone())
            .timeout(self.probe_timeout)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                return ProbeOutcome::Transport(format!(
                    "HEAD {} timed out after {}s",
                    url,
                    self.probe_timeout.as_secs()
                ));
            },
            Err(e) => {
                return ProbeOutcome::Transport(format!("HEAD {} failed: {}", url, e.without_url()))
            },
        };

        if response.status() != StatusCode::FOUND {
            return ProbeOutcome::UnexpectedStatus(response.status());
        }

        let Some(location) = response.headers().get(header::LOCATION) else {
            return ProbeOutcome::MissingLocation;
        };

        match location.to_str().map_err(|e| e.to_string()).and_then(|raw| {
            // Relative redirects resolve against the probed URL.
            url.join(raw).map_err(|e| format!("'{}': {}", raw, e))
        }) {
            Ok(resolved) => ProbeOutcome::Resolved(resolved),
            Err(message) => ProbeOutcome::InvalidLocation(message),
        }
    }

    /// Resolve a tag download to the asset's real location.
    pub async fn resolve_download(&self, asset: &AssetRef) -> Result<Url, GatewayError> {
        let probe_url = self.download_url(asset)?;
        let outcome = self.probe_download(&probe_url).await;
        match &outcome {
            ProbeOutcome::Resolved(_) => {},
            ProbeOutcome::UnexpectedStatus(status) => {
                tracing::warn!("Probe of {} answered {} instead of 302", probe_url, status);
            },
            ProbeOutcome::MissingLocation => {
                tracing::warn!("Probe of {} answered 302 without Location", probe_url);
            },
            ProbeOutcome::InvalidLocation(message) => {
                tracing::warn!("Probe of {} returned unusable Location {}", probe_url, message);
            },
            ProbeOutcome::Transport(message) => {
                tracing::warn!("{}", message);
            },
        }
        outcome.into_result()
    }
}
