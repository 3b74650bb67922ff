//! Gateway configuration.

use serde::{Deserialize, Serialize};
use url::Url;
use validator::Validate;

use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 80;
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com/repos";
pub const DEFAULT_DOWNLOAD_BASE_URL: &str = "https://github.com";

/// Full gateway configuration, assembled by the server binary at startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct GatewayConfig {
    /// Address to bind the listener to
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Port to listen on
    #[validate(range(min = 1_u16))]
    #[serde(default = "default_port")]
    pub port: u16,
    /// Outbound client and upstream endpoints
    #[serde(default)]
    #[validate(nested)]
    pub upstream: UpstreamConfig,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: DEFAULT_PORT,
            upstream: UpstreamConfig::default(),
        }
    }
}

impl GatewayConfig {
    /// Run field validation plus upstream URL checks.
    pub fn validate_all(&self) -> Result<(), ConfigError> {
        self.validate().map_err(|e| ConfigError::ValidationError {
            field: "config".to_string(),
            message: e.to_string(),
        })?;
        self.upstream.api_base()?;
        self.upstream.download_base()?;
        Ok(())
    }
}

/// Outbound client configuration shared by every handler.
///
/// Immutable once the gateway is built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct UpstreamConfig {
    /// Base URL that release metadata paths are appended to
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Host whose tag download URLs answer with a redirect to the asset
    #[serde(default = "default_download_base_url")]
    pub download_base_url: String,
    /// Accept invalid TLS certificates on outbound calls
    #[serde(default = "default_insecure_skip_verify")]
    pub insecure_skip_verify: bool,
    /// TCP + TLS connect budget in seconds
    #[validate(range(min = 1_u64, max = 300_u64))]
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    /// Whole HEAD probe budget in seconds
    #[validate(range(min = 1_u64, max = 600_u64))]
    #[serde(default = "default_probe_timeout")]
    pub probe_timeout_secs: u64,
    /// Budget until response headers of a proxied call arrive, in seconds
    #[validate(range(min = 1_u64, max = 3600_u64))]
    #[serde(default = "default_response_timeout")]
    pub response_timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            download_base_url: default_download_base_url(),
            insecure_skip_verify: default_insecure_skip_verify(),
            connect_timeout_secs: default_connect_timeout(),
            probe_timeout_secs: default_probe_timeout(),
            response_timeout_secs: default_response_timeout(),
        }
    }
}

impl UpstreamConfig {
    pub fn api_base(&self) -> Result<Url, ConfigError> {
        parse_base_url("api_base_url", &self.api_base_url)
    }

    pub fn download_base(&self) -> Result<Url, ConfigError> {
        parse_base_url("download_base_url", &self.download_base_url)
    }
}

fn parse_base_url(field: &str, raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim())
        .map_err(|e| ConfigError::InvalidUrl { field: field.to_string(), message: e.to_string() })?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(ConfigError::InvalidUrl {
            field: field.to_string(),
            message: format!("'{}' is not an absolute http(s) URL", raw),
        });
    }
    Ok(url)
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_download_base_url() -> String {
    DEFAULT_DOWNLOAD_BASE_URL.to_string()
}

const fn default_insecure_skip_verify() -> bool {
    true
}

const fn default_connect_timeout() -> u64 {
    10
}

const fn default_probe_timeout() -> u64 {
    30
}

const fn default_response_timeout() -> u64 {
    60
}
