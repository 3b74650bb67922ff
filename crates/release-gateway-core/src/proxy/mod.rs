//! Proxy module - release API and asset reverse proxy
//!
//! - `/{owner}/{repo}/releases[/...]` is forwarded to the upstream API host
//! - `/{owner}/{repo}/download/tags/{tag}/{name}` is resolved through a HEAD
//!   probe and the asset is streamed from wherever the redirect points

pub mod common;
pub mod forward;
pub mod handlers;
pub mod server;
pub mod upstream;

pub use forward::{Director, ReverseProxy};
pub use server::{build_proxy_router, GatewayState, MAX_REQUEST_BODY};
pub use upstream::client::{ProbeOutcome, UpstreamClient};
