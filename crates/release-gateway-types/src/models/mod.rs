//! Domain models shared by the core crate and the server binary.

pub mod config;
mod route;

pub use config::{GatewayConfig, UpstreamConfig};
pub use route::{AssetRef, RepoRef, RouteParams};
