//! # Release Gateway Types
//!
//! Config models, route parameters and error definitions for Release Gateway.
//!
//! - **`error`** - Typed errors for request handling and configuration
//! - **`models`** - Gateway configuration and per-request route parameters
//!
//! ## Architecture Role
//!
//! ```text
//!        release-gateway-types (this crate)
//!                    │
//!                    ▼
//!        release-gateway-core
//!                    │
//!                    ▼
//!        release-gateway-server
//! ```

pub mod error;
pub mod models;

pub use error::{ConfigError, GatewayError};
pub use models::{AssetRef, GatewayConfig, RepoRef, RouteParams, UpstreamConfig};
