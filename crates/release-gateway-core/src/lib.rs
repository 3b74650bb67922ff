//! # Release Gateway Core
//!
//! Request routing and redirect resolution for the release gateway.
//!
//! ```text
//! release-gateway-core/src/proxy/
//! ├── common/     # outbound client construction, trace ids
//! ├── forward/    # reverse-proxy primitive (directors, header rules)
//! ├── upstream/   # upstream endpoints + HEAD probe
//! ├── handlers/   # releases forwarder, tag download resolver
//! └── server.rs   # GatewayState + proxy router
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod error;
pub mod proxy;

pub use error::{AppError, AppResult};
