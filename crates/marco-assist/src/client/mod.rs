//! Assist service HTTP client.
//!
//! Implements the `AssistGateway` trait over the service's JSON API
//! (`/api/v1/...`). All response classification into `GatewayError`
//! happens here, once, at the boundary.

mod api;
mod client;
mod config;

pub use client::AssistClient;
pub use config::GatewayConfig;
