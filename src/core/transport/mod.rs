//! Transport layer for the MCP server.
//!
//! | feature | transport |
//! |---|---|
//! | `stdio` (default) | rmcp over stdin/stdout |
//! | `tcp` | rmcp over line-delimited JSON-RPC on a TCP socket, one session per connection |
//! | `http` | JSON-RPC over HTTP POST (axum), plus `/health` and `/` |
//!
//! The transport is picked at startup from `MCP_TRANSPORT`; every transport
//! serves the same `McpServer` and therefore the same catalog.

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "tcp")]
pub use config::TcpConfig;

#[cfg(feature = "http")]
pub use config::HttpConfig;
