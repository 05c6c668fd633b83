//! Project documentation MCP server.
//!
//! Serves a fixed catalog of markdown documents about the Primes, ESG, AIPS
//! and SCM projects over the Model Context Protocol. Each document is
//! addressed by a `namespace://topic` identifier and is reachable both as a
//! resource and as a tool.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server handler and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **catalog**: the immutable catalog and identifier resolution
//!   - **resources**: MCP resources over the catalog
//!   - **tools**: MCP tools over the catalog
//!
//! # Example
//!
//! ```rust,no_run
//! use project_info_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     assert!(server.catalog().resolve("primes://overview").body().is_some());
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
pub use domains::catalog::{Catalog, Resolution, build_catalog};
