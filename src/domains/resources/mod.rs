//! Resources domain module.
//!
//! This module is the resource-style binding of the documentation catalog.
//! Every catalog entry is exposed as an MCP resource at its
//! `namespace://topic` URI, with `text/markdown` content.
//!
//! ## Architecture
//!
//! - `registry.rs` - Resource and template metadata built from the catalog
//! - `service.rs` - Resource service for listing and reading
//!
//! Content lives in `domains/catalog`; adding a catalog topic adds a
//! resource without touching this module.

mod error;
mod registry;
mod service;

pub use error::ResourceError;
pub use registry::{get_all_resource_templates, get_all_resources};
pub use service::ResourceService;
