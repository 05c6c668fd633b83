//! Tool definitions.
//!
//! Each tool lives in its own file with its params, `execute()`, `to_tool()`,
//! `create_route()` and, for HTTP, `http_handler()`.

pub mod catalog_entry;
pub mod common;
pub mod ping;
pub mod swagger_urls;
pub mod topic;

pub use catalog_entry::{GetCatalogEntryParams, GetCatalogEntryTool};
pub use common::NoParams;
pub use ping::PingTool;
pub use swagger_urls::SwaggerUrlsTool;
pub use topic::TopicTool;
