//! Catalog domain module.
//!
//! The content catalog maps `namespace://topic` identifiers to static
//! markdown documentation. It is built once at startup from the definitions
//! in `definitions/` and the configured Swagger URLs, and is read-only
//! afterwards. Both the resources and the tools domains serve from the same
//! [`Catalog`].
//!
//! ## Architecture
//!
//! - `identifier.rs` - Namespaces and identifier parsing
//! - `definitions/` - Static content, one file per namespace
//! - `render.rs` - `{{key}}` interpolation of configuration values
//! - `resolver.rs` - The two-level lookup table and its builder
//! - `registry.rs` - Central namespace registration

pub mod definitions;
mod entry;
mod error;
mod identifier;
mod registry;
mod render;
mod resolver;

pub use definitions::{NOT_FOUND_MARKER, NamespaceDefinition, TopicDefinition};
pub use entry::{Entry, EntrySummary, MARKDOWN_MIME_TYPE};
pub use error::CatalogError;
pub use identifier::{Identifier, Namespace, SCHEME_SEPARATOR};
pub use registry::build_catalog;
pub use render::render_body;
pub use resolver::{Catalog, CatalogBuilder, Resolution};
