//! Catalog-specific error types.

use thiserror::Error;

/// Errors describing why an identifier could not be served from the catalog.
///
/// [`Catalog::resolve`](super::Catalog::resolve) itself never fails; these
/// values are produced by the protocol adapters when they turn a
/// [`Resolution`](super::Resolution) into a wire-level outcome.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The identifier's namespace prefix is not registered.
    #[error("Unknown namespace in identifier: {0}")]
    UnknownNamespace(String),

    /// An entry with the same identifier was already registered.
    #[error("Duplicate identifier: {0}")]
    DuplicateIdentifier(String),
}

impl CatalogError {
    /// Create a new "unknown namespace" error.
    pub fn unknown_namespace(identifier: impl Into<String>) -> Self {
        Self::UnknownNamespace(identifier.into())
    }

    /// Create a new "duplicate identifier" error.
    pub fn duplicate_identifier(identifier: impl Into<String>) -> Self {
        Self::DuplicateIdentifier(identifier.into())
    }
}
