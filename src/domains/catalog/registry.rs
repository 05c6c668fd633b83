//! Catalog Registry - central registration of all documentation namespaces.
//!
//! When adding a new namespace:
//! 1. Create the namespace file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `build_catalog()`

use super::definitions::{AipsDocs, CommonDocs, EsgDocs, PrimesDocs, ScmDocs};
use super::resolver::Catalog;
use crate::core::config::SwaggerUrls;

/// Build the catalog with every registered namespace.
///
/// Registration order here is the listing order.
pub fn build_catalog(swagger_urls: SwaggerUrls) -> Catalog {
    Catalog::builder(swagger_urls)
        .namespace::<PrimesDocs>()
        .namespace::<EsgDocs>()
        .namespace::<AipsDocs>()
        .namespace::<ScmDocs>()
        .namespace::<CommonDocs>()
        .build()
}
