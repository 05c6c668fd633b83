//! Resource service implementation.
//!
//! The ResourceService is the resource-style binding of the catalog: it lists
//! catalog entries as MCP resources and reads them by URI.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents, ResourceTemplate};
use std::sync::Arc;
use tracing::{info, warn};

use super::error::ResourceError;
use super::registry::{get_all_resource_templates, get_all_resources};
use crate::domains::catalog::{Catalog, MARKDOWN_MIME_TYPE, Resolution, SCHEME_SEPARATOR};

/// Service for listing and reading catalog resources.
pub struct ResourceService {
    catalog: Arc<Catalog>,

    /// Resource templates, one per namespace.
    templates: Vec<ResourceTemplate>,
}

impl ResourceService {
    /// Create a new ResourceService over the given catalog.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        info!("Initializing ResourceService");

        let templates = get_all_resource_templates(&catalog);
        Self { catalog, templates }
    }

    /// List all available resources, in catalog order.
    pub async fn list_resources(&self) -> Vec<Resource> {
        get_all_resources(&self.catalog)
    }

    /// List all available resource templates.
    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.templates.clone()
    }

    /// Read a resource by URI.
    ///
    /// An unknown topic in a known namespace is a successful read of the
    /// namespace's placeholder text. An unknown namespace is an error.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let text = match self.catalog.resolve(uri) {
            Resolution::Content(entry) => entry.body.clone(),
            Resolution::Placeholder { namespace, message } => {
                warn!("Unknown topic requested in namespace {}: {}", namespace, uri);
                message.to_string()
            }
            Resolution::UnknownNamespace if !uri.contains(SCHEME_SEPARATOR) => {
                return Err(ResourceError::invalid_uri(uri));
            }
            Resolution::UnknownNamespace => return Err(ResourceError::not_found(uri)),
        };

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::TextResourceContents {
                uri: uri.to_string(),
                mime_type: Some(MARKDOWN_MIME_TYPE.to_string()),
                text,
                meta: None,
            }],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SwaggerUrls;
    use crate::domains::catalog::{NOT_FOUND_MARKER, build_catalog};

    fn service() -> ResourceService {
        ResourceService::new(Arc::new(build_catalog(SwaggerUrls::default())))
    }

    fn text_of(result: &ReadResourceResult) -> &str {
        match &result.contents[0] {
            ResourceContents::TextResourceContents { text, .. } => text,
            _ => panic!("Expected text content"),
        }
    }

    #[tokio::test]
    async fn test_resource_service_creation() {
        let service = service();

        let resources = service.list_resources().await;
        assert_eq!(resources.len(), 15);

        let templates = service.list_resource_templates().await;
        assert_eq!(templates.len(), 5);
    }

    #[tokio::test]
    async fn test_read_existing_resource() {
        let service = service();

        let result = service.read_resource("primes://overview").await.unwrap();
        assert_eq!(result.contents.len(), 1);
        assert!(text_of(&result).contains("Primes"));

        match &result.contents[0] {
            ResourceContents::TextResourceContents { uri, mime_type, .. } => {
                assert_eq!(uri, "primes://overview");
                assert_eq!(mime_type.as_deref(), Some("text/markdown"));
            }
            _ => panic!("Expected text content"),
        }
    }

    #[tokio::test]
    async fn test_read_unknown_topic_returns_placeholder() {
        let service = service();

        let result = service.read_resource("primes://doesnotexist").await.unwrap();
        assert!(text_of(&result).contains(NOT_FOUND_MARKER));
    }

    #[tokio::test]
    async fn test_read_unknown_namespace() {
        let service = service();

        let err = service.read_resource("unknown://x").await.unwrap_err();
        assert!(matches!(err, ResourceError::NotFound(_)));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_read_malformed_uri() {
        let service = service();

        let err = tokio_test::block_on(service.read_resource("primes")).unwrap_err();
        assert!(matches!(err, ResourceError::InvalidUri(_)));
        assert!(err.is_not_found());
    }
}
