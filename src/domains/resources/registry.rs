//! Resource Registry - builds MCP resource metadata from the catalog.
//!
//! Resources are not registered here one by one: every catalog entry is a
//! resource, and every catalog namespace gets a `{topic}` template.

use rmcp::model::{AnnotateAble, RawResource, RawResourceTemplate, Resource, ResourceTemplate};

use crate::domains::catalog::{Catalog, EntrySummary, MARKDOWN_MIME_TYPE};

/// Build an annotated resource from a catalog listing item.
fn build_resource(summary: EntrySummary) -> Resource {
    let mut raw = RawResource::new(summary.identifier, summary.title);
    raw.description = Some(summary.description.to_string());
    raw.mime_type = Some(summary.mime_type.to_string());

    raw.no_annotation()
}

/// Get all resources, in the order of [`Catalog::list_entries`].
pub fn get_all_resources(catalog: &Catalog) -> Vec<Resource> {
    catalog
        .list_entries()
        .into_iter()
        .map(build_resource)
        .collect()
}

/// Get one resource template per catalog namespace.
pub fn get_all_resource_templates(catalog: &Catalog) -> Vec<ResourceTemplate> {
    catalog
        .namespaces()
        .into_iter()
        .map(|namespace| {
            RawResourceTemplate {
                uri_template: namespace.uri_template(),
                name: format!("{} documentation", namespace),
                title: Some(format!("{} topics", namespace)),
                description: Some(format!(
                    "Read {} documentation by topic",
                    namespace
                )),
                mime_type: Some(MARKDOWN_MIME_TYPE.to_string()),
            }
            .no_annotation()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SwaggerUrls;
    use crate::domains::catalog::build_catalog;

    fn catalog() -> Catalog {
        build_catalog(SwaggerUrls::default())
    }

    #[test]
    fn test_get_all_resources() {
        let resources = get_all_resources(&catalog());
        assert_eq!(resources.len(), 15);

        let uris: Vec<_> = resources.iter().map(|r| r.raw.uri.as_str()).collect();
        assert_eq!(uris[0], "primes://overview");
        assert!(uris.contains(&"esg://swagger"));
        assert!(uris.contains(&"aips://ai-features"));

        let first = &resources[0].raw;
        assert_eq!(first.name, "Primes 프로젝트 개요");
        assert_eq!(first.mime_type.as_deref(), Some("text/markdown"));
    }

    #[test]
    fn test_resources_follow_listing() {
        let catalog = catalog();
        let resources = get_all_resources(&catalog);
        let listing = catalog.list_entries();
        assert_eq!(resources.len(), listing.len());

        for (resource, summary) in resources.iter().zip(&listing) {
            assert_eq!(resource.raw.uri, summary.identifier);
            assert_eq!(resource.raw.name, summary.title);
            assert_eq!(resource.raw.description.as_deref(), Some(summary.description));
        }
    }

    #[test]
    fn test_get_all_resource_templates() {
        let templates = get_all_resource_templates(&catalog());
        assert_eq!(templates.len(), 5);

        let uri_templates: Vec<_> = templates
            .iter()
            .map(|t| t.raw.uri_template.as_str())
            .collect();
        assert!(uri_templates.contains(&"primes://{topic}"));
        assert!(uri_templates.contains(&"common://{topic}"));
    }
}
