//! Tool Router - builds the rmcp ToolRouter from the catalog.
//!
//! Fixed tools are added one by one; the named topic tools come from the
//! catalog itself, so a new entry gets a tool without touching this file.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::domains::catalog::Catalog;

use super::definitions::{GetCatalogEntryTool, PingTool, SwaggerUrlsTool, TopicTool};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(catalog: Arc<Catalog>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    let router = ToolRouter::new()
        .with_route(PingTool::create_route())
        .with_route(GetCatalogEntryTool::create_route(catalog.clone()))
        .with_route(SwaggerUrlsTool::create_route(catalog.clone()));

    TopicTool::create_routes(catalog)
        .into_iter()
        .fold(router, |router, route| router.with_route(route))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;
    use crate::core::config::SwaggerUrls;
    use crate::domains::catalog::build_catalog;

    struct TestServer {}

    fn test_catalog() -> Arc<Catalog> {
        Arc::new(build_catalog(SwaggerUrls::default()))
    }

    #[test]
    fn test_build_router() {
        let catalog = test_catalog();
        let router: ToolRouter<TestServer> = build_tool_router(catalog.clone());
        let tools = router.list_all();
        assert_eq!(tools.len(), catalog.len() + 3);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"ping"));
        assert!(names.contains(&"get_catalog_entry"));
        assert!(names.contains(&"get_swagger_urls"));
        assert!(names.contains(&"get_primes_overview"));
        assert!(names.contains(&"get_aips_ai_features"));
        assert!(names.contains(&"get_common_packages"));
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router have the same tools
        let catalog = test_catalog();
        let registry = ToolRegistry::new(catalog.clone());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(catalog);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
