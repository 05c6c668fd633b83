//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - The names and metadata of every tool
//! - HTTP dispatch for tool calls (when http feature is enabled)

use std::sync::Arc;
#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

use crate::domains::catalog::Catalog;

use super::definitions::{GetCatalogEntryTool, PingTool, SwaggerUrlsTool, TopicTool};

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    catalog: Arc<Catalog>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        let mut names = vec![
            PingTool::NAME,
            GetCatalogEntryTool::NAME,
            SwaggerUrlsTool::NAME,
        ];
        names.extend(TopicTool::tool_names(&self.catalog));
        names
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools(&self) -> Vec<Tool> {
        let mut tools = vec![
            PingTool::to_tool(),
            GetCatalogEntryTool::to_tool(),
            SwaggerUrlsTool::to_tool(),
        ];
        tools.extend(TopicTool::to_tools(&self.catalog));
        tools
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    #[cfg(feature = "http")]
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        match name {
            PingTool::NAME => PingTool::http_handler(arguments),
            GetCatalogEntryTool::NAME => {
                GetCatalogEntryTool::http_handler(arguments, self.catalog.clone())
            }
            SwaggerUrlsTool::NAME => SwaggerUrlsTool::http_handler(arguments, self.catalog.clone()),
            _ if self.catalog.entry_by_tool_name(name).is_some() => {
                TopicTool::http_handler(name, self.catalog.clone())
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(super::ToolError::not_found(name).to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SwaggerUrls;
    use crate::domains::catalog::build_catalog;

    fn test_catalog() -> Arc<Catalog> {
        Arc::new(build_catalog(SwaggerUrls::default()))
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = ToolRegistry::new(test_catalog());
        let names = registry.tool_names();
        assert_eq!(names.len(), 18);
        assert!(names.contains(&"ping"));
        assert!(names.contains(&"get_catalog_entry"));
        assert!(names.contains(&"get_swagger_urls"));
        assert!(names.contains(&"get_esg_frameworks"));
        assert!(names.contains(&"get_scm_overview"));
    }

    #[test]
    fn test_registry_tools_match_names() {
        let registry = ToolRegistry::new(test_catalog());
        let tools = registry.get_all_tools();
        let names = registry.tool_names();
        assert_eq!(tools.len(), names.len());
        for (tool, name) in tools.iter().zip(names) {
            assert_eq!(tool.name, name);
        }
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_registry_call_ping() {
        let registry = ToolRegistry::new(test_catalog());
        let result = registry.call_tool("ping", serde_json::json!({})).unwrap();
        assert_eq!(result["content"][0]["text"], serde_json::json!("pong"));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_registry_call_topic() {
        let registry = ToolRegistry::new(test_catalog());
        let result = registry
            .call_tool("get_common_swagger", serde_json::json!({}))
            .unwrap();
        assert_eq!(result["isError"], serde_json::json!(false));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_registry_call_unknown() {
        let registry = ToolRegistry::new(test_catalog());
        let result = registry.call_tool("unknown", serde_json::json!({}));
        assert!(result.is_err());
    }
}
