//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the catalog adapters.
//!
//! The catalog is built once from the configuration and shared as
//! `Arc<Catalog>` by the resource service and the tool router, so a
//! resource read and the matching tool call always return the same body.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::config::Config;
use crate::domains::{
    catalog::{Catalog, build_catalog},
    resources::{ResourceError, ResourceService},
    tools::build_tool_router,
};

#[cfg(feature = "http")]
use crate::domains::tools::ToolRegistry;

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and coordinates
/// between the resource and tool adapters of the catalog.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// The documentation catalog, read-only after startup.
    catalog: Arc<Catalog>,

    /// Service for handling resource-related requests.
    resource_service: Arc<ResourceService>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Text sent to clients on initialize.
    pub const INSTRUCTIONS: &'static str = "Project documentation for Primes, ESG, AIPS and SCM. \
        Read resources such as primes://overview or esg://swagger, or call the get_* tools. \
        get_catalog_entry fetches any entry by identifier and get_swagger_urls lists the API docs.";

    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> Self {
        let catalog = Arc::new(build_catalog(config.swagger.clone()));
        let config = Arc::new(config);

        let resource_service = Arc::new(ResourceService::new(catalog.clone()));

        Self {
            tool_router: build_tool_router::<Self>(catalog.clone()),
            config,
            catalog,
            resource_service,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the shared catalog.
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    // ------------------------------------------------------------------
    // JSON views for the HTTP transport, in the MCP wire shape.
    // ------------------------------------------------------------------

    /// All tools as `tools/list` items.
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        to_json_values(&self.tool_router.list_all())
    }

    /// Call a tool by name through the registry.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        ToolRegistry::new(self.catalog.clone()).call_tool(name, arguments)
    }

    /// All resources as `resources/list` items.
    pub async fn list_resources(&self) -> Vec<serde_json::Value> {
        to_json_values(&self.resource_service.list_resources().await)
    }

    /// All templates as `resources/templates/list` items.
    pub async fn list_resource_templates(&self) -> Vec<serde_json::Value> {
        to_json_values(&self.resource_service.list_resource_templates().await)
    }

    /// A `resources/read` result.
    pub async fn read_resource(&self, uri: &str) -> Result<serde_json::Value, ResourceError> {
        let result = self.resource_service.read_resource(uri).await?;
        serde_json::to_value(result).map_err(|e| ResourceError::internal(e.to_string()))
    }
}

fn to_json_values<T: serde::Serialize>(items: &[T]) -> Vec<serde_json::Value> {
    items
        .iter()
        .filter_map(|item| serde_json::to_value(item).ok())
        .collect()
}

/// Map a resource error onto the MCP error it is reported as.
fn resource_error_to_mcp(error: ResourceError) -> McpError {
    if error.is_not_found() {
        warn!("{}", error);
        McpError::resource_not_found(error.to_string(), None)
    } else {
        McpError::internal_error(error.to_string(), None)
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(Self::INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        let resources = self.resource_service.list_resources().await;
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, McpError> {
        info!("Listing resource templates");
        let templates = self.resource_service.list_resource_templates().await;
        Ok(ListResourceTemplatesResult {
            resource_templates: templates,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resource_service
            .read_resource(&request.uri)
            .await
            .map_err(resource_error_to_mcp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server() -> McpServer {
        McpServer::new(Config::default())
    }

    #[test]
    fn test_server_info() {
        let server = server();
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_some());
        assert!(info.capabilities.prompts.is_none());
        assert_eq!(info.server_info.name, "unified-project-info-mcp");
    }

    #[test]
    fn test_list_tools_includes_ping() {
        let tools = server().list_tools();
        assert!(tools.iter().any(|t| t["name"] == "ping"));
        assert_eq!(tools.len(), server().catalog().len() + 3);
    }

    #[tokio::test]
    async fn test_list_resources_json() {
        let resources = server().list_resources().await;
        assert_eq!(resources.len(), 15);
        assert_eq!(resources[0]["uri"], "primes://overview");
        assert_eq!(resources[0]["mimeType"], "text/markdown");
    }

    #[tokio::test]
    async fn test_read_resource_json() {
        let result = server().read_resource("aips://overview").await.unwrap();
        let text = result["contents"][0]["text"].as_str().unwrap();
        assert!(text.contains("AIPS"));
    }

    #[tokio::test]
    async fn test_read_unknown_namespace() {
        let err = server().read_resource("unknown://x").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_resource_error_mapping() {
        let not_found = resource_error_to_mcp(ResourceError::not_found("unknown://x"));
        assert_eq!(not_found.code, ErrorCode::RESOURCE_NOT_FOUND);

        let internal = resource_error_to_mcp(ResourceError::internal("boom"));
        assert_eq!(internal.code, ErrorCode::INTERNAL_ERROR);
    }

    #[tokio::test]
    async fn test_list_resource_templates_json() {
        let templates = server().list_resource_templates().await;
        assert_eq!(templates.len(), 5);
        assert_eq!(templates[0]["uriTemplate"], "primes://{topic}");
    }
}
