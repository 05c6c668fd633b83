//! Swagger URL listing tool.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use std::sync::Arc;
use tracing::info;

use super::common::{NoParams, error_result, structured_result};
use crate::domains::catalog::Catalog;

/// Reports the Swagger URLs the catalog was built with.
pub struct SwaggerUrlsTool;

impl SwaggerUrlsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_swagger_urls";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List the configured Swagger (OpenAPI) URLs for the ESG and Primes services as a JSON object keyed by service.";

    /// Execute the tool logic.
    ///
    /// Returns the mapping both as structured content and as pretty JSON text.
    pub fn execute(catalog: &Catalog) -> CallToolResult {
        let urls = catalog.swagger_urls();
        info!("Listing {} swagger URLs", urls.len());

        let data = urls.to_json();
        match serde_json::to_string_pretty(&data) {
            Ok(text) => structured_result(text, data),
            Err(e) => error_result(&format!("Failed to serialize swagger URLs: {}", e)),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        _arguments: serde_json::Value,
        catalog: Arc<Catalog>,
    ) -> Result<serde_json::Value, String> {
        Ok(super::common::to_http_response(Self::execute(&catalog)))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<NoParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(catalog: Arc<Catalog>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |_ctx: ToolCallContext<'_, S>| {
            let catalog = catalog.clone();
            async move { Ok::<_, McpError>(Self::execute(&catalog)) }.boxed()
        })
    }
}
