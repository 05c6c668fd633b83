//! Named topic tools.
//!
//! One parameterless tool per catalog entry (`get_primes_overview`,
//! `get_esg_swagger`, ...). Each tool is bound to its entry when the router
//! is built, so calling it is a plain lookup.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use std::sync::Arc;
use tracing::debug;

use super::common::{NoParams, error_result, success_result};
use crate::domains::catalog::{Catalog, Entry};

/// Named topic tools, derived from the catalog.
pub struct TopicTool;

impl TopicTool {
    /// Execute the tool bound to `tool_name`.
    pub fn execute(catalog: &Catalog, tool_name: &str) -> CallToolResult {
        debug!("Topic tool called: {}", tool_name);
        match catalog.entry_by_tool_name(tool_name) {
            Some(entry) => success_result(entry.body.clone()),
            None => error_result(&format!("Unknown tool: {}", tool_name)),
        }
    }

    /// HTTP handler for a topic tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        tool_name: &str,
        catalog: Arc<Catalog>,
    ) -> Result<serde_json::Value, String> {
        Ok(super::common::to_http_response(Self::execute(
            &catalog, tool_name,
        )))
    }

    /// Create the Tool model for one entry.
    pub fn to_tool(entry: &Entry) -> Tool {
        Tool {
            name: entry.tool_name.into(),
            description: Some(
                format!("{} (markdown, {}). {}", entry.title, entry.identifier, entry.description)
                    .into(),
            ),
            input_schema: cached_schema_for_type::<NoParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Tool models for every entry, in catalog order.
    pub fn to_tools(catalog: &Catalog) -> Vec<Tool> {
        catalog.entries().iter().map(Self::to_tool).collect()
    }

    /// Names of every topic tool, in catalog order.
    pub fn tool_names(catalog: &Catalog) -> Vec<&'static str> {
        catalog.entries().iter().map(|e| e.tool_name).collect()
    }

    /// Create one ToolRoute per entry for STDIO/TCP transport.
    pub fn create_routes<S>(catalog: Arc<Catalog>) -> Vec<ToolRoute<S>>
    where
        S: Send + Sync + 'static,
    {
        catalog
            .entries()
            .iter()
            .map(|entry| {
                let catalog = catalog.clone();
                let tool_name = entry.tool_name;
                ToolRoute::new_dyn(Self::to_tool(entry), move |_ctx: ToolCallContext<'_, S>| {
                    let catalog = catalog.clone();
                    async move { Ok::<_, McpError>(Self::execute(&catalog, tool_name)) }.boxed()
                })
            })
            .collect()
    }
}
