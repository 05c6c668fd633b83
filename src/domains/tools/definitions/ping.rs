//! Ping tool definition.
//!
//! A liveness probe: takes no input and always answers `pong`.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use tracing::info;

use super::common::{NoParams, success_result};

/// Ping tool - health check.
pub struct PingTool;

impl PingTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "ping";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Health check. Always returns the string 'pong'.";

    /// The fixed answer.
    pub const RESPONSE: &'static str = "pong";

    /// Execute the tool logic.
    pub fn execute() -> CallToolResult {
        info!("ping called");
        success_result(Self::RESPONSE)
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(_arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        Ok(super::common::to_http_response(Self::execute()))
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
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |_ctx: ToolCallContext<'_, S>| {
            async move { Ok::<_, McpError>(Self::execute()) }.boxed()
        })
    }
}
