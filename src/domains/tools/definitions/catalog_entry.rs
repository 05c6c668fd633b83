//! Catalog entry lookup tool definition.
//!
//! The tool-style counterpart of `resources/read`: fetches any catalog entry
//! by its `namespace://topic` identifier.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use super::common::{error_result, success_result};
use crate::domains::catalog::{Catalog, CatalogError, Resolution};

/// Parameters for the catalog entry tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetCatalogEntryParams {
    /// Identifier of the entry, e.g. `primes://overview`.
    #[schemars(description = "Catalog identifier of the form namespace://topic (e.g. primes://overview)")]
    pub identifier: String,
}

/// Catalog entry tool - fetches documentation by identifier.
pub struct GetCatalogEntryTool;

impl GetCatalogEntryTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_catalog_entry";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Fetch project documentation (markdown) by identifier, e.g. primes://overview, esg://swagger, common://comparison. Namespaces: primes, esg, aips, scm, common.";

    /// Execute the tool logic.
    ///
    /// Unknown topics in a known namespace answer with the namespace's
    /// not-found text; an unknown namespace is an error result.
    #[instrument(skip_all, fields(identifier = %params.identifier))]
    pub fn execute(params: &GetCatalogEntryParams, catalog: &Catalog) -> CallToolResult {
        info!("Catalog entry requested: {}", params.identifier);

        match catalog.resolve(&params.identifier) {
            Resolution::Content(entry) => success_result(entry.body.clone()),
            Resolution::Placeholder { message, .. } => success_result(message),
            Resolution::UnknownNamespace => error_result(
                &CatalogError::unknown_namespace(params.identifier.as_str()).to_string(),
            ),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        catalog: Arc<Catalog>,
    ) -> Result<serde_json::Value, String> {
        let identifier = arguments
            .get("identifier")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                crate::domains::tools::ToolError::invalid_arguments(
                    "Missing or invalid 'identifier' parameter",
                )
                .to_string()
            })?
            .to_string();

        let params = GetCatalogEntryParams { identifier };
        let result = Self::execute(&params, &catalog);

        Ok(super::common::to_http_response(result))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetCatalogEntryParams>(),
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
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let catalog = catalog.clone();
            async move {
                let params: GetCatalogEntryParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &catalog))
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SwaggerUrls;
    use crate::domains::catalog::{NOT_FOUND_MARKER, build_catalog};
    use crate::domains::tools::definitions::common::result_text;

    fn catalog() -> Catalog {
        build_catalog(SwaggerUrls::default())
    }

    fn params(identifier: &str) -> GetCatalogEntryParams {
        GetCatalogEntryParams {
            identifier: identifier.to_string(),
        }
    }

    #[test]
    fn test_fetch_known_entry() {
        let result = GetCatalogEntryTool::execute(&params("scm://overview"), &catalog());
        assert_eq!(result.is_error, Some(false));
        assert!(result_text(&result).contains("SCM"));
    }

    #[test]
    fn test_fetch_unknown_topic() {
        let result = GetCatalogEntryTool::execute(&params("esg://nothing"), &catalog());
        assert_eq!(result.is_error, Some(false));
        assert!(result_text(&result).contains(NOT_FOUND_MARKER));
    }

    #[test]
    fn test_fetch_unknown_namespace() {
        let result = GetCatalogEntryTool::execute(&params("unknown://x"), &catalog());
        assert_eq!(result.is_error, Some(true));
        assert!(result_text(&result).contains("unknown://x"));
    }

    #[test]
    fn test_params_require_identifier() {
        let parsed: Result<GetCatalogEntryParams, _> = serde_json::from_str("{}");
        assert!(parsed.is_err());
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_handler_missing_param() {
        let result = GetCatalogEntryTool::http_handler(serde_json::json!({}), Arc::new(catalog()));
        assert!(result.is_err());
    }
}
