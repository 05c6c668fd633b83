//! Common utilities shared across catalog tools.

use rmcp::model::{CallToolResult, Content};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::warn;

/// Parameters for tools that take no input.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct NoParams {}

/// Create a success result with text content.
pub fn success_result(content: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content.into())])
}

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result carrying both a text summary and structured data.
pub fn structured_result(summary: String, data: serde_json::Value) -> CallToolResult {
    CallToolResult {
        content: vec![Content::text(summary)],
        structured_content: Some(data),
        is_error: Some(false),
        meta: None,
    }
}

/// Convert a tool result into the JSON body returned over HTTP.
#[cfg(feature = "http")]
pub fn to_http_response(result: CallToolResult) -> serde_json::Value {
    let mut response = serde_json::Map::new();
    response.insert("content".to_string(), serde_json::json!(result.content));
    response.insert(
        "isError".to_string(),
        serde_json::Value::Bool(result.is_error.unwrap_or(false)),
    );

    if let Some(structured) = result.structured_content {
        response.insert("structuredContent".to_string(), structured);
    }

    serde_json::Value::Object(response)
}

#[cfg(test)]
pub(crate) fn result_text(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        rmcp::model::RawContent::Text(text) => &text.text,
        _ => panic!("Expected text content"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_result() {
        let result = success_result("hello");
        assert_eq!(result.is_error, Some(false));
        assert_eq!(result_text(&result), "hello");
    }

    #[test]
    fn test_error_result() {
        let result = error_result("boom");
        assert_eq!(result.is_error, Some(true));
        assert_eq!(result_text(&result), "boom");
    }

    #[test]
    fn test_no_params_accepts_empty_object() {
        let params: NoParams = serde_json::from_str("{}").unwrap();
        let _ = params;
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_to_http_response() {
        let response = to_http_response(structured_result(
            "summary".to_string(),
            serde_json::json!({"a": 1}),
        ));
        assert_eq!(response["isError"], serde_json::json!(false));
        assert_eq!(response["structuredContent"]["a"], serde_json::json!(1));
    }
}
