//! HTTP transport implementation.
//!
//! JSON-RPC over POST, so plain HTTP clients (curl, browsers) can browse the
//! documentation catalog. `GET /health` and `GET /` answer without a session.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{debug, info, instrument, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::McpServer;
use crate::domains::resources::ResourceError;

/// Protocol version reported on initialize.
const PROTOCOL_VERSION: &str = "2024-11-05";

/// JSON-RPC and MCP error codes.
pub mod codes {
    pub const INVALID_REQUEST: i32 = -32600;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;
    pub const RESOURCE_NOT_FOUND: i32 = -32002;
}

/// JSON-RPC request structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

/// JSON-RPC response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(codes::INVALID_PARAMS, message)
    }
}

impl From<ResourceError> for JsonRpcError {
    fn from(error: ResourceError) -> Self {
        if error.is_not_found() {
            warn!("{}", error);
            Self::new(codes::RESOURCE_NOT_FOUND, error.to_string())
        } else {
            Self::new(codes::INTERNAL_ERROR, error.to_string())
        }
    }
}

impl JsonRpcResponse {
    fn from_outcome(id: Option<Value>, outcome: Result<Value, JsonRpcError>) -> Self {
        let (result, error) = match outcome {
            Ok(result) => (Some(result), None),
            Err(error) => (None, Some(error)),
        };
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result,
            error,
        }
    }
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    server: McpServer,
    /// Path of the JSON-RPC endpoint, reported by the root handler.
    rpc_path: String,
    /// Negotiated session, if a client has initialized.
    session: Arc<RwLock<Option<SessionState>>>,
}

/// What the transport remembers about the last initialize.
#[derive(Debug, Clone)]
struct SessionState {
    initialized: bool,
    protocol_version: &'static str,
}

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Run the HTTP transport until the listener fails.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();

        let state = AppState {
            server,
            rpc_path: self.config.rpc_path.clone(),
            session: Arc::new(RwLock::new(None)),
        };

        let mut app = Router::new()
            .route(&self.config.rpc_path, post(handle_rpc))
            .route("/health", get(health_check))
            .route("/", get(root_handler))
            .with_state(state)
            .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

        if self.config.enable_cors {
            app = app.layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            );
        }

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!(
            "Ready - listening on {} (JSON-RPC at POST {}, CORS {})",
            addr,
            self.config.rpc_path,
            if self.config.enable_cors { "enabled" } else { "disabled" }
        );

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))
    }
}

/// Root handler - describes the server and lists its catalog.
async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    let catalog = state.server.catalog();
    let namespaces: Vec<&str> = catalog.namespaces().iter().map(|ns| ns.as_str()).collect();

    Json(serde_json::json!({
        "name": state.server.name(),
        "version": state.server.version(),
        "transport": "HTTP",
        "protocol": "JSON-RPC 2.0",
        "endpoints": {
            "rpc": state.rpc_path,
            "health": "/health"
        },
        "namespaces": namespaces,
        "entries": catalog.list_entries()
    }))
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

#[instrument(skip_all, fields(method))]
async fn handle_rpc(
    State(state): State<AppState>,
    Json(request): Json<JsonRpcRequest>,
) -> Response {
    tracing::Span::current().record("method", &request.method);
    info!("Received JSON-RPC request: {}", request.method);

    match process_request(&state, request).await {
        Some(response) => (StatusCode::OK, Json(response)).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}

/// Dispatch one JSON-RPC request.
///
/// Returns `None` for a notification (no `id`), which gets no reply body.
async fn process_request(state: &AppState, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
    if request.jsonrpc != "2.0" {
        return Some(JsonRpcResponse::from_outcome(
            request.id,
            Err(JsonRpcError::new(codes::INVALID_REQUEST, "Invalid Request")),
        ));
    }

    if request.id.is_none() && request.method.starts_with("notifications/") {
        notification(state, &request.method).await;
        return None;
    }

    let params = request.params.unwrap_or_else(|| serde_json::json!({}));
    let outcome = match request.method.as_str() {
        "initialize" => initialize(state).await,
        "tools/list" => Ok(serde_json::json!({ "tools": state.server.list_tools() })),
        "tools/call" => call_tool(state, &params).await,
        "resources/list" => Ok(serde_json::json!({
            "resources": state.server.list_resources().await
        })),
        "resources/templates/list" => Ok(serde_json::json!({
            "resourceTemplates": state.server.list_resource_templates().await
        })),
        "resources/read" => read_resource(state, &params).await,
        method if method.starts_with("notifications/") => {
            notification(state, method).await;
            Ok(Value::Null)
        }
        method => {
            warn!("Unknown method: {}", method);
            Err(JsonRpcError::new(codes::METHOD_NOT_FOUND, "Method not found"))
        }
    };

    Some(JsonRpcResponse::from_outcome(request.id, outcome))
}

/// Extract a required string parameter.
fn required_str<'a>(params: &'a Value, key: &str) -> Result<&'a str, JsonRpcError> {
    params
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| JsonRpcError::invalid_params(format!("Missing '{}' parameter", key)))
}

async fn initialize(state: &AppState) -> Result<Value, JsonRpcError> {
    *state.session.write().await = Some(SessionState {
        initialized: false,
        protocol_version: PROTOCOL_VERSION,
    });

    Ok(serde_json::json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": {},
            "resources": {}
        },
        "serverInfo": {
            "name": state.server.name(),
            "version": state.server.version()
        },
        "instructions": McpServer::INSTRUCTIONS
    }))
}

async fn call_tool(state: &AppState, params: &Value) -> Result<Value, JsonRpcError> {
    let name = required_str(params, "name")?;
    let arguments = params
        .get("arguments")
        .cloned()
        .unwrap_or_else(|| serde_json::json!({}));

    state
        .server
        .call_tool(name, arguments)
        .await
        .map_err(JsonRpcError::invalid_params)
}

async fn read_resource(state: &AppState, params: &Value) -> Result<Value, JsonRpcError> {
    let uri = required_str(params, "uri")?;
    Ok(state.server.read_resource(uri).await?)
}

async fn notification(state: &AppState, method: &str) {
    if method == "notifications/initialized" {
        if let Some(session) = state.session.write().await.as_mut() {
            session.initialized = true;
            debug!(
                "Session initialized (protocol {})",
                session.protocol_version
            );
        }
    } else {
        info!("Received notification: {}", method);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;

    fn state() -> AppState {
        AppState {
            server: McpServer::new(Config::default()),
            rpc_path: "/mcp".to_string(),
            session: Arc::new(RwLock::new(None)),
        }
    }

    fn request(method: &str, params: Value) -> JsonRpcRequest {
        JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(serde_json::json!(1)),
            method: method.to_string(),
            params: Some(params),
        }
    }

    async fn dispatch(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
        process_request(state, request)
            .await
            .expect("request with an id gets a response")
    }

    #[tokio::test]
    async fn test_initialize_reports_capabilities() {
        let state = state();
        let response = dispatch(&state, request("initialize", serde_json::json!({}))).await;
        let result = response.result.unwrap();
        assert_eq!(result["serverInfo"]["name"], "unified-project-info-mcp");
        assert!(result["capabilities"]["resources"].is_object());
        assert!(result["capabilities"].get("prompts").is_none());

        dispatch(
            &state,
            request("notifications/initialized", serde_json::json!({})),
        )
        .await;
        let session = state.session.read().await;
        assert!(session.as_ref().unwrap().initialized);
    }

    #[tokio::test]
    async fn test_ping_over_http() {
        let response = dispatch(
            &state(),
            request("tools/call", serde_json::json!({"name": "ping"})),
        )
        .await;
        let result = response.result.unwrap();
        assert_eq!(result["content"][0]["text"], "pong");
    }

    #[tokio::test]
    async fn test_tools_call_requires_name() {
        let response =
            dispatch(&state(), request("tools/call", serde_json::json!({}))).await;
        assert_eq!(response.error.unwrap().code, codes::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_read_unknown_namespace_is_resource_not_found() {
        let response = dispatch(
            &state(),
            request("resources/read", serde_json::json!({"uri": "unknown://x"})),
        )
        .await;
        assert_eq!(response.error.unwrap().code, codes::RESOURCE_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_read_unknown_topic_is_placeholder() {
        let response = dispatch(
            &state(),
            request("resources/read", serde_json::json!({"uri": "scm://nothing"})),
        )
        .await;
        let result = response.result.unwrap();
        let text = result["contents"][0]["text"].as_str().unwrap();
        assert!(text.contains("찾을 수 없습니다"));
    }

    #[tokio::test]
    async fn test_prompts_are_not_served() {
        let response =
            dispatch(&state(), request("prompts/list", serde_json::json!({}))).await;
        assert_eq!(response.error.unwrap().code, codes::METHOD_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_rejects_wrong_jsonrpc_version() {
        let mut req = request("tools/list", serde_json::json!({}));
        req.jsonrpc = "1.0".to_string();
        let response = dispatch(&state(), req).await;
        assert_eq!(response.error.unwrap().code, codes::INVALID_REQUEST);
    }

    #[tokio::test]
    async fn test_notification_without_id_gets_no_reply() {
        let state = state();
        dispatch(&state, request("initialize", serde_json::json!({}))).await;

        let notification = JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: None,
            method: "notifications/initialized".to_string(),
            params: None,
        };
        assert!(process_request(&state, notification).await.is_none());

        let session = state.session.read().await;
        assert!(session.as_ref().unwrap().initialized);
    }

    #[tokio::test]
    async fn test_root_lists_catalog_entries() {
        let response = root_handler(State(state())).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["entries"].as_array().unwrap().len(), 15);
        assert_eq!(json["entries"][0]["identifier"], "primes://overview");
        assert_eq!(json["entries"][0]["mimeType"], "text/markdown");
    }
}
