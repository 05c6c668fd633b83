//! Transport configuration types.

use serde::{Deserialize, Serialize};

#[cfg(feature = "tcp")]
const DEFAULT_TCP_PORT: u16 = 3000;

#[cfg(feature = "http")]
const DEFAULT_HTTP_PORT: u16 = 8080;

/// Transport configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// Standard input/output transport (default for MCP).
    #[cfg(feature = "stdio")]
    Stdio,

    /// TCP socket transport with JSON-RPC messages.
    #[cfg(feature = "tcp")]
    Tcp(TcpConfig),

    /// HTTP transport with JSON-RPC over POST.
    #[cfg(feature = "http")]
    Http(HttpConfig),
}

/// TCP transport configuration.
#[cfg(feature = "tcp")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TcpConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,
}

/// HTTP transport configuration.
#[cfg(feature = "http")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Path for JSON-RPC endpoint.
    #[serde(default = "default_rpc_path")]
    pub rpc_path: String,

    /// Enable CORS for browser clients.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,
}

#[cfg(any(feature = "tcp", feature = "http"))]
fn default_host() -> String {
    "127.0.0.1".to_string()
}

#[cfg(feature = "http")]
fn default_rpc_path() -> String {
    "/mcp".to_string()
}

#[cfg(feature = "http")]
fn default_cors() -> bool {
    true
}

impl Default for TransportConfig {
    fn default() -> Self {
        #[cfg(feature = "stdio")]
        {
            return Self::Stdio;
        }

        #[cfg(all(not(feature = "stdio"), feature = "tcp"))]
        {
            return Self::Tcp(TcpConfig::default());
        }

        #[cfg(all(not(feature = "stdio"), not(feature = "tcp"), feature = "http"))]
        {
            return Self::Http(HttpConfig::default());
        }

        #[cfg(not(any(feature = "stdio", feature = "tcp", feature = "http")))]
        {
            compile_error!("At least one transport feature must be enabled: stdio, tcp, or http");
        }
    }
}

#[cfg(feature = "tcp")]
impl Default for TcpConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(feature = "tcp")]
impl TcpConfig {
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            port: parse_port(lookup("MCP_TCP_PORT"), DEFAULT_TCP_PORT),
            host: lookup("MCP_TCP_HOST").unwrap_or_else(default_host),
        }
    }
}

#[cfg(feature = "http")]
impl Default for HttpConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(feature = "http")]
impl HttpConfig {
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            port: parse_port(lookup("MCP_HTTP_PORT"), DEFAULT_HTTP_PORT),
            host: lookup("MCP_HTTP_HOST").unwrap_or_else(default_host),
            rpc_path: lookup("MCP_HTTP_PATH").unwrap_or_else(default_rpc_path),
            enable_cors: lookup("MCP_HTTP_CORS")
                .map(|v| !matches!(v.to_lowercase().as_str(), "false" | "0"))
                .unwrap_or_else(default_cors),
        }
    }
}

/// Parse a port, keeping `fallback` when unset or invalid.
#[cfg(any(feature = "tcp", feature = "http"))]
fn parse_port(value: Option<String>, fallback: u16) -> u16 {
    value.and_then(|p| p.trim().parse().ok()).unwrap_or(fallback)
}

impl TransportConfig {
    /// Load transport config from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the transport config from `lookup`.
    ///
    /// `MCP_TRANSPORT` selects the transport; a value naming a transport that
    /// is not compiled in falls back to the default one. Unparsable ports
    /// fall back to the default port.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let transport = lookup("MCP_TRANSPORT").unwrap_or_default().to_lowercase();

        match transport.as_str() {
            #[cfg(feature = "tcp")]
            "tcp" => Self::Tcp(TcpConfig::from_lookup(lookup)),
            #[cfg(feature = "http")]
            "http" => Self::Http(HttpConfig::from_lookup(lookup)),
            _ => Self::default(),
        }
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => "STDIO (standard MCP mode)".to_string(),
            #[cfg(feature = "tcp")]
            Self::Tcp(cfg) => format!("TCP on {}:{}", cfg.host, cfg.port),
            #[cfg(feature = "http")]
            Self::Http(cfg) => format!("HTTP on {}:{}{}", cfg.host, cfg.port, cfg.rpc_path),
        }
    }

    /// Check if this transport is the standard STDIO mode.
    pub fn is_stdio(&self) -> bool {
        #[cfg(feature = "stdio")]
        {
            matches!(self, Self::Stdio)
        }
        #[cfg(not(feature = "stdio"))]
        {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[cfg(feature = "stdio")]
    #[test]
    fn test_default_is_stdio() {
        let config = TransportConfig::from_lookup(lookup(&[]));
        assert!(config.is_stdio());
        assert_eq!(config.description(), "STDIO (standard MCP mode)");
    }

    #[cfg(feature = "stdio")]
    #[test]
    fn test_unknown_transport_falls_back() {
        let config = TransportConfig::from_lookup(lookup(&[("MCP_TRANSPORT", "carrier-pigeon")]));
        assert!(config.is_stdio());
    }

    #[cfg(feature = "tcp")]
    #[test]
    fn test_tcp_from_lookup() {
        let config = TransportConfig::from_lookup(lookup(&[
            ("MCP_TRANSPORT", "TCP"),
            ("MCP_TCP_PORT", "4100"),
        ]));
        assert_eq!(config.description(), "TCP on 127.0.0.1:4100");
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_from_lookup() {
        let config = TransportConfig::from_lookup(lookup(&[
            ("MCP_TRANSPORT", "http"),
            ("MCP_HTTP_PORT", "not-a-port"),
            ("MCP_HTTP_PATH", "/rpc"),
            ("MCP_HTTP_CORS", "false"),
        ]));
        match config {
            TransportConfig::Http(cfg) => {
                assert_eq!(cfg.port, 8080);
                assert_eq!(cfg.rpc_path, "/rpc");
                assert!(!cfg.enable_cors);
            }
            #[allow(unreachable_patterns)]
            _ => panic!("Expected HTTP transport"),
        }
    }
}
