//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables (and an optional `.env` file) on top of defaults.
//! The configuration is read once at startup and never changes afterwards.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Swagger URLs interpolated into the catalog bodies.
    pub swagger: SwaggerUrls,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Where a Swagger URL comes from: its key, environment variable and fallback.
#[derive(Debug, Clone, Copy)]
pub struct SwaggerSource {
    pub key: &'static str,
    pub env_var: &'static str,
    pub default_url: &'static str,
}

/// Every configurable Swagger URL, in listing order.
pub const SWAGGER_SOURCES: [SwaggerSource; 8] = [
    SwaggerSource {
        key: "esg",
        env_var: "SWAGGER_ESG",
        default_url: "https://api.esg.primes-cloud.co.kr/api-docs/esg",
    },
    SwaggerSource {
        key: "primes_production",
        env_var: "SWAGGER_PRIMES_PROD",
        default_url: "https://api.orcamaas.com/api-docs/production",
    },
    SwaggerSource {
        key: "primes_sales",
        env_var: "SWAGGER_PRIMES_SALES",
        default_url: "https://api.orcamaas.com/api-docs/sales",
    },
    SwaggerSource {
        key: "primes_purchase",
        env_var: "SWAGGER_PRIMES_PURCHASE",
        default_url: "https://api.orcamaas.com/api-docs/purchase",
    },
    SwaggerSource {
        key: "primes_inventory",
        env_var: "SWAGGER_PRIMES_INVENTORY",
        default_url: "https://api.orcamaas.com/api-docs/inventory",
    },
    SwaggerSource {
        key: "primes_machine",
        env_var: "SWAGGER_PRIMES_MACHINE",
        default_url: "https://api.orcamaas.com/api-docs/machine",
    },
    SwaggerSource {
        key: "primes_mold",
        env_var: "SWAGGER_PRIMES_MOLD",
        default_url: "https://api.orcamaas.com/api-docs/mold",
    },
    SwaggerSource {
        key: "primes_ini",
        env_var: "SWAGGER_PRIMES_INI",
        default_url: "https://api.orcamaas.com/api-docs/init",
    },
];

/// Swagger URL per descriptive key.
///
/// These are reference strings only; the server never fetches them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwaggerUrls {
    urls: Vec<(String, String)>,
}

impl SwaggerUrls {
    /// Resolve every URL through `lookup`, falling back to the default when
    /// it returns `None`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let urls = SWAGGER_SOURCES
            .iter()
            .map(|source| {
                let url = match lookup(source.env_var) {
                    Some(url) => {
                        info!("{} overridden by {}", source.key, source.env_var);
                        url
                    }
                    None => source.default_url.to_string(),
                };
                (source.key.to_string(), url)
            })
            .collect();

        Self { urls }
    }

    /// Resolve every URL from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Get the URL for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.urls
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, url)| url.as_str())
    }

    /// Iterate over `(key, url)` pairs in listing order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.urls.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The mapping as a JSON object.
    pub fn to_json(&self) -> serde_json::Value {
        let map: serde_json::Map<String, serde_json::Value> = self
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();
        serde_json::Value::Object(map)
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

impl Default for SwaggerUrls {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "unified-project-info-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            swagger: SwaggerUrls::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Server settings use the `MCP_` prefix (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`, `MCP_TRANSPORT`, ...). `LOG_LEVEL` is accepted when
    /// `MCP_LOG_LEVEL` is unset. Swagger URLs use `SWAGGER_*`. Unset
    /// variables fall back to defaults without complaint.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL").or_else(|_| std::env::var("LOG_LEVEL")) {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();
        config.swagger = SwaggerUrls::from_env();

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::catalog::build_catalog;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_swagger_override_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("SWAGGER_PRIMES_SALES", "https://example.test/sales");
        }
        let config = Config::from_env();
        unsafe {
            std::env::remove_var("SWAGGER_PRIMES_SALES");
        }

        assert_eq!(
            config.swagger.get("primes_sales"),
            Some("https://example.test/sales")
        );

        let catalog = build_catalog(config.swagger);
        let body = catalog.resolve("primes://swagger").body().unwrap();
        assert!(body.contains("https://example.test/sales"));
    }

    #[test]
    fn test_swagger_default_fallback() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("SWAGGER_PRIMES_SALES");
        }
        let config = Config::from_env();
        assert_eq!(
            config.swagger.get("primes_sales"),
            Some("https://api.orcamaas.com/api-docs/sales")
        );

        let catalog = build_catalog(config.swagger);
        let body = catalog.resolve("primes://swagger").body().unwrap();
        assert!(body.contains("https://api.orcamaas.com/api-docs/sales"));
    }

    #[test]
    fn test_server_name_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_SERVER_NAME", "docs-test");
        }
        let config = Config::from_env();
        unsafe {
            std::env::remove_var("MCP_SERVER_NAME");
        }
        assert_eq!(config.server.name, "docs-test");
    }

    #[test]
    fn test_swagger_urls_order_and_keys() {
        let urls = SwaggerUrls::default();
        assert_eq!(urls.len(), 8);
        let keys: Vec<_> = urls.iter().map(|(k, _)| k).collect();
        assert_eq!(keys[0], "esg");
        assert_eq!(keys[7], "primes_ini");
        assert_eq!(urls.get("primes_ini"), Some("https://api.orcamaas.com/api-docs/init"));
        assert_eq!(urls.get("missing"), None);
    }

    #[test]
    fn test_swagger_urls_to_json() {
        let json = SwaggerUrls::default().to_json();
        assert_eq!(
            json["esg"],
            serde_json::json!("https://api.esg.primes-cloud.co.kr/api-docs/esg")
        );
        assert_eq!(json.as_object().unwrap().len(), 8);
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server.name, "unified-project-info-mcp");
        assert_eq!(config.logging.level, "info");
    }
}
