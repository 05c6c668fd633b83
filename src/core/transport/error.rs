//! Transport error types.

use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Errors that stop a transport.
///
/// Per-connection failures on TCP are logged and do not surface here.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Failed to bind to {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The rmcp service could not complete the handshake.
    #[error("Server initialization error: {0}")]
    Init(String),

    #[error("HTTP error: {0}")]
    Http(String),

    /// The rmcp service ended with an error.
    #[error("Service error: {0}")]
    Service(String),
}

impl TransportError {
    pub fn bind(address: impl Into<String>, source: std::io::Error) -> Self {
        Self::Bind {
            address: address.into(),
            source,
        }
    }

    pub fn init(msg: impl Into<String>) -> Self {
        Self::Init(msg.into())
    }

    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    pub fn service(msg: impl Into<String>) -> Self {
        Self::Service(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_error_names_address() {
        let source = std::io::Error::new(std::io::ErrorKind::AddrInUse, "in use");
        let err = TransportError::bind("127.0.0.1:8080", source);
        assert_eq!(err.to_string(), "Failed to bind to 127.0.0.1:8080: in use");
    }
}
