//! TCP transport implementation.
//!
//! Line-delimited JSON-RPC over raw TCP sockets. Each accepted connection
//! gets its own rmcp session on a spawned task.

use rmcp::ServiceExt;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::{TcpListener, TcpStream};
use tracing::{info, warn};

use super::{TransportError, TransportResult, config::TcpConfig};
use crate::core::McpServer;

/// Pause after a failed accept before trying again.
const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// TCP transport handler.
pub struct TcpTransport {
    config: TcpConfig,
}

impl TcpTransport {
    pub fn new(config: TcpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Accept connections forever; only a bind failure returns.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!(
            "{} ready - listening on {} (JSON-RPC over TCP)",
            server.name(),
            addr
        );

        loop {
            let (stream, peer) = match listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    warn!("Failed to accept connection: {}", e);
                    tokio::time::sleep(ACCEPT_BACKOFF).await;
                    continue;
                }
            };

            if let Err(e) = stream.set_nodelay(true) {
                warn!("Failed to set TCP_NODELAY for {}: {}", peer, e);
            }

            // Clones share the same Arc<Catalog>
            tokio::spawn(serve_connection(server.clone(), stream, peer));
        }
    }
}

/// Run one MCP session until the client disconnects.
async fn serve_connection(server: McpServer, stream: TcpStream, peer: SocketAddr) {
    info!("Accepted connection from {}", peer);

    let service = match server.serve(stream).await {
        Ok(service) => service,
        Err(e) => {
            warn!("Failed to initialize session for {}: {}", peer, e);
            return;
        }
    };

    match service.waiting().await {
        Ok(reason) => info!("Client {} disconnected ({:?})", peer, reason),
        Err(e) => warn!("Error while serving client {}: {:?}", peer, e),
    }
}
