//! # HTTP Server
//!
//! Binds the listening socket and serves the application router.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use crate::app::{build_router, AppState};
use crate::config::ServerConfig;

pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server with fresh, empty stores.
    pub fn new(config: ServerConfig) -> Self {
        Self::with_state(config, Arc::new(AppState::new()))
    }

    /// Create a server around existing state. Tests use this to seed or
    /// observe the stores directly.
    pub fn with_state(config: ServerConfig, state: Arc<AppState>) -> Self {
        let router = build_router(&config, state);
        Self { config, router }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for driving requests in-process)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process is stopped.
    pub async fn start(self) -> io::Result<()> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        let listener = TcpListener::bind(addr).await?;
        tracing::info!(%addr, env = %self.config.env, "server listening");
        axum::serve(listener, self.router).await
    }
}
