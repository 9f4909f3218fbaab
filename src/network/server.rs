//! HTTP Server
//!
//! Binds the listener and serves the router until shutdown.

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use super::routes::create_router;
use crate::config::Config;
use crate::error::Result;
use crate::service::TriviaService;

/// HTTP server for the trivia service
pub struct Server {
    config: Config,
    service: TriviaService,
}

impl Server {
    /// Create a new server with the given config and service
    pub fn new(config: Config, service: TriviaService) -> Self {
        Self { config, service }
    }

    /// Router with request tracing applied
    pub fn router(&self) -> Router {
        create_router(self.service.clone(), &self.config.public_base_url).layer(TraceLayer::new_for_http())
    }

    /// Start the server, returning after Ctrl+C or SIGTERM
    pub async fn run(self) -> Result<()> {
        let listener = TcpListener::bind(&self.config.listen_addr).await?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Received shutdown signal, stopping server...");
}
