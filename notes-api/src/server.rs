//! Server setup and lifecycle.

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;

use crate::config::Config;
use crate::errors::{NotesApiError, NotesApiResult};
use crate::routes::create_router;
use crate::state::AppState;
use crate::telemetry::Telemetry;

/// The lecture notes HTTP server.
pub struct NotesServer {
    state: Arc<AppState>
}

impl NotesServer {
    /// Creates a server from configuration, installing the Prometheus
    /// recorder when metrics are enabled.
    pub fn new(config: Config) -> NotesApiResult<Self> {
        let metrics_enabled = config.telemetry.metrics_enabled;
        let mut state = AppState::new(config);

        if metrics_enabled {
            state = state.with_metrics(Telemetry::install_prometheus()?);
            tracing::info!("Prometheus metrics recorder installed");
        }

        Ok(Self::with_state(Arc::new(state)))
    }

    /// Creates a server instance from an existing `AppState`.
    pub fn with_state(state: Arc<AppState>) -> Self {
        Self { state }
    }

    /// Runs the HTTP server until Ctrl+C or SIGTERM.
    pub async fn run(self) -> NotesApiResult<()> {
        let addr: SocketAddr = self.state.config.socket_addr()?;
        let router = create_router(self.state.clone());

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| NotesApiError::Server(format!("Failed to bind to {addr}: {e}")))?;

        tracing::info!(
            %addr,
            auth_enabled = self.state.auth.enabled(),
            "Lecture notes server starting"
        );

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| NotesApiError::Server(format!("Server error: {e}")))?;

        tracing::info!("Lecture notes server stopped");
        Ok(())
    }

    #[must_use]
    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        },
        () = terminate => {
            tracing::info!("Received terminate signal, initiating graceful shutdown");
        },
    }
}

/// Entry point for containerized deployments: tracing, env config, serve.
pub async fn run_from_env() -> NotesApiResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into())
        )
        .init();

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    NotesServer::new(config)?.run().await
}
