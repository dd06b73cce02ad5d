//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with the relay mounted under its prefix
//! - Build the shared outbound client (connection pool, timeouts)
//! - Wire up middleware (tracing, request ID)
//! - Bind the server to a listener and serve until shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::{routing::any, Router};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::{ForwardConfig, RelayConfig};
use crate::http::relay::relay_handler;

/// Application state injected into the relay handler.
///
/// The client's connection pool is the only resource shared across
/// requests; it is safe for concurrent use by construction, so no locking
/// is introduced anywhere in the relay.
#[derive(Clone)]
pub struct AppState {
    pub client: reqwest::Client,
    pub options: Arc<ForwardConfig>,
}

/// Error building the server before it ever accepts traffic.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to build outbound HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// HTTP server for the relay.
pub struct HttpServer {
    router: Router,
    config: RelayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: RelayConfig) -> Result<Self, ServerError> {
        // One pooled client for all requests. A connect timeout and a
        // per-read timeout bound a dead upstream; there is deliberately no
        // whole-request deadline, which would cut off long token streams.
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.relay.connect_timeout_secs))
            .read_timeout(Duration::from_secs(config.relay.read_timeout_secs))
            .build()?;

        let state = AppState {
            client,
            options: Arc::new(config.relay.clone()),
        };

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// The relay only activates under the mount prefix; requests elsewhere
    /// fall through to Axum's default 404.
    fn build_router(config: &RelayConfig, state: AppState) -> Router {
        let prefix = config.relay.mount_prefix.as_str();

        Router::new()
            .route(prefix, any(relay_handler))
            .route(&format!("{prefix}/{{*path}}"), any(relay_handler))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::x_request_id()),
            )
    }

    /// Run the server, accepting connections on the given listener until
    /// the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            mount_prefix = %self.config.relay.mount_prefix,
            target_header = %self.config.relay.target_header,
            "relay listening"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("relay stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}
