//! Axum-based RPC server.

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use tally_governance::GovernanceLedger;
use tracing::info;

use crate::error::RpcError;
use crate::handlers::{self, AppState};

/// Default request body cap.
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

/// The RPC server, configured with a bind address and shared ledger state.
pub struct RpcServer {
    pub bind_address: String,
    pub port: u16,
    pub max_body_bytes: usize,
    pub state: Arc<AppState>,
}

impl RpcServer {
    /// Create a server over a fresh, empty ledger.
    pub fn new(bind_address: impl Into<String>, port: u16) -> Self {
        Self::with_ledger(bind_address, port, Arc::new(GovernanceLedger::new()))
    }

    /// Create a server over an existing ledger.
    pub fn with_ledger(
        bind_address: impl Into<String>,
        port: u16,
        ledger: Arc<GovernanceLedger>,
    ) -> Self {
        Self {
            bind_address: bind_address.into(),
            port,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            state: Arc::new(AppState::new(ledger)),
        }
    }

    pub fn max_body_bytes(mut self, limit: usize) -> Self {
        self.max_body_bytes = limit;
        self
    }

    /// Build the router with all handlers attached.
    pub fn router(&self) -> Router {
        router(Arc::clone(&self.state), self.max_body_bytes)
    }

    /// Bind and serve until ctrl-c is received.
    pub async fn start(&self) -> Result<(), RpcError> {
        let addr = format!("{}:{}", self.bind_address, self.port);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| RpcError::Server(format!("bind {addr}: {e}")))?;
        info!("RPC server listening on {}", addr);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| RpcError::Server(e.to_string()))?;
        info!("RPC server stopped");
        Ok(())
    }
}

/// All routes over the given state.
pub fn router(state: Arc<AppState>, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/elections", get(handlers::elections))
        .route(
            "/elections/:election/proposals",
            get(handlers::get_proposals).post(handlers::add_proposals),
        )
        .route(
            "/elections/:election/votes",
            axum::routing::post(handlers::vote),
        )
        .route("/elections/:election/winner", get(handlers::winner))
        .route(
            "/elections/:election/voters/:voter",
            get(handlers::has_voted),
        )
        .route("/status", get(handlers::status))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
