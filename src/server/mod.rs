//! HTTP API for analysis records
//!
//! Exposes the record store over a CRUD interface and runs an analysis for
//! every record created through it. Handlers share one [`AppState`].

mod handlers;

pub use handlers::{AnalyzeRequest, ApiError};

use crate::analyzer::Analyzer;
use crate::store::RecordStore;
use axum::routing::get;
use axum::Router;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// State shared by every request handler
pub struct AppState {
    pub analyzer: Analyzer,
    pub store: Arc<dyn RecordStore>,
}

impl AppState {
    pub fn new(analyzer: Analyzer, store: Arc<dyn RecordStore>) -> Self {
        Self { analyzer, store }
    }
}

/// Builds the router with all API routes
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/api/response",
            get(handlers::list_records).post(handlers::create_record),
        )
        .route(
            "/api/response/:id",
            get(handlers::get_record)
                .put(handlers::update_record)
                .delete(handlers::delete_record),
        )
        .with_state(state)
}

/// Binds `addr` and serves the API until ctrl-c is received
pub async fn serve(addr: SocketAddr, state: Arc<AppState>) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    serve_on(listener, state, shutdown_signal()).await
}

/// Serves the API on an already bound listener until `shutdown` completes
pub async fn serve_on<F>(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: F,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    tracing::info!("API listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;
    tracing::info!("API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}
