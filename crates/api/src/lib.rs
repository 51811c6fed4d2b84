//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for accounts and transfers
//! - JSON error responses
//! - Request extractors that reject malformed input with 400

pub mod error;
pub mod extract;
pub mod routes;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use coffer_core::Deadline;
use coffer_db::{AccountRepository, TransferRepository};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Account ledger.
    pub accounts: Arc<AccountRepository>,
    /// Transfer engine.
    pub transfers: Arc<TransferRepository>,
    /// Time budget granted to each request.
    pub request_timeout: Duration,
}

impl AppState {
    /// Builds the repositories over one connection pool.
    #[must_use]
    pub fn new(db: DatabaseConnection, request_timeout: Duration) -> Self {
        let db = Arc::new(db);
        Self {
            accounts: Arc::new(AccountRepository::new(Arc::clone(&db))),
            transfers: Arc::new(TransferRepository::new(db)),
            request_timeout,
        }
    }

    /// Deadline for a request starting now.
    #[must_use]
    pub fn deadline(&self) -> Deadline {
        Deadline::after(self.request_timeout)
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
