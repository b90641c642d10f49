//! HTTP API layer with Axum routes and extractors.
//!
//! This crate provides:
//! - REST API routes under `/api`
//! - Request extractors (storage handle, JSON body, typed ids)
//! - Error responses shaped as `{"error": message}`

pub mod error;
pub mod extractors;
pub mod routes;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, absent when no database is configured.
    pub db: Option<Arc<DatabaseConnection>>,
    /// Deployment environment name.
    pub environment: String,
    /// Organization name printed in report titles.
    pub organization_name: Option<String>,
}

impl AppState {
    /// Whether a database connection is available.
    #[must_use]
    pub const fn storage_configured(&self) -> bool {
        self.db.is_some()
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState, body_limit_bytes: usize) -> Router {
    Router::new()
        .nest("/api", routes::api_routes())
        .layer(DefaultBodyLimit::max(body_limit_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
