//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod health;
pub mod inventory;
pub mod reports;
pub mod settings;
pub mod transactions;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(settings::routes())
        .merge(transactions::routes())
        .merge(inventory::routes())
        .merge(reports::routes())
}
