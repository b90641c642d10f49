//! Inventory movement routes.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    routing::{delete, get},
};
use cajachica_core::inventory::{
    InventoryMovement, InventoryService, InventorySnapshot, InventorySummary, MovementDraft,
    MovementType, OutSubtype,
};
use cajachica_db::InventoryRepository;
use cajachica_shared::types::MovementId;
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;
use serde::Deserialize;

use crate::{
    AppState,
    error::ApiError,
    extractors::{ApiJson, MonthQuery, Storage, parse_id},
};

/// Creates the inventory routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/inventory", get(get_inventory).post(create_movement))
        .route("/inventory/summary", get(inventory_summary))
        .route("/inventory/{id}", delete(delete_movement))
}

/// Request body for recording a movement.
#[derive(Debug, Deserialize)]
pub struct CreateMovementRequest {
    /// `in` or `out`.
    #[serde(rename = "type")]
    pub movement_type: Option<MovementType>,
    /// `venta` or `regalia`; required for `out`, ignored for `in`.
    pub subtype: Option<OutSubtype>,
    /// Positive unit count.
    pub units: Option<i64>,
    /// Description.
    pub description: Option<String>,
    /// Invoice or order number.
    pub invoice_number: Option<String>,
    /// Date (YYYY-MM-DD).
    pub date: Option<NaiveDate>,
}

impl From<CreateMovementRequest> for MovementDraft {
    fn from(req: CreateMovementRequest) -> Self {
        Self {
            movement_type: req.movement_type,
            subtype: req.subtype,
            units: req.units,
            description: req.description,
            invoice_number: req.invoice_number,
            date: req.date,
        }
    }
}

fn service(db: DatabaseConnection) -> InventoryService<InventoryRepository> {
    InventoryService::new(Arc::new(InventoryRepository::new(db)))
}

/// GET `/inventory?month=M&year=Y` - Carry-over stock plus the month's movements.
async fn get_inventory(
    Storage(db): Storage,
    MonthQuery(period): MonthQuery,
) -> Result<Json<InventorySnapshot>, ApiError> {
    let snapshot = service(db).snapshot(&period).await?;
    Ok(Json(snapshot))
}

/// GET `/inventory/summary?month=M&year=Y` - Stock totals for the month.
async fn inventory_summary(
    Storage(db): Storage,
    MonthQuery(period): MonthQuery,
) -> Result<Json<InventorySummary>, ApiError> {
    let (_, summary) = service(db).summarize_period(&period).await?;
    Ok(Json(summary))
}

/// POST `/inventory` - Validate, normalize and record a movement.
async fn create_movement(
    Storage(db): Storage,
    ApiJson(payload): ApiJson<CreateMovementRequest>,
) -> Result<Json<InventoryMovement>, ApiError> {
    let created = service(db).record(payload.into()).await?;

    tracing::info!(
        id = %created.id,
        kind = created.movement_type.as_str(),
        units = created.units,
        "Inventory movement created"
    );
    Ok(Json(created))
}

/// DELETE `/inventory/{id}` - Remove a movement. Unknown ids also yield 204.
async fn delete_movement(
    Storage(db): Storage,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id: MovementId = parse_id(&id)?;
    let removed = service(db).delete(id).await?;

    tracing::info!(%id, removed, "Inventory movement delete requested");
    Ok(StatusCode::NO_CONTENT)
}
