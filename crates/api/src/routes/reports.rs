//! Monthly report documents, the input of the PDF renderer.

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::get};
use cajachica_core::cash::CashbookService;
use cajachica_core::inventory::InventoryService;
use cajachica_core::report::{self, ReportContext, ReportDocument};
use cajachica_core::settings::{LOGO_KEY, SettingsService};
use cajachica_db::{InventoryRepository, SettingsRepository, TransactionRepository};
use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    AppState,
    error::ApiError,
    extractors::{MonthQuery, Storage},
};

/// Creates the report routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/reports/transactions", get(transactions_report))
        .route("/reports/inventory", get(inventory_report))
}

async fn context(state: &AppState, db: DatabaseConnection) -> Result<ReportContext, ApiError> {
    let logo = SettingsService::new(Arc::new(SettingsRepository::new(db)))
        .get(LOGO_KEY)
        .await?;

    Ok(ReportContext {
        issued_on: Some(Utc::now().date_naive()),
        organization: state.organization_name.clone(),
        logo,
    })
}

/// GET `/reports/transactions?month=M&year=Y` - Petty-cash report.
async fn transactions_report(
    State(state): State<AppState>,
    Storage(db): Storage,
    MonthQuery(period): MonthQuery,
) -> Result<Json<ReportDocument>, ApiError> {
    let service = CashbookService::new(Arc::new(TransactionRepository::new(db.clone())));
    let (transactions, summary) = service.summarize_period(&period).await?;
    let context = context(&state, db).await?;

    Ok(Json(report::cash_report(&period, &transactions, &summary, &context)))
}

/// GET `/reports/inventory?month=M&year=Y` - Inventory report.
async fn inventory_report(
    State(state): State<AppState>,
    Storage(db): Storage,
    MonthQuery(period): MonthQuery,
) -> Result<Json<ReportDocument>, ApiError> {
    let service = InventoryService::new(Arc::new(InventoryRepository::new(db.clone())));
    let (snapshot, summary) = service.summarize_period(&period).await?;
    let context = context(&state, db).await?;

    Ok(Json(report::inventory_report(&period, &snapshot, &summary, &context)))
}
