//! Petty-cash transaction routes.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    routing::{delete, get},
};
use cajachica_core::cash::{
    CashSummary, CashTransaction, CashbookService, TransactionDraft, TransactionType,
};
use cajachica_db::TransactionRepository;
use cajachica_shared::types::TransactionId;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;
use serde::Deserialize;

use crate::{
    AppState,
    error::ApiError,
    extractors::{ApiJson, MonthQuery, Storage, parse_id},
};

/// Creates the transaction routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/transactions", get(list_transactions).post(create_transaction))
        .route("/transactions/summary", get(transaction_summary))
        .route("/transactions/{id}", delete(delete_transaction))
}

/// Request body for creating a transaction.
///
/// Every field is optional here so that missing fields are reported with
/// the same message shape as the other validation failures.
#[derive(Debug, Deserialize)]
pub struct CreateTransactionRequest {
    /// `income` or `expense`.
    #[serde(rename = "type")]
    pub transaction_type: Option<TransactionType>,
    /// Description.
    pub description: Option<String>,
    /// Amount, as a JSON number or string.
    pub amount: Option<Decimal>,
    /// Date (YYYY-MM-DD).
    pub date: Option<NaiveDate>,
}

impl From<CreateTransactionRequest> for TransactionDraft {
    fn from(req: CreateTransactionRequest) -> Self {
        Self {
            transaction_type: req.transaction_type,
            description: req.description,
            amount: req.amount,
            date: req.date,
        }
    }
}

fn service(db: DatabaseConnection) -> CashbookService<TransactionRepository> {
    CashbookService::new(Arc::new(TransactionRepository::new(db)))
}

/// GET `/transactions?month=M&year=Y` - The month's transactions, newest date first.
async fn list_transactions(
    Storage(db): Storage,
    MonthQuery(period): MonthQuery,
) -> Result<Json<Vec<CashTransaction>>, ApiError> {
    let transactions = service(db).list_period(&period).await?;
    Ok(Json(transactions))
}

/// GET `/transactions/summary?month=M&year=Y` - Totals for the month.
async fn transaction_summary(
    Storage(db): Storage,
    MonthQuery(period): MonthQuery,
) -> Result<Json<CashSummary>, ApiError> {
    let (_, summary) = service(db).summarize_period(&period).await?;
    Ok(Json(summary))
}

/// POST `/transactions` - Validate and record a transaction.
async fn create_transaction(
    Storage(db): Storage,
    ApiJson(payload): ApiJson<CreateTransactionRequest>,
) -> Result<Json<CashTransaction>, ApiError> {
    let created = service(db).record(payload.into()).await?;

    tracing::info!(
        id = %created.id,
        kind = created.transaction_type.as_str(),
        amount = %created.amount,
        "Transaction created"
    );
    Ok(Json(created))
}

/// DELETE `/transactions/{id}` - Remove a transaction. Unknown ids also yield 204.
async fn delete_transaction(
    Storage(db): Storage,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id: TransactionId = parse_id(&id)?;
    let removed = service(db).delete(id).await?;

    tracing::info!(%id, removed, "Transaction delete requested");
    Ok(StatusCode::NO_CONTENT)
}
