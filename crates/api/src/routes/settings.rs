//! Key/value settings routes.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Path,
    routing::{get, post},
};
use cajachica_core::settings::{SettingDraft, SettingsService};
use cajachica_db::SettingsRepository;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{
    AppState,
    error::ApiError,
    extractors::{ApiJson, Storage},
};

/// Creates the settings routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/settings", post(save_setting))
        .route("/settings/{key}", get(get_setting))
}

/// Request body for saving a setting.
#[derive(Debug, Deserialize)]
pub struct SaveSettingRequest {
    /// Setting key.
    pub key: Option<String>,
    /// Setting value.
    pub value: Option<String>,
}

fn service(db: sea_orm::DatabaseConnection) -> SettingsService<SettingsRepository> {
    SettingsService::new(Arc::new(SettingsRepository::new(db)))
}

/// GET `/settings/{key}` - `{"value": ...}`, `null` for unknown keys.
async fn get_setting(Storage(db): Storage, Path(key): Path<String>) -> Result<Json<Value>, ApiError> {
    let value = service(db).get(&key).await?;
    Ok(Json(json!({ "value": value })))
}

/// POST `/settings` - Insert or overwrite a setting.
async fn save_setting(
    Storage(db): Storage,
    ApiJson(payload): ApiJson<SaveSettingRequest>,
) -> Result<Json<Value>, ApiError> {
    let entry = service(db)
        .put(SettingDraft {
            key: payload.key,
            value: payload.value,
        })
        .await?;

    tracing::info!(key = entry.key(), "Setting saved");
    Ok(Json(json!({ "success": true })))
}
