//! Request extractors.
//!
//! Handlers list [`Storage`] first so a missing database is reported before
//! any query string or body is looked at.

use std::str::FromStr;

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
};
use cajachica_core::Period;
use cajachica_shared::AppError;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, de::DeserializeOwned};

use crate::{AppState, error::ApiError};

/// Database handle, or 503 when storage is not configured.
pub struct Storage(pub DatabaseConnection);

impl FromRequestParts<AppState> for Storage {
    type Rejection = ApiError;

    async fn from_request_parts(_parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        state
            .db
            .as_deref()
            .cloned()
            .map(Storage)
            .ok_or_else(|| ApiError(AppError::storage_not_configured()))
    }
}

#[derive(Debug, Deserialize)]
struct RawPeriod {
    month: Option<String>,
    year: Option<String>,
}

/// `?month=M&year=Y`, resolved to a calendar month.
pub struct MonthQuery(pub Period);

impl<S> FromRequestParts<S> for MonthQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(raw) = Query::<RawPeriod>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError(AppError::Validation(rejection.body_text())))?;

        let period = Period::from_query(raw.month.as_deref(), raw.year.as_deref())?;
        Ok(Self(period))
    }
}

/// JSON body whose rejections use the `{"error": message}` shape.
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError(AppError::Validation(rejection.body_text())))?;
        Ok(Self(value))
    }
}

/// Parses a record id taken from the path.
pub fn parse_id<T: FromStr>(raw: &str) -> Result<T, ApiError> {
    raw.parse()
        .map_err(|_| ApiError(AppError::Validation(format!("Invalid id: {raw}"))))
}
