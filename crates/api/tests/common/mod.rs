//! Shared helpers for the HTTP tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use cajachica_api::{AppState, create_router};
use http_body_util::BodyExt;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, MockExecResult};
use serde_json::Value;
use tower::util::ServiceExt;

pub const BODY_LIMIT: usize = 64 * 1024;

/// Router without a database.
pub fn app_without_storage() -> Router {
    create_router(
        AppState {
            db: None,
            environment: "test".to_owned(),
            organization_name: None,
        },
        BODY_LIMIT,
    )
}

/// Router over a mock database; keep the returned connection to inspect its log.
pub fn app_with(mock: MockDatabase) -> (Router, DatabaseConnection) {
    let db = mock.into_connection();
    let app = create_router(
        AppState {
            db: Some(Arc::new(db.clone())),
            environment: "test".to_owned(),
            organization_name: None,
        },
        BODY_LIMIT,
    );
    (app, db)
}

pub fn mock() -> MockDatabase {
    MockDatabase::new(DatabaseBackend::Postgres)
}

pub fn affected(rows: u64) -> MockExecResult {
    MockExecResult {
        last_insert_id: 0,
        rows_affected: rows,
    }
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

/// Sends a request and decodes the body as JSON (`Null` when empty).
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
