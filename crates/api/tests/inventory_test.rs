mod common;

use std::collections::BTreeMap;

use axum::http::StatusCode;
use cajachica_db::entities::{
    inventory,
    sea_orm_active_enums::{MovementType, OutSubtype},
};
use chrono::{NaiveDate, Utc};
use sea_orm::{DbErr, Value as DbValue};
use serde_json::json;
use uuid::Uuid;

use common::{affected, app_with, delete, get, mock, post_json};

fn delta(kind: &str, units: i32) -> BTreeMap<&'static str, DbValue> {
    BTreeMap::from([
        ("movement_type", DbValue::from(kind.to_owned())),
        ("units", DbValue::from(units)),
    ])
}

fn movement(
    kind: MovementType,
    subtype: Option<OutSubtype>,
    units: i32,
    invoice: Option<&str>,
    day: u32,
) -> inventory::Model {
    inventory::Model {
        id: Uuid::now_v7(),
        movement_type: kind,
        subtype,
        units,
        description: "Producto".to_owned(),
        invoice_number: invoice.map(str::to_owned),
        date: NaiveDate::from_ymd_opt(2024, 4, day).unwrap(),
        created_at: Utc::now().into(),
    }
}

#[tokio::test]
async fn snapshot_carries_stock_across_empty_months() {
    // January: +50, -10, -5. February and March had no movements.
    let (app, db) = app_with(
        mock()
            .append_query_results([vec![delta("in", 50), delta("out", 10), delta("out", 5)]])
            .append_query_results([vec![movement(MovementType::In, None, 5, None, 3)]]),
    );

    let (status, body) = get(&app, "/api/inventory?month=4&year=2024").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["initialStock"], 35);
    assert_eq!(body["movements"].as_array().unwrap().len(), 1);
    assert_eq!(body["movements"][0]["type"], "in");
    assert_eq!(db.into_transaction_log().len(), 2);
}

#[tokio::test]
async fn summary_breaks_down_outflows() {
    let (app, _db) = app_with(
        mock()
            .append_query_results([vec![delta("in", 40)]])
            .append_query_results([vec![
                movement(MovementType::Out, Some(OutSubtype::Regalia), 2, None, 20),
                movement(MovementType::Out, Some(OutSubtype::Venta), 5, Some("F-1"), 10),
                movement(MovementType::In, None, 10, None, 1),
            ]]),
    );

    let (status, body) = get(&app, "/api/inventory/summary?month=4&year=2024").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "initialStock": 40,
            "totalIn": 10,
            "totalOut": 7,
            "totalVentas": 5,
            "totalRegalias": 2,
            "currentStock": 43
        })
    );
}

#[tokio::test]
async fn carry_over_failure_aborts_before_range_query() {
    let (app, db) = app_with(mock().append_query_errors([DbErr::Custom("timeout".to_owned())]));

    let (status, _) = get(&app, "/api/inventory?month=4&year=2024").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(db.into_transaction_log().len(), 1);
}

#[tokio::test]
async fn outflow_without_subtype_is_rejected() {
    let (app, db) = app_with(mock());

    let (status, body) = post_json(
        &app,
        "/api/inventory",
        &json!({ "type": "out", "units": 3, "description": "Cliente", "date": "2024-04-02" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "error": "Outgoing movements require a subtype (venta or regalia)" })
    );
    assert!(db.into_transaction_log().is_empty());
}

#[tokio::test]
async fn inflow_drops_client_subtype() {
    let stored = movement(MovementType::In, None, 12, Some("F-9"), 2);
    let (app, db) = app_with(mock().append_query_results([vec![stored]]));

    let (status, body) = post_json(
        &app,
        "/api/inventory",
        &json!({
            "type": "in",
            "subtype": "venta",
            "units": 12,
            "description": "Compra",
            "invoice_number": "F-9",
            "date": "2024-04-02"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["subtype"], serde_json::Value::Null);

    let log = db.into_transaction_log();
    let values = log[0].statements()[0].values.clone().unwrap();
    assert!(!values.0.contains(&DbValue::from("venta".to_owned())));
}

#[tokio::test]
async fn non_positive_units_are_rejected() {
    let (app, db) = app_with(mock());

    let (status, _) = post_json(
        &app,
        "/api/inventory",
        &json!({ "type": "in", "units": 0, "description": "Compra", "date": "2024-04-02" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(db.into_transaction_log().is_empty());
}

#[tokio::test]
async fn delete_movement_is_no_content() {
    let (app, _db) = app_with(mock().append_exec_results([affected(0)]));

    let (status, body) = delete(&app, &format!("/api/inventory/{}", Uuid::now_v7())).await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());
}
