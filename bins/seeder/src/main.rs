//! Demo data seeder for Caja Chica development.
//!
//! Seeds three months of petty-cash transactions and inventory movements,
//! ending with the current month, so month browsing and the carry-over have
//! something to show. Records go through the same validation as the API.
//!
//! Usage: cargo run --bin seeder

use std::sync::Arc;

use anyhow::Context;
use cajachica_core::cash::{CashbookService, TransactionDraft, TransactionType};
use cajachica_core::inventory::{InventoryService, MovementDraft, MovementType, OutSubtype};
use cajachica_db::entities::{inventory, transactions};
use cajachica_db::{InventoryRepository, TransactionRepository};
use cajachica_shared::AppConfig;
use chrono::{Datelike, Months, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, EntityTrait};

/// (day, type, description, amount in cents)
const CASH_ROWS: &[(u32, TransactionType, &str, i64)] = &[
    (1, TransactionType::Income, "Reposición de fondo", 50_000),
    (3, TransactionType::Expense, "Papelería", 1_250),
    (8, TransactionType::Expense, "Taxi a banco", 800),
    (15, TransactionType::Expense, "Café oficina", 2_345),
    (22, TransactionType::Expense, "Mensajería", 1_500),
];

/// (day, type, subtype, units, description, invoice)
const STOCK_ROWS: &[(u32, MovementType, Option<OutSubtype>, i64, &str, Option<&str>)] = &[
    (2, MovementType::In, None, 120, "Compra a proveedor", Some("OC-001")),
    (10, MovementType::Out, Some(OutSubtype::Venta), 35, "Venta distribuidor", Some("F-1001")),
    (18, MovementType::Out, Some(OutSubtype::Regalia), 4, "Muestras evento", None),
    (25, MovementType::Out, Some(OutSubtype::Venta), 20, "Venta tienda", Some("F-1002")),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    println!("Connecting to database...");
    let db = cajachica_db::connect(&config.database)
        .await
        .context("Failed to connect to database")?
        .context("DATABASE_URL must be set in environment")?;

    let today = Utc::now().date_naive();
    let months: Vec<NaiveDate> = (0..3)
        .rev()
        .filter_map(|back| first_of_month(today).checked_sub_months(Months::new(back)))
        .collect();

    println!("Seeding petty-cash transactions...");
    seed_transactions(&db, &months).await?;

    println!("Seeding inventory movements...");
    seed_inventory(&db, &months).await?;

    println!("Seeding complete!");
    Ok(())
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Seeds transactions unless the table already has rows.
async fn seed_transactions(db: &DatabaseConnection, months: &[NaiveDate]) -> anyhow::Result<()> {
    if transactions::Entity::find().one(db).await?.is_some() {
        println!("  Transactions already present, skipping...");
        return Ok(());
    }

    let service = CashbookService::new(Arc::new(TransactionRepository::new(db.clone())));
    let mut created = 0;

    for month in months {
        for &(day, kind, description, cents) in CASH_ROWS {
            let Some(date) = month.with_day(day) else { continue };
            service
                .record(TransactionDraft {
                    transaction_type: Some(kind),
                    description: Some(description.to_owned()),
                    amount: Some(Decimal::new(cents, 2)),
                    date: Some(date),
                })
                .await
                .with_context(|| format!("Failed to insert transaction dated {date}"))?;
            created += 1;
        }
    }

    println!("  Created {created} transactions");
    Ok(())
}

/// Seeds inventory movements unless the table already has rows.
async fn seed_inventory(db: &DatabaseConnection, months: &[NaiveDate]) -> anyhow::Result<()> {
    if inventory::Entity::find().one(db).await?.is_some() {
        println!("  Inventory already present, skipping...");
        return Ok(());
    }

    let service = InventoryService::new(Arc::new(InventoryRepository::new(db.clone())));
    let mut created = 0;

    for month in months {
        for &(day, kind, subtype, units, description, invoice) in STOCK_ROWS {
            let Some(date) = month.with_day(day) else { continue };
            service
                .record(MovementDraft {
                    movement_type: Some(kind),
                    subtype,
                    units: Some(units),
                    description: Some(description.to_owned()),
                    invoice_number: invoice.map(str::to_owned),
                    date: Some(date),
                })
                .await
                .with_context(|| format!("Failed to insert movement dated {date}"))?;
            created += 1;
        }
    }

    println!("  Created {created} inventory movements");
    Ok(())
}
