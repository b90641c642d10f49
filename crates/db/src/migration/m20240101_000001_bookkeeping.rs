//! Bookkeeping schema: petty-cash transactions, inventory movements and settings.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(BOOKKEEPING_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(
            "DROP TABLE IF EXISTS settings; DROP TABLE IF EXISTS inventory; DROP TABLE IF EXISTS transactions;",
        )
        .await?;
        Ok(())
    }
}

const BOOKKEEPING_SQL: &str = r"
-- Petty-cash ledger
CREATE TABLE transactions (
    id UUID PRIMARY KEY,
    type VARCHAR(16) NOT NULL,
    description TEXT NOT NULL,
    amount NUMERIC(14, 2) NOT NULL,
    date DATE NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_transactions_type CHECK (type IN ('income', 'expense')),
    CONSTRAINT chk_transactions_amount CHECK (amount > 0)
);

-- Month browsing filters and orders by date
CREATE INDEX idx_transactions_date ON transactions(date DESC, created_at DESC);

-- Product stock movements
CREATE TABLE inventory (
    id UUID PRIMARY KEY,
    type VARCHAR(16) NOT NULL,
    subtype VARCHAR(16),
    units INTEGER NOT NULL,
    description TEXT NOT NULL,
    invoice_number TEXT,
    date DATE NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_inventory_type CHECK (type IN ('in', 'out')),
    CONSTRAINT chk_inventory_subtype CHECK (
        (type = 'in' AND subtype IS NULL)
        OR (type = 'out' AND subtype IN ('venta', 'regalia'))
    ),
    CONSTRAINT chk_inventory_units CHECK (units > 0),
    CONSTRAINT chk_inventory_regalia_invoice CHECK (subtype IS DISTINCT FROM 'regalia' OR invoice_number IS NULL)
);

-- Both the month range and the carry-over (date < first day) use this
CREATE INDEX idx_inventory_date ON inventory(date DESC, created_at DESC);

-- Key/value settings, last write wins
CREATE TABLE settings (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
";
