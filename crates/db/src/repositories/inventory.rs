//! Inventory movement repository.
//!
//! Besides the month range, this repository serves the carry-over query: the
//! type and units of every movement dated before a given day.

use cajachica_core::BookkeepingError;
use cajachica_core::inventory::{
    InventoryMovement, InventoryRepository as InventoryRepoTrait, MovementType,
    NewMovement, OutSubtype, StockDelta,
};
use cajachica_shared::types::MovementId;
use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use super::storage_error;
use crate::entities::{
    inventory, sea_orm_active_enums::MovementType as DbMovementType,
    sea_orm_active_enums::OutSubtype as DbOutSubtype,
};

/// Inventory repository backed by the `inventory` table.
#[derive(Debug, Clone)]
pub struct InventoryRepository {
    db: DatabaseConnection,
}

impl InventoryRepository {
    /// Creates a new inventory repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromQueryResult)]
struct StockDeltaRow {
    movement_type: DbMovementType,
    units: i32,
}

impl InventoryRepoTrait for InventoryRepository {
    async fn stock_deltas_before(&self, first_day: NaiveDate) -> Result<Vec<StockDelta>, BookkeepingError> {
        let rows = inventory::Entity::find()
            .select_only()
            .column_as(inventory::Column::MovementType, "movement_type")
            .column(inventory::Column::Units)
            .filter(inventory::Column::Date.lt(first_day))
            .into_model::<StockDeltaRow>()
            .all(&self.db)
            .await
            .map_err(storage_error)?;

        Ok(rows
            .into_iter()
            .map(|row| StockDelta {
                movement_type: from_db_type(row.movement_type),
                units: row.units,
            })
            .collect())
    }

    async fn list_between(
        &self,
        first_day: NaiveDate,
        last_day: NaiveDate,
    ) -> Result<Vec<InventoryMovement>, BookkeepingError> {
        let models = inventory::Entity::find()
            .filter(inventory::Column::Date.between(first_day, last_day))
            .order_by_desc(inventory::Column::Date)
            .order_by_desc(inventory::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(storage_error)?;

        Ok(models.into_iter().map(to_domain).collect())
    }

    async fn insert(&self, movement: NewMovement) -> Result<InventoryMovement, BookkeepingError> {
        let kind = movement.kind();
        let active_model = inventory::ActiveModel {
            id: Set(MovementId::new().into_inner()),
            movement_type: Set(to_db_type(kind.movement_type())),
            subtype: Set(kind.subtype().map(to_db_subtype)),
            units: Set(movement.units()),
            description: Set(movement.description().to_owned()),
            invoice_number: Set(movement.invoice_number().map(str::to_owned)),
            date: Set(movement.date()),
            created_at: Set(Utc::now().into()),
        };

        let model = active_model.insert(&self.db).await.map_err(storage_error)?;
        tracing::debug!(id = %model.id, units = model.units, "Inventory movement recorded");

        Ok(to_domain(model))
    }

    async fn delete(&self, id: MovementId) -> Result<bool, BookkeepingError> {
        let result = inventory::Entity::delete_by_id(id.into_inner())
            .exec(&self.db)
            .await
            .map_err(storage_error)?;

        Ok(result.rows_affected > 0)
    }
}

const fn to_db_type(kind: MovementType) -> DbMovementType {
    match kind {
        MovementType::In => DbMovementType::In,
        MovementType::Out => DbMovementType::Out,
    }
}

const fn from_db_type(kind: DbMovementType) -> MovementType {
    match kind {
        DbMovementType::In => MovementType::In,
        DbMovementType::Out => MovementType::Out,
    }
}

const fn to_db_subtype(subtype: OutSubtype) -> DbOutSubtype {
    match subtype {
        OutSubtype::Venta => DbOutSubtype::Venta,
        OutSubtype::Regalia => DbOutSubtype::Regalia,
    }
}

const fn from_db_subtype(subtype: DbOutSubtype) -> OutSubtype {
    match subtype {
        DbOutSubtype::Venta => OutSubtype::Venta,
        DbOutSubtype::Regalia => OutSubtype::Regalia,
    }
}

fn to_domain(model: inventory::Model) -> InventoryMovement {
    InventoryMovement {
        id: MovementId::from_uuid(model.id),
        movement_type: from_db_type(model.movement_type),
        subtype: model.subtype.map(from_db_subtype),
        units: model.units,
        description: model.description,
        invoice_number: model.invoice_number,
        date: model.date,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
