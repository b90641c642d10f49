//! Product inventory ("Inventario").
//!
//! Stock movements are insert-or-delete only. A month's view starts from the
//! carry-over of every movement dated before the month, then lists the
//! movements inside it.

pub mod carry_over;
pub mod service;
pub mod types;

#[cfg(test)]
mod carry_over_props;

pub use carry_over::carry_over;
pub use service::{InventoryRepository, InventoryService};
pub use types::{
    InventoryMovement, InventorySnapshot, InventorySummary, MovementDraft, MovementKind,
    MovementType, NewMovement, OutSubtype, StockDelta,
};
