//! String-backed enums stored in text columns.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Cash transaction direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum CashType {
    /// Money in.
    #[sea_orm(string_value = "income")]
    Income,
    /// Money out.
    #[sea_orm(string_value = "expense")]
    Expense,
}

/// Inventory movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum MovementType {
    /// Stock received.
    #[sea_orm(string_value = "in")]
    In,
    /// Stock shipped.
    #[sea_orm(string_value = "out")]
    Out,
}

/// Disposition of an outgoing movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum OutSubtype {
    /// Sale.
    #[sea_orm(string_value = "venta")]
    Venta,
    /// Giveaway.
    #[sea_orm(string_value = "regalia")]
    Regalia,
}
