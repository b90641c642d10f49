//! Inventory domain types.

use cajachica_shared::types::MovementId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::BookkeepingError;

/// Direction of a stock movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementType {
    /// Units entering stock.
    In,
    /// Units leaving stock.
    Out,
}

impl MovementType {
    /// Wire and storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
        }
    }
}

/// Disposition of an outgoing movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutSubtype {
    /// Sold, normally backed by an invoice.
    Venta,
    /// Given away; never carries an invoice.
    Regalia,
}

impl OutSubtype {
    /// Wire and storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Venta => "venta",
            Self::Regalia => "regalia",
        }
    }
}

/// Validated movement kind: an outflow always knows its disposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovementKind {
    /// Stock entering.
    StockIn,
    /// Stock leaving, with its disposition.
    StockOut(OutSubtype),
}

impl MovementKind {
    /// Flat movement type.
    #[must_use]
    pub const fn movement_type(self) -> MovementType {
        match self {
            Self::StockIn => MovementType::In,
            Self::StockOut(_) => MovementType::Out,
        }
    }

    /// Subtype, present only on outflows.
    #[must_use]
    pub const fn subtype(self) -> Option<OutSubtype> {
        match self {
            Self::StockIn => None,
            Self::StockOut(subtype) => Some(subtype),
        }
    }
}

/// A stored inventory movement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryMovement {
    /// Storage-assigned id.
    pub id: MovementId,
    /// In or out.
    #[serde(rename = "type")]
    pub movement_type: MovementType,
    /// Disposition; `None` for inflows.
    pub subtype: Option<OutSubtype>,
    /// Positive unit count.
    pub units: i32,
    /// Free text.
    pub description: String,
    /// Invoice or order number; never set on giveaways.
    pub invoice_number: Option<String>,
    /// Calendar date of the movement.
    pub date: NaiveDate,
    /// Storage-assigned creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl InventoryMovement {
    /// The projection used for carry-over.
    #[must_use]
    pub const fn stock_delta(&self) -> StockDelta {
        StockDelta {
            movement_type: self.movement_type,
            units: self.units,
        }
    }
}

/// Type and units of a movement, all that the running stock needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockDelta {
    /// In or out.
    pub movement_type: MovementType,
    /// Unit count.
    pub units: i32,
}

impl StockDelta {
    /// `+units` for inflows, `-units` for outflows.
    #[must_use]
    pub fn signed_units(self) -> i64 {
        let units = i64::from(self.units);
        match self.movement_type {
            MovementType::In => units,
            MovementType::Out => -units,
        }
    }
}

/// Unvalidated client input for a new movement.
#[derive(Debug, Clone, Default)]
pub struct MovementDraft {
    /// In or out.
    pub movement_type: Option<MovementType>,
    /// Disposition, required for outflows.
    pub subtype: Option<OutSubtype>,
    /// Unit count.
    pub units: Option<i64>,
    /// Description.
    pub description: Option<String>,
    /// Invoice or order number.
    pub invoice_number: Option<String>,
    /// Date.
    pub date: Option<NaiveDate>,
}

/// A validated and normalized movement, ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMovement {
    kind: MovementKind,
    units: i32,
    description: String,
    invoice_number: Option<String>,
    date: NaiveDate,
}

impl NewMovement {
    /// Movement kind.
    #[must_use]
    pub const fn kind(&self) -> MovementKind {
        self.kind
    }

    /// Positive unit count.
    #[must_use]
    pub const fn units(&self) -> i32 {
        self.units
    }

    /// Trimmed, non-empty description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Invoice number, absent for giveaways.
    #[must_use]
    pub fn invoice_number(&self) -> Option<&str> {
        self.invoice_number.as_deref()
    }

    /// Movement date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }
}

impl TryFrom<MovementDraft> for NewMovement {
    type Error = BookkeepingError;

    fn try_from(draft: MovementDraft) -> Result<Self, Self::Error> {
        let movement_type = draft
            .movement_type
            .ok_or(BookkeepingError::MissingField("type"))?;

        let units = draft.units.ok_or(BookkeepingError::MissingField("units"))?;
        if units <= 0 {
            return Err(BookkeepingError::NonPositiveUnits);
        }
        let units = i32::try_from(units).map_err(|_| BookkeepingError::UnitsOutOfRange(i32::MAX))?;

        let description = draft
            .description
            .ok_or(BookkeepingError::MissingField("description"))?
            .trim()
            .to_string();
        if description.is_empty() {
            return Err(BookkeepingError::EmptyDescription);
        }

        let date = draft.date.ok_or(BookkeepingError::MissingField("date"))?;

        // Inflows drop any client subtype; outflows must carry one.
        let kind = match movement_type {
            MovementType::In => MovementKind::StockIn,
            MovementType::Out => {
                MovementKind::StockOut(draft.subtype.ok_or(BookkeepingError::MissingSubtype)?)
            }
        };

        let invoice_number = match kind {
            MovementKind::StockOut(OutSubtype::Regalia) => None,
            _ => draft
                .invoice_number
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
        };

        Ok(Self {
            kind,
            units,
            description,
            invoice_number,
            date,
        })
    }
}

/// Opening stock plus the movements of a month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySnapshot {
    /// Signed sum of every movement dated before the month.
    pub initial_stock: i64,
    /// Movements inside the month, newest date first.
    pub movements: Vec<InventoryMovement>,
}

/// Stock totals for a month.
///
/// `current_stock == initial_stock + total_in - total_out` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySummary {
    /// Carry-over from previous months.
    pub initial_stock: i64,
    /// Units received during the month.
    pub total_in: i64,
    /// Units shipped during the month.
    pub total_out: i64,
    /// Units sold during the month.
    pub total_ventas: i64,
    /// Units given away during the month.
    pub total_regalias: i64,
    /// Stock at the end of the month.
    pub current_stock: i64,
}

impl InventorySummary {
    /// Reduces a snapshot into totals.
    #[must_use]
    pub fn from_snapshot(snapshot: &InventorySnapshot) -> Self {
        let mut summary = Self {
            initial_stock: snapshot.initial_stock,
            total_in: 0,
            total_out: 0,
            total_ventas: 0,
            total_regalias: 0,
            current_stock: 0,
        };

        for movement in &snapshot.movements {
            let units = i64::from(movement.units);
            match (movement.movement_type, movement.subtype) {
                (MovementType::In, _) => summary.total_in += units,
                (MovementType::Out, subtype) => {
                    summary.total_out += units;
                    match subtype {
                        Some(OutSubtype::Venta) => summary.total_ventas += units,
                        Some(OutSubtype::Regalia) => summary.total_regalias += units,
                        None => {}
                    }
                }
            }
        }

        summary.current_stock = summary.initial_stock + summary.total_in - summary.total_out;
        summary
    }
}
