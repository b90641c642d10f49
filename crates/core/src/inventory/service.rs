//! Inventory service.

use std::future::Future;
use std::sync::Arc;

use cajachica_shared::types::MovementId;
use chrono::NaiveDate;

use super::carry_over::carry_over;
use super::types::{
    InventoryMovement, InventorySnapshot, InventorySummary, MovementDraft, NewMovement, StockDelta,
};
use crate::error::BookkeepingError;
use crate::period::Period;

/// Repository trait for inventory persistence.
///
/// This trait is implemented by the db crate to provide actual database operations.
pub trait InventoryRepository: Send + Sync {
    /// Type and units of every movement dated strictly before `first_day`.
    fn stock_deltas_before(
        &self,
        first_day: NaiveDate,
    ) -> impl Future<Output = Result<Vec<StockDelta>, BookkeepingError>> + Send;

    /// Lists movements dated within `[first_day, last_day]`, newest date first.
    fn list_between(
        &self,
        first_day: NaiveDate,
        last_day: NaiveDate,
    ) -> impl Future<Output = Result<Vec<InventoryMovement>, BookkeepingError>> + Send;

    /// Inserts a validated movement and returns the stored record.
    fn insert(
        &self,
        movement: NewMovement,
    ) -> impl Future<Output = Result<InventoryMovement, BookkeepingError>> + Send;

    /// Deletes by id. Returns whether a row was removed.
    fn delete(&self, id: MovementId) -> impl Future<Output = Result<bool, BookkeepingError>> + Send;
}

/// Inventory service for month browsing and mutations.
pub struct InventoryService<R: InventoryRepository> {
    repo: Arc<R>,
}

impl<R: InventoryRepository> InventoryService<R> {
    /// Create a new inventory service.
    #[must_use]
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Opening stock and movements of a month.
    ///
    /// The carry-over query runs first; if it fails the in-range query is never
    /// issued. The two reads are not a consistent snapshot: a movement inserted
    /// between them may show up in either or neither.
    ///
    /// # Errors
    ///
    /// Returns a storage error if either query fails.
    pub async fn snapshot(&self, period: &Period) -> Result<InventorySnapshot, BookkeepingError> {
        let (first_day, last_day) = period.bounds();

        let deltas = self.repo.stock_deltas_before(first_day).await?;
        let initial_stock = carry_over(deltas);

        let movements = self.repo.list_between(first_day, last_day).await?;

        Ok(InventorySnapshot {
            initial_stock,
            movements,
        })
    }

    /// Snapshot of a month together with its totals.
    ///
    /// # Errors
    ///
    /// Returns a storage error if either query fails.
    pub async fn summarize_period(
        &self,
        period: &Period,
    ) -> Result<(InventorySnapshot, InventorySummary), BookkeepingError> {
        let snapshot = self.snapshot(period).await?;
        let summary = InventorySummary::from_snapshot(&snapshot);
        Ok((snapshot, summary))
    }

    /// Validates, normalizes, and records a new movement.
    ///
    /// Nothing is persisted when validation fails.
    ///
    /// # Errors
    ///
    /// Returns a validation error for bad input, or a storage error.
    pub async fn record(&self, draft: MovementDraft) -> Result<InventoryMovement, BookkeepingError> {
        let movement = NewMovement::try_from(draft)?;
        self.repo.insert(movement).await
    }

    /// Deletes a movement. Deleting an unknown id is not an error.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the delete fails.
    pub async fn delete(&self, id: MovementId) -> Result<bool, BookkeepingError> {
        self.repo.delete(id).await
    }
}
