//! Cash ledger service.

use std::future::Future;
use std::sync::Arc;

use cajachica_shared::types::TransactionId;
use chrono::NaiveDate;

use super::types::{CashSummary, CashTransaction, NewTransaction, TransactionDraft};
use crate::error::BookkeepingError;
use crate::period::Period;

/// Repository trait for cash ledger persistence.
///
/// This trait is implemented by the db crate to provide actual database operations.
pub trait CashbookRepository: Send + Sync {
    /// Lists transactions dated within `[first_day, last_day]`, newest date first.
    fn list_between(
        &self,
        first_day: NaiveDate,
        last_day: NaiveDate,
    ) -> impl Future<Output = Result<Vec<CashTransaction>, BookkeepingError>> + Send;

    /// Inserts a validated transaction and returns the stored record.
    fn insert(
        &self,
        transaction: NewTransaction,
    ) -> impl Future<Output = Result<CashTransaction, BookkeepingError>> + Send;

    /// Deletes by id. Returns whether a row was removed.
    fn delete(
        &self,
        id: TransactionId,
    ) -> impl Future<Output = Result<bool, BookkeepingError>> + Send;
}

/// Cash ledger service for month browsing and mutations.
pub struct CashbookService<R: CashbookRepository> {
    repo: Arc<R>,
}

impl<R: CashbookRepository> CashbookService<R> {
    /// Create a new cash ledger service.
    #[must_use]
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Lists the transactions of a month, newest date first.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the query fails.
    pub async fn list_period(&self, period: &Period) -> Result<Vec<CashTransaction>, BookkeepingError> {
        let (first_day, last_day) = period.bounds();
        self.repo.list_between(first_day, last_day).await
    }

    /// Lists the transactions of a month together with their totals.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the query fails.
    pub async fn summarize_period(
        &self,
        period: &Period,
    ) -> Result<(Vec<CashTransaction>, CashSummary), BookkeepingError> {
        let transactions = self.list_period(period).await?;
        let summary = CashSummary::from_transactions(&transactions);
        Ok((transactions, summary))
    }

    /// Validates and records a new transaction.
    ///
    /// Nothing is persisted when validation fails.
    ///
    /// # Errors
    ///
    /// Returns a validation error for bad input, or a storage error.
    pub async fn record(&self, draft: TransactionDraft) -> Result<CashTransaction, BookkeepingError> {
        let transaction = NewTransaction::try_from(draft)?;
        self.repo.insert(transaction).await
    }

    /// Deletes a transaction. Deleting an unknown id is not an error.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the delete fails.
    pub async fn delete(&self, id: TransactionId) -> Result<bool, BookkeepingError> {
        self.repo.delete(id).await
    }
}
