//! Petty-cash transaction repository.

use cajachica_core::BookkeepingError;
use cajachica_core::cash::{
    CashTransaction, CashbookRepository, NewTransaction, TransactionType,
};
use cajachica_shared::types::TransactionId;
use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::storage_error;
use crate::entities::{sea_orm_active_enums::CashType, transactions};

/// Transaction repository backed by the `transactions` table.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    db: DatabaseConnection,
}

impl TransactionRepository {
    /// Creates a new transaction repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl CashbookRepository for TransactionRepository {
    async fn list_between(
        &self,
        first_day: NaiveDate,
        last_day: NaiveDate,
    ) -> Result<Vec<CashTransaction>, BookkeepingError> {
        let models = transactions::Entity::find()
            .filter(transactions::Column::Date.between(first_day, last_day))
            .order_by_desc(transactions::Column::Date)
            .order_by_desc(transactions::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(storage_error)?;

        Ok(models.into_iter().map(to_domain).collect())
    }

    async fn insert(&self, transaction: NewTransaction) -> Result<CashTransaction, BookkeepingError> {
        let active_model = transactions::ActiveModel {
            id: Set(TransactionId::new().into_inner()),
            transaction_type: Set(to_db_type(transaction.transaction_type())),
            description: Set(transaction.description().to_owned()),
            amount: Set(transaction.amount()),
            date: Set(transaction.date()),
            created_at: Set(Utc::now().into()),
        };

        let model = active_model.insert(&self.db).await.map_err(storage_error)?;
        tracing::debug!(id = %model.id, "Transaction recorded");

        Ok(to_domain(model))
    }

    async fn delete(&self, id: TransactionId) -> Result<bool, BookkeepingError> {
        let result = transactions::Entity::delete_by_id(id.into_inner())
            .exec(&self.db)
            .await
            .map_err(storage_error)?;

        Ok(result.rows_affected > 0)
    }
}

const fn to_db_type(kind: TransactionType) -> CashType {
    match kind {
        TransactionType::Income => CashType::Income,
        TransactionType::Expense => CashType::Expense,
    }
}

fn to_domain(model: transactions::Model) -> CashTransaction {
    CashTransaction {
        id: TransactionId::from_uuid(model.id),
        transaction_type: match model.transaction_type {
            CashType::Income => TransactionType::Income,
            CashType::Expense => TransactionType::Expense,
        },
        description: model.description,
        amount: model.amount,
        date: model.date,
        created_at: model.created_at.with_timezone(&Utc),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cajachica_core::cash::TransactionDraft;
    use rust_decimal_macros::dec;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};
    use uuid::Uuid;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn row(kind: CashType, amount: rust_decimal::Decimal, date: NaiveDate) -> transactions::Model {
        transactions::Model {
            id: Uuid::now_v7(),
            transaction_type: kind,
            description: "Caja".to_owned(),
            amount,
            date,
            created_at: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_list_between_maps_rows_in_order() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                row(CashType::Expense, dec!(4.50), day(20)),
                row(CashType::Income, dec!(100.00), day(1)),
            ]])
            .into_connection();
        let repo = TransactionRepository::new(db.clone());

        let listed = repo.list_between(day(1), day(31)).await.unwrap();

        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].transaction_type, TransactionType::Expense);
        assert_eq!(listed[0].amount, dec!(4.50));
        assert_eq!(listed[1].transaction_type, TransactionType::Income);

        let log = db.into_transaction_log();
        assert_eq!(log.len(), 1);
        let sql = &log[0].statements()[0].sql;
        assert!(sql.contains("BETWEEN"));
        assert!(sql.contains("ORDER BY"));
    }

    #[tokio::test]
    async fn test_insert_returns_stored_row() {
        let stored = row(CashType::Income, dec!(25.00), day(3));
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored.clone()]])
            .into_connection();
        let repo = TransactionRepository::new(db);

        let draft = TransactionDraft {
            transaction_type: Some(TransactionType::Income),
            description: Some("Caja".to_owned()),
            amount: Some(dec!(25)),
            date: Some(day(3)),
        };
        let created = repo
            .insert(NewTransaction::try_from(draft).unwrap())
            .await
            .unwrap();

        assert_eq!(created.id.into_inner(), stored.id);
        assert_eq!(created.amount, dec!(25.00));
        assert_eq!(created.date, day(3));
    }

    #[tokio::test]
    async fn test_delete_reports_affected_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ])
            .into_connection();
        let repo = TransactionRepository::new(db);
        let id = TransactionId::new();

        assert!(repo.delete(id).await.unwrap());
        assert!(!repo.delete(id).await.unwrap());
    }

    #[tokio::test]
    async fn test_driver_error_becomes_storage_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_owned())])
            .into_connection();
        let repo = TransactionRepository::new(db);

        let err = repo.list_between(day(1), day(31)).await.unwrap_err();

        match err {
            BookkeepingError::Storage(msg) => assert!(msg.contains("connection reset")),
            other => panic!("expected storage error, got {other:?}"),
        }
    }
}
