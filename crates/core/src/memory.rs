//! In-memory repositories for service tests.

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use cajachica_shared::types::{MovementId, TransactionId};
use chrono::{NaiveDate, Utc};

use crate::cash::{CashTransaction, CashbookRepository, NewTransaction};
use crate::error::BookkeepingError;
use crate::inventory::{InventoryMovement, InventoryRepository, NewMovement, StockDelta};
use crate::settings::{SettingEntry, SettingsRepository};

/// Store keeping every table in memory, with switches to simulate storage failures.
#[derive(Default)]
pub struct MemoryStore {
    transactions: Mutex<Vec<CashTransaction>>,
    movements: Mutex<Vec<InventoryMovement>>,
    settings: Mutex<BTreeMap<String, String>>,
    calls: Mutex<Vec<&'static str>>,
    fail_carry_over: AtomicBool,
    fail_range: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_carry_over(&self) {
        self.fail_carry_over.store(true, Ordering::SeqCst);
    }

    pub fn fail_range(&self) {
        self.fail_range.store(true, Ordering::SeqCst);
    }

    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    /// Names of the repository methods called so far, in order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.lock().unwrap().len()
    }

    pub fn movement_count(&self) -> usize {
        self.movements.lock().unwrap().len()
    }

    fn record_call(&self, name: &'static str) {
        self.calls.lock().unwrap().push(name);
    }

    fn check(flag: &AtomicBool, message: &str) -> Result<(), BookkeepingError> {
        if flag.load(Ordering::SeqCst) {
            Err(BookkeepingError::storage(message))
        } else {
            Ok(())
        }
    }
}

fn newest_first<T>(rows: &mut [T], date: impl Fn(&T) -> NaiveDate) {
    rows.sort_by(|a, b| date(b).cmp(&date(a)));
}

impl CashbookRepository for MemoryStore {
    async fn list_between(
        &self,
        first_day: NaiveDate,
        last_day: NaiveDate,
    ) -> Result<Vec<CashTransaction>, BookkeepingError> {
        self.record_call("cash.list_between");
        Self::check(&self.fail_range, "range query failed")?;
        let mut rows: Vec<_> = self
            .transactions
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.date >= first_day && t.date <= last_day)
            .cloned()
            .collect();
        newest_first(&mut rows, |t| t.date);
        Ok(rows)
    }

    async fn insert(&self, transaction: NewTransaction) -> Result<CashTransaction, BookkeepingError> {
        self.record_call("cash.insert");
        Self::check(&self.fail_writes, "insert failed")?;
        let stored = CashTransaction {
            id: TransactionId::new(),
            transaction_type: transaction.transaction_type(),
            description: transaction.description().to_string(),
            amount: transaction.amount(),
            date: transaction.date(),
            created_at: Utc::now(),
        };
        self.transactions.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: TransactionId) -> Result<bool, BookkeepingError> {
        self.record_call("cash.delete");
        Self::check(&self.fail_writes, "delete failed")?;
        let mut rows = self.transactions.lock().unwrap();
        let before = rows.len();
        rows.retain(|t| t.id != id);
        Ok(rows.len() != before)
    }
}

impl InventoryRepository for MemoryStore {
    async fn stock_deltas_before(&self, first_day: NaiveDate) -> Result<Vec<StockDelta>, BookkeepingError> {
        self.record_call("inventory.stock_deltas_before");
        Self::check(&self.fail_carry_over, "carry-over query failed")?;
        Ok(self
            .movements
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.date < first_day)
            .map(InventoryMovement::stock_delta)
            .collect())
    }

    async fn list_between(
        &self,
        first_day: NaiveDate,
        last_day: NaiveDate,
    ) -> Result<Vec<InventoryMovement>, BookkeepingError> {
        self.record_call("inventory.list_between");
        Self::check(&self.fail_range, "range query failed")?;
        let mut rows: Vec<_> = self
            .movements
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.date >= first_day && m.date <= last_day)
            .cloned()
            .collect();
        newest_first(&mut rows, |m| m.date);
        Ok(rows)
    }

    async fn insert(&self, movement: NewMovement) -> Result<InventoryMovement, BookkeepingError> {
        self.record_call("inventory.insert");
        Self::check(&self.fail_writes, "insert failed")?;
        let stored = InventoryMovement {
            id: MovementId::new(),
            movement_type: movement.kind().movement_type(),
            subtype: movement.kind().subtype(),
            units: movement.units(),
            description: movement.description().to_string(),
            invoice_number: movement.invoice_number().map(str::to_string),
            date: movement.date(),
            created_at: Utc::now(),
        };
        self.movements.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: MovementId) -> Result<bool, BookkeepingError> {
        self.record_call("inventory.delete");
        Self::check(&self.fail_writes, "delete failed")?;
        let mut rows = self.movements.lock().unwrap();
        let before = rows.len();
        rows.retain(|m| m.id != id);
        Ok(rows.len() != before)
    }
}

impl SettingsRepository for MemoryStore {
    async fn find_value(&self, key: &str) -> Result<Option<String>, BookkeepingError> {
        self.record_call("settings.find_value");
        Self::check(&self.fail_range, "settings query failed")?;
        Ok(self.settings.lock().unwrap().get(key).cloned())
    }

    async fn upsert(&self, entry: SettingEntry) -> Result<(), BookkeepingError> {
        self.record_call("settings.upsert");
        Self::check(&self.fail_writes, "upsert failed")?;
        self.settings
            .lock()
            .unwrap()
            .insert(entry.key().to_string(), entry.value().to_string());
        Ok(())
    }
}
