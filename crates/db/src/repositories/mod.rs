//! Repository implementations of the core storage traits.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod inventory;
pub mod settings;
pub mod transaction;

pub use inventory::InventoryRepository;
pub use settings::SettingsRepository;
pub use transaction::TransactionRepository;

use cajachica_core::BookkeepingError;
use sea_orm::DbErr;

/// Storage failures are surfaced with the driver's message.
pub(crate) fn storage_error(err: DbErr) -> BookkeepingError {
    tracing::error!(error = %err, "Database operation failed");
    BookkeepingError::storage(err)
}
