//! Petty-cash ledger ("Caja Chica").
//!
//! Income and expense records are insert-or-delete only. A month's view is the
//! list of records dated inside the period plus totals reduced from that list.

pub mod service;
pub mod types;


pub use service::{CashbookRepository, CashbookService};
pub use types::{CashSummary, CashTransaction, NewTransaction, TransactionDraft, TransactionType};
