//! Core bookkeeping logic for Caja Chica.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and period calculations live here; the
//! storage layer plugs in through the repository traits each module declares.
//!
//! # Modules
//!
//! - `period` - Month resolution into inclusive calendar-day bounds
//! - `cash` - Petty-cash ledger (income and expenses)
//! - `inventory` - Product stock movements and carry-over
//! - `settings` - Key/value settings such as the report logo
//! - `report` - Renderer-agnostic monthly report documents

pub mod cash;
pub mod error;
pub mod inventory;
pub mod period;
pub mod report;
pub mod settings;

#[cfg(test)]
mod memory;

pub use error::BookkeepingError;
pub use period::Period;
