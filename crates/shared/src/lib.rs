//! Shared configuration, errors, and identifiers for Caja Chica.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for ledger records
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, DatabaseConfig, ServerConfig};
pub use error::AppError;
