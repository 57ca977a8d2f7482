//! BudgetBuddy Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic for household budget tracking:
//! expenses, per-category budgets, the monthly dashboard aggregation and
//! the crypto holdings valuation. It is database-agnostic and defines
//! repository traits that are implemented by the `storage-sqlite` and
//! `storage-memory` crates.

pub mod budgets;
pub mod categories;
pub mod constants;
pub mod crypto;
pub mod dashboard;
pub mod errors;
pub mod expenses;
pub mod households;
pub mod receipts;
pub mod seed;
pub mod storage;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
