//! SQLite storage backend for BudgetBuddy.
//!
//! This crate holds everything Diesel-related: connection pooling, the
//! embedded migrations, the row models and the repository implementations
//! of the traits defined in `budgetbuddy-core`.
//!
//! ```text
//!        core (domain, traits)
//!                 │
//!                 ▼
//!     storage-sqlite (this crate)
//!                 │
//!                 ▼
//!             SQLite DB
//! ```
//!
//! Reads go through an r2d2 pool. Writes are funnelled through a single
//! writer task (see [`db::write_actor`]) so SQLite never sees two writers.

pub mod db;
pub mod errors;
pub mod schema;
mod utils;

pub mod budgets;
pub mod categories;
pub mod crypto;
pub mod expenses;
pub mod households;

use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use budgetbuddy_core::storage::{Repositories, StorageBackend};

pub use db::{create_pool, get_connection, init, run_migrations, DbConnection, DbPool, WriteHandle};
pub use errors::{IntoCore, StorageError};
pub use budgetbuddy_core::errors::{DatabaseError, Error, Result};

use budgets::BudgetRepository;
use categories::CategoryRepository;
use crypto::CryptoHoldingRepository;
use expenses::ExpenseRepository;
use households::HouseholdRepository;

/// An opened SQLite database with its pool and writer.
pub struct SqliteStorage {
    db_path: String,
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SqliteStorage {
    /// Opens (creating if needed) the database at `db_path` and applies
    /// pending migrations. Must be called inside a Tokio runtime.
    pub fn open(db_path: &str) -> Result<Self> {
        let db_path = init(db_path)?;
        let pool = create_pool(&db_path)?;
        run_migrations(&pool)?;
        let writer = db::spawn_writer(pool.as_ref().clone());
        info!("Opened SQLite storage at {}", db_path);
        Ok(SqliteStorage {
            db_path,
            pool,
            writer,
        })
    }

    pub fn db_path(&self) -> &str {
        &self.db_path
    }
}

#[async_trait]
impl StorageBackend for SqliteStorage {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn repositories(&self) -> Repositories {
        Repositories {
            households: Arc::new(HouseholdRepository::new(
                self.pool.clone(),
                self.writer.clone(),
            )),
            categories: Arc::new(CategoryRepository::new(
                self.pool.clone(),
                self.writer.clone(),
            )),
            budgets: Arc::new(BudgetRepository::new(self.pool.clone(), self.writer.clone())),
            expenses: Arc::new(ExpenseRepository::new(self.pool.clone(), self.writer.clone())),
            crypto_holdings: Arc::new(CryptoHoldingRepository::new(
                self.pool.clone(),
                self.writer.clone(),
            )),
        }
    }

    async fn close(&self) -> Result<()> {
        self.writer.shutdown().await;
        info!("Closed SQLite storage at {}", self.db_path);
        Ok(())
    }
}
