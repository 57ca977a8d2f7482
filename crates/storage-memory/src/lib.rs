//! In-process storage backend for BudgetBuddy.
//!
//! Everything lives in hash maps behind a single async lock. Records are
//! additionally indexed by household so listing never scans other
//! households' data. Nothing survives a restart.

mod budgets;
mod categories;
mod crypto;
mod expenses;
mod households;
mod tables;

use async_trait::async_trait;
use log::info;
use std::sync::Arc;
use tokio::sync::RwLock;

use budgetbuddy_core::errors::Result;
use budgetbuddy_core::storage::{Repositories, StorageBackend};

use tables::Tables;

/// Shared state behind every repository of a [`MemoryStorage`].
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

/// Storage backend keeping all records in process memory.
pub struct MemoryStorage {
    store: Arc<MemoryStore>,
}

impl MemoryStorage {
    pub fn open() -> Self {
        info!("Opened in-memory storage");
        MemoryStorage {
            store: Arc::new(MemoryStore::default()),
        }
    }
}

#[async_trait]
impl StorageBackend for MemoryStorage {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn repositories(&self) -> Repositories {
        Repositories {
            households: self.store.clone(),
            categories: self.store.clone(),
            budgets: self.store.clone(),
            expenses: self.store.clone(),
            crypto_holdings: self.store.clone(),
        }
    }

    async fn close(&self) -> Result<()> {
        self.store.tables.write().await.clear();
        info!("Closed in-memory storage");
        Ok(())
    }
}
