//! Storage abstraction shared by the backends.
//!
//! A backend is opened explicitly, hands out its repositories as trait
//! objects and is closed explicitly. Nothing here is a global.

use async_trait::async_trait;
use std::sync::Arc;

use crate::budgets::BudgetRepositoryTrait;
use crate::categories::CategoryRepositoryTrait;
use crate::crypto::CryptoHoldingRepositoryTrait;
use crate::errors::Result;
use crate::expenses::ExpenseRepositoryTrait;
use crate::households::HouseholdRepositoryTrait;

/// Every repository of one backend.
#[derive(Clone)]
pub struct Repositories {
    pub households: Arc<dyn HouseholdRepositoryTrait>,
    pub categories: Arc<dyn CategoryRepositoryTrait>,
    pub budgets: Arc<dyn BudgetRepositoryTrait>,
    pub expenses: Arc<dyn ExpenseRepositoryTrait>,
    pub crypto_holdings: Arc<dyn CryptoHoldingRepositoryTrait>,
}

/// An opened storage backend.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Short name used in logs, e.g. `"sqlite"`.
    fn name(&self) -> &'static str;

    fn repositories(&self) -> Repositories;

    /// Releases the backend's resources. Repositories handed out earlier
    /// must not be used afterwards.
    async fn close(&self) -> Result<()>;
}
