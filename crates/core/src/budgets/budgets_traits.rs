use async_trait::async_trait;

use super::budgets_model::{Budget, BudgetUpdate, NewBudget};
use crate::errors::Result;

/// Persistence contract for budgets.
#[async_trait]
pub trait BudgetRepositoryTrait: Send + Sync {
    async fn insert_budget(&self, budget: Budget) -> Result<Budget>;

    /// Replaces a stored budget with the same id.
    async fn update_budget(&self, budget: Budget) -> Result<Budget>;

    /// Returns the number of deleted rows.
    async fn delete_budget(&self, budget_id: &str) -> Result<usize>;

    async fn get_budget(&self, budget_id: &str) -> Result<Option<Budget>>;

    async fn list_budgets(&self, household_id: &str) -> Result<Vec<Budget>>;
}

#[async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    /// Creates a budget. At most one budget may exist per category.
    async fn create_budget(&self, new_budget: NewBudget) -> Result<Budget>;

    /// Merges `update` into the stored budget.
    async fn update_budget(&self, budget_id: &str, update: BudgetUpdate) -> Result<Budget>;

    async fn delete_budget(&self, budget_id: &str) -> Result<()>;

    async fn list_budgets(&self, household_id: &str) -> Result<Vec<Budget>>;
}
