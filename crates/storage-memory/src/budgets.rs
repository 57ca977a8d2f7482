use async_trait::async_trait;

use budgetbuddy_core::budgets::{Budget, BudgetRepositoryTrait};
use budgetbuddy_core::errors::{DatabaseError, Error, Result};

use crate::tables::{collect, ensure_new_id, not_found, Tables};
use crate::MemoryStore;

/// Mirrors the unique index on (household, category) of the SQLite backend.
fn ensure_category_free(tables: &Tables, budget: &Budget) -> Result<()> {
    let Some(category_id) = budget.category_id.as_deref() else {
        return Ok(());
    };
    let taken = tables
        .index(&budget.household_id)
        .map(|index| {
            index.budgets.iter().filter_map(|id| tables.budgets.get(id)).any(|b| {
                b.id != budget.id && b.category_id.as_deref() == Some(category_id)
            })
        })
        .unwrap_or(false);
    if taken {
        return Err(Error::Database(DatabaseError::UniqueViolation(format!(
            "budget for category '{}' already exists",
            category_id
        ))));
    }
    Ok(())
}

#[async_trait]
impl BudgetRepositoryTrait for MemoryStore {
    async fn insert_budget(&self, budget: Budget) -> Result<Budget> {
        let mut tables = self.tables.write().await;
        ensure_new_id(&tables.budgets, &budget.id, "Budget")?;
        ensure_category_free(&tables, &budget)?;
        tables
            .index_mut(&budget.household_id)
            .budgets
            .push(budget.id.clone());
        tables.budgets.insert(budget.id.clone(), budget.clone());
        Ok(budget)
    }

    async fn update_budget(&self, budget: Budget) -> Result<Budget> {
        let mut tables = self.tables.write().await;
        if !tables.budgets.contains_key(&budget.id) {
            return Err(not_found("Budget", &budget.id));
        }
        ensure_category_free(&tables, &budget)?;
        tables.budgets.insert(budget.id.clone(), budget.clone());
        Ok(budget)
    }

    async fn delete_budget(&self, budget_id: &str) -> Result<usize> {
        let mut tables = self.tables.write().await;
        let Some(budget) = tables.budgets.remove(budget_id) else {
            return Ok(0);
        };
        tables
            .index_mut(&budget.household_id)
            .budgets
            .retain(|id| id != budget_id);
        Ok(1)
    }

    async fn get_budget(&self, budget_id: &str) -> Result<Option<Budget>> {
        Ok(self.tables.read().await.budgets.get(budget_id).cloned())
    }

    async fn list_budgets(&self, household_id: &str) -> Result<Vec<Budget>> {
        let tables = self.tables.read().await;
        Ok(tables
            .index(household_id)
            .map(|index| collect(&index.budgets, &tables.budgets))
            .unwrap_or_default())
    }
}
