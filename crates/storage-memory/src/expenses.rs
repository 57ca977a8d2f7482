use async_trait::async_trait;
use chrono::{DateTime, Utc};

use budgetbuddy_core::errors::Result;
use budgetbuddy_core::expenses::{newest_first, Expense, ExpenseRepositoryTrait};
use budgetbuddy_core::utils::is_within;

use crate::tables::{collect, ensure_new_id};
use crate::MemoryStore;

impl MemoryStore {
    async fn household_expenses(&self, household_id: &str) -> Vec<Expense> {
        let tables = self.tables.read().await;
        let mut expenses = tables
            .index(household_id)
            .map(|index| collect(&index.expenses, &tables.expenses))
            .unwrap_or_default();
        expenses.sort_by(newest_first);
        expenses
    }
}

#[async_trait]
impl ExpenseRepositoryTrait for MemoryStore {
    async fn insert_expense(&self, expense: Expense) -> Result<Expense> {
        let mut tables = self.tables.write().await;
        ensure_new_id(&tables.expenses, &expense.id, "Expense")?;
        tables
            .index_mut(&expense.household_id)
            .expenses
            .push(expense.id.clone());
        tables.expenses.insert(expense.id.clone(), expense.clone());
        Ok(expense)
    }

    async fn delete_expense(&self, expense_id: &str) -> Result<usize> {
        let mut tables = self.tables.write().await;
        let Some(expense) = tables.expenses.remove(expense_id) else {
            return Ok(0);
        };
        tables
            .index_mut(&expense.household_id)
            .expenses
            .retain(|id| id != expense_id);
        Ok(1)
    }

    async fn list_expenses(&self, household_id: &str) -> Result<Vec<Expense>> {
        Ok(self.household_expenses(household_id).await)
    }

    async fn list_expenses_in_range(
        &self,
        household_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Expense>> {
        let mut expenses = self.household_expenses(household_id).await;
        expenses.retain(|e| is_within(e.date, start, end));
        Ok(expenses)
    }
}
