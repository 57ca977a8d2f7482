use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::expenses_model::{Expense, ExpenseWithUser, NewExpense};
use crate::errors::Result;

/// Persistence contract for expenses. Listings are sorted with
/// [`newest_first`](super::newest_first).
#[async_trait]
pub trait ExpenseRepositoryTrait: Send + Sync {
    async fn insert_expense(&self, expense: Expense) -> Result<Expense>;

    /// Returns the number of deleted rows.
    async fn delete_expense(&self, expense_id: &str) -> Result<usize>;

    async fn list_expenses(&self, household_id: &str) -> Result<Vec<Expense>>;

    /// Expenses whose `date` lies in `[start, end]`.
    async fn list_expenses_in_range(
        &self,
        household_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Expense>>;
}

#[async_trait]
pub trait ExpenseServiceTrait: Send + Sync {
    /// Validates and records an expense, filling gaps from receipt hints.
    async fn create_expense(&self, new_expense: NewExpense) -> Result<Expense>;

    async fn delete_expense(&self, expense_id: &str) -> Result<()>;

    async fn list_expenses(&self, household_id: &str) -> Result<Vec<Expense>>;

    async fn list_expenses_in_range(
        &self,
        household_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Expense>>;

    /// Expenses joined with the member who recorded them, optionally limited
    /// to an inclusive date range.
    async fn list_expenses_with_user(
        &self,
        household_id: &str,
        range: Option<(DateTime<Utc>, DateTime<Utc>)>,
    ) -> Result<Vec<ExpenseWithUser>>;
}
