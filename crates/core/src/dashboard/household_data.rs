use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

use super::dashboard_traits::HouseholdDataTrait;
use crate::budgets::{Budget, BudgetRepositoryTrait};
use crate::categories::{Category, CategoryRepositoryTrait};
use crate::errors::{Result, ValidationError};
use crate::expenses::{Expense, ExpenseRepositoryTrait};
use crate::households::{HouseholdRepositoryTrait, User};
use crate::storage::Repositories;

/// [`HouseholdDataTrait`] on top of the storage repositories.
pub struct HouseholdData {
    household_repository: Arc<dyn HouseholdRepositoryTrait>,
    category_repository: Arc<dyn CategoryRepositoryTrait>,
    budget_repository: Arc<dyn BudgetRepositoryTrait>,
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
}

impl HouseholdData {
    pub fn new(repositories: &Repositories) -> Self {
        HouseholdData {
            household_repository: repositories.households.clone(),
            category_repository: repositories.categories.clone(),
            budget_repository: repositories.budgets.clone(),
            expense_repository: repositories.expenses.clone(),
        }
    }
}

#[async_trait]
impl HouseholdDataTrait for HouseholdData {
    async fn list_expenses(&self, household_id: &str) -> Result<Vec<Expense>> {
        self.expense_repository.list_expenses(household_id).await
    }

    async fn list_budgets(&self, household_id: &str) -> Result<Vec<Budget>> {
        self.budget_repository.list_budgets(household_id).await
    }

    async fn list_categories(&self, household_id: &str) -> Result<Vec<Category>> {
        self.category_repository.list_categories(household_id).await
    }

    async fn list_members(&self, household_id: &str) -> Result<Vec<User>> {
        self.household_repository.list_members(household_id).await
    }

    async fn list_expenses_in_range(
        &self,
        household_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Expense>> {
        if start > end {
            return Err(ValidationError::InvalidInput(format!(
                "range start {} is after end {}",
                start, end
            ))
            .into());
        }
        self.expense_repository
            .list_expenses_in_range(household_id, start, end)
            .await
    }
}
