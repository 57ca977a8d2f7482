use async_trait::async_trait;
use chrono::Utc;
use log::{debug, warn};
use std::sync::Arc;
use uuid::Uuid;

use super::budgets_model::{Budget, BudgetUpdate, NewBudget};
use super::budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
use crate::categories::CategoryRepositoryTrait;
use crate::constants::{MAX_MONEY_AMOUNT, MONEY_SCALE};
use crate::errors::{Error, Result, ValidationError};
use crate::utils::parse_non_negative_amount;

pub struct BudgetService {
    repository: Arc<dyn BudgetRepositoryTrait>,
    category_repository: Arc<dyn CategoryRepositoryTrait>,
}

impl BudgetService {
    pub fn new(
        repository: Arc<dyn BudgetRepositoryTrait>,
        category_repository: Arc<dyn CategoryRepositoryTrait>,
    ) -> Self {
        BudgetService {
            repository,
            category_repository,
        }
    }

    /// The category must exist and belong to the budget's household.
    async fn ensure_category(&self, household_id: &str, category_id: &str) -> Result<()> {
        match self.category_repository.get_category(category_id).await? {
            Some(category) if category.household_id == household_id => Ok(()),
            _ => Err(ValidationError::InvalidInput(format!(
                "categoryId: category '{}' does not exist in household '{}'",
                category_id, household_id
            ))
            .into()),
        }
    }

    /// Rejects a second budget for the same category.
    async fn ensure_unique(
        &self,
        household_id: &str,
        category_id: &str,
        excluding_budget_id: Option<&str>,
    ) -> Result<()> {
        let existing = self.repository.list_budgets(household_id).await?;
        let duplicate = existing.iter().find(|b| {
            b.category_id.as_deref() == Some(category_id)
                && Some(b.id.as_str()) != excluding_budget_id
        });

        if let Some(duplicate) = duplicate {
            warn!(
                "Rejecting duplicate budget for category {} (existing budget {})",
                category_id, duplicate.id
            );
            return Err(Error::ConstraintViolation(format!(
                "A budget already exists for category '{}'",
                category_id
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl BudgetServiceTrait for BudgetService {
    async fn create_budget(&self, new_budget: NewBudget) -> Result<Budget> {
        if new_budget.household_id.trim().is_empty() {
            return Err(ValidationError::MissingField("householdId".to_string()).into());
        }
        let amount = parse_non_negative_amount(
            "amount",
            &new_budget.amount,
            MONEY_SCALE,
            MAX_MONEY_AMOUNT,
        )?;

        if let Some(category_id) = new_budget.category_id.as_deref() {
            self.ensure_category(&new_budget.household_id, category_id)
                .await?;
            self.ensure_unique(&new_budget.household_id, category_id, None)
                .await?;
        }

        let budget = Budget {
            id: new_budget.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            category_id: new_budget.category_id,
            amount,
            period: new_budget.period,
            household_id: new_budget.household_id,
            created_at: Utc::now(),
        };
        debug!("Creating budget {} ({})", budget.id, budget.amount);
        self.repository.insert_budget(budget).await
    }

    async fn update_budget(&self, budget_id: &str, update: BudgetUpdate) -> Result<Budget> {
        let mut budget = self
            .repository
            .get_budget(budget_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Budget '{}'", budget_id)))?;

        if let Some(raw_amount) = update.amount.as_deref() {
            budget.amount =
                parse_non_negative_amount("amount", raw_amount, MONEY_SCALE, MAX_MONEY_AMOUNT)?;
        }
        if let Some(period) = update.period {
            budget.period = period;
        }
        if let Some(category_id) = update.category_id {
            if budget.category_id.as_deref() != Some(category_id.as_str()) {
                self.ensure_category(&budget.household_id, &category_id)
                    .await?;
                self.ensure_unique(&budget.household_id, &category_id, Some(budget_id))
                    .await?;
            }
            budget.category_id = Some(category_id);
        }

        self.repository.update_budget(budget).await
    }

    async fn delete_budget(&self, budget_id: &str) -> Result<()> {
        let deleted = self.repository.delete_budget(budget_id).await?;
        if deleted == 0 {
            return Err(Error::NotFound(format!("Budget '{}'", budget_id)));
        }
        Ok(())
    }

    async fn list_budgets(&self, household_id: &str) -> Result<Vec<Budget>> {
        self.repository.list_budgets(household_id).await
    }
}
