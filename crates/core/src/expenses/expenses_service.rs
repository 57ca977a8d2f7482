use async_trait::async_trait;
use chrono::{DateTime, NaiveTime, Utc};
use log::{debug, info};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use super::expenses_model::{Expense, ExpenseUser, ExpenseWithUser, NewExpense};
use super::expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};
use crate::categories::CategoryRepositoryTrait;
use crate::constants::{MAX_MONEY_AMOUNT, MONEY_SCALE, RECEIPT_EXPENSE_DESCRIPTION};
use crate::errors::{Error, Result, ValidationError};
use crate::households::HouseholdRepositoryTrait;
use crate::receipts::ReceiptHints;
use crate::utils::parse_amount;

pub struct ExpenseService {
    repository: Arc<dyn ExpenseRepositoryTrait>,
    category_repository: Arc<dyn CategoryRepositoryTrait>,
    household_repository: Arc<dyn HouseholdRepositoryTrait>,
}

impl ExpenseService {
    pub fn new(
        repository: Arc<dyn ExpenseRepositoryTrait>,
        category_repository: Arc<dyn CategoryRepositoryTrait>,
        household_repository: Arc<dyn HouseholdRepositoryTrait>,
    ) -> Self {
        ExpenseService {
            repository,
            category_repository,
            household_repository,
        }
    }

    fn resolve_amount(raw: Option<&str>, hints: &ReceiptHints) -> Result<Decimal> {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => parse_amount("amount", raw, MONEY_SCALE, MAX_MONEY_AMOUNT),
            None => hints
                .amount
                .map(|a| a.round_dp(MONEY_SCALE))
                .ok_or_else(|| ValidationError::MissingField("amount".to_string()).into()),
        }
    }

    fn resolve_description(raw: Option<&str>, hints: &ReceiptHints) -> Result<String> {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            Some(description) => Ok(description.to_string()),
            None if !hints.is_empty() => Ok(RECEIPT_EXPENSE_DESCRIPTION.to_string()),
            None => Err(ValidationError::MissingField("description".to_string()).into()),
        }
    }

    /// An explicit category must belong to the household. Without one, the
    /// hinted category name is matched case-insensitively.
    async fn resolve_category(
        &self,
        household_id: &str,
        category_id: Option<String>,
        hints: &ReceiptHints,
    ) -> Result<Option<String>> {
        if let Some(category_id) = category_id {
            return match self.category_repository.get_category(&category_id).await? {
                Some(category) if category.household_id == household_id => Ok(Some(category_id)),
                _ => Err(ValidationError::InvalidInput(format!(
                    "categoryId: category '{}' does not exist in household '{}'",
                    category_id, household_id
                ))
                .into()),
            };
        }

        let Some(hinted_name) = hints.category.as_deref() else {
            return Ok(None);
        };
        let categories = self.category_repository.list_categories(household_id).await?;
        let matched = categories
            .into_iter()
            .find(|c| c.name.eq_ignore_ascii_case(hinted_name.trim()))
            .map(|c| c.id);
        if matched.is_none() {
            debug!(
                "No category named '{}' in household {}, leaving expense uncategorized",
                hinted_name, household_id
            );
        }
        Ok(matched)
    }

    async fn resolve_user(&self, household_id: &str, user_id: Option<String>) -> Result<Option<String>> {
        let Some(user_id) = user_id else {
            return Ok(None);
        };
        match self.household_repository.get_user(&user_id).await? {
            Some(user) if user.household_id == household_id => Ok(Some(user_id)),
            _ => Err(ValidationError::InvalidInput(format!(
                "userId: user '{}' is not a member of household '{}'",
                user_id, household_id
            ))
            .into()),
        }
    }
}

#[async_trait]
impl ExpenseServiceTrait for ExpenseService {
    async fn create_expense(&self, new_expense: NewExpense) -> Result<Expense> {
        let household_id = new_expense.household_id.trim().to_string();
        if household_id.is_empty() {
            return Err(ValidationError::MissingField("householdId".to_string()).into());
        }
        let hints = new_expense.receipt_hints.unwrap_or_default();

        let amount = Self::resolve_amount(new_expense.amount.as_deref(), &hints)?;
        let description = Self::resolve_description(new_expense.description.as_deref(), &hints)?;
        let category_id = self
            .resolve_category(&household_id, new_expense.category_id, &hints)
            .await?;
        let user_id = self.resolve_user(&household_id, new_expense.user_id).await?;

        let now = Utc::now();
        let date = new_expense
            .date
            .or_else(|| hints.date.map(|d| d.and_time(NaiveTime::MIN).and_utc()))
            .unwrap_or(now);

        let expense = Expense {
            id: new_expense.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            amount,
            description,
            category_id,
            user_id,
            household_id,
            is_shared: new_expense.is_shared,
            receipt_image: new_expense.receipt_image,
            date,
            created_at: now,
        };
        info!(
            "Recording expense {} of {} for household {}",
            expense.id, expense.amount, expense.household_id
        );
        self.repository.insert_expense(expense).await
    }

    async fn delete_expense(&self, expense_id: &str) -> Result<()> {
        let deleted = self.repository.delete_expense(expense_id).await?;
        if deleted == 0 {
            return Err(Error::NotFound(format!("Expense '{}'", expense_id)));
        }
        Ok(())
    }

    async fn list_expenses(&self, household_id: &str) -> Result<Vec<Expense>> {
        self.repository.list_expenses(household_id).await
    }

    async fn list_expenses_in_range(
        &self,
        household_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Expense>> {
        if start > end {
            return Err(ValidationError::InvalidInput(
                "start: range start must not be after its end".to_string(),
            )
            .into());
        }
        self.repository
            .list_expenses_in_range(household_id, start, end)
            .await
    }

    async fn list_expenses_with_user(
        &self,
        household_id: &str,
        range: Option<(DateTime<Utc>, DateTime<Utc>)>,
    ) -> Result<Vec<ExpenseWithUser>> {
        let expenses = match range {
            Some((start, end)) => self.list_expenses_in_range(household_id, start, end).await?,
            None => self.list_expenses(household_id).await?,
        };
        let members: HashMap<String, ExpenseUser> = self
            .household_repository
            .list_members(household_id)
            .await?
            .iter()
            .map(|u| (u.id.clone(), ExpenseUser::from(u)))
            .collect();

        Ok(expenses
            .into_iter()
            .map(|expense| {
                let user = expense
                    .user_id
                    .as_ref()
                    .and_then(|id| members.get(id))
                    .cloned();
                ExpenseWithUser { expense, user }
            })
            .collect())
    }
}
