//! Unit tests for the budget service.

use super::*;
use crate::categories::{Category, CategoryRepositoryTrait};
use crate::errors::{Error, Result, ValidationError};
use async_trait::async_trait;
use rust_decimal_macros::dec;
use std::sync::{Arc, Mutex};

// =============================================================================
// Mock Implementations
// =============================================================================

#[derive(Default)]
struct MockBudgetRepository {
    budgets: Mutex<Vec<Budget>>,
}

#[async_trait]
impl BudgetRepositoryTrait for MockBudgetRepository {
    async fn insert_budget(&self, budget: Budget) -> Result<Budget> {
        self.budgets.lock().unwrap().push(budget.clone());
        Ok(budget)
    }

    async fn update_budget(&self, budget: Budget) -> Result<Budget> {
        let mut budgets = self.budgets.lock().unwrap();
        let slot = budgets.iter_mut().find(|b| b.id == budget.id).unwrap();
        *slot = budget.clone();
        Ok(budget)
    }

    async fn delete_budget(&self, budget_id: &str) -> Result<usize> {
        let mut budgets = self.budgets.lock().unwrap();
        let before = budgets.len();
        budgets.retain(|b| b.id != budget_id);
        Ok(before - budgets.len())
    }

    async fn get_budget(&self, budget_id: &str) -> Result<Option<Budget>> {
        Ok(self
            .budgets
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.id == budget_id)
            .cloned())
    }

    async fn list_budgets(&self, household_id: &str) -> Result<Vec<Budget>> {
        Ok(self
            .budgets
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.household_id == household_id)
            .cloned()
            .collect())
    }
}

struct MockCategoryRepository {
    categories: Vec<Category>,
}

#[async_trait]
impl CategoryRepositoryTrait for MockCategoryRepository {
    async fn insert_category(&self, _category: Category) -> Result<Category> {
        unimplemented!()
    }

    async fn get_category(&self, category_id: &str) -> Result<Option<Category>> {
        Ok(self.categories.iter().find(|c| c.id == category_id).cloned())
    }

    async fn list_categories(&self, _household_id: &str) -> Result<Vec<Category>> {
        unimplemented!()
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn create_test_category(id: &str, household_id: &str) -> Category {
    Category {
        id: id.to_string(),
        name: format!("Category {}", id),
        icon: "fas fa-tag".to_string(),
        color: "#64748B".to_string(),
        household_id: household_id.to_string(),
    }
}

fn create_budget_service() -> BudgetService {
    let categories = MockCategoryRepository {
        categories: vec![
            create_test_category("cat1", "hh1"),
            create_test_category("cat2", "hh1"),
            create_test_category("cat3", "hh2"),
        ],
    };
    BudgetService::new(
        Arc::new(MockBudgetRepository::default()),
        Arc::new(categories),
    )
}

fn new_budget(category_id: Option<&str>, amount: &str) -> NewBudget {
    NewBudget {
        id: None,
        household_id: "hh1".to_string(),
        category_id: category_id.map(str::to_string),
        amount: amount.to_string(),
        period: BudgetPeriod::Monthly,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn test_create_budget_parses_amount() {
    let service = create_budget_service();
    let budget = service
        .create_budget(new_budget(Some("cat1"), "800.00"))
        .await
        .unwrap();

    assert_eq!(budget.amount, dec!(800));
    assert_eq!(budget.period, BudgetPeriod::Monthly);
    assert_eq!(budget.category_id.as_deref(), Some("cat1"));
}

#[tokio::test]
async fn test_second_budget_for_same_category_is_rejected() {
    let service = create_budget_service();
    service
        .create_budget(new_budget(Some("cat1"), "800"))
        .await
        .unwrap();

    let err = service
        .create_budget(new_budget(Some("cat1"), "100"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::ConstraintViolation(_)));
    assert_eq!(service.list_budgets("hh1").await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_uncategorized_budgets_are_not_unique() {
    let service = create_budget_service();
    service.create_budget(new_budget(None, "50")).await.unwrap();
    service.create_budget(new_budget(None, "75")).await.unwrap();

    assert_eq!(service.list_budgets("hh1").await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_malformed_amount_is_rejected() {
    let service = create_budget_service();
    let err = service
        .create_budget(new_budget(Some("cat1"), "eight hundred"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Validation(ValidationError::InvalidInput(_))
    ));
}

#[tokio::test]
async fn test_amount_beyond_limit_is_rejected() {
    let service = create_budget_service();
    let err = service
        .create_budget(new_budget(Some("cat1"), "1000000000000.01"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Validation(ValidationError::InvalidInput(_))
    ));
}

#[tokio::test]
async fn test_negative_amount_is_rejected() {
    let service = create_budget_service();
    assert!(service
        .create_budget(new_budget(Some("cat1"), "-10"))
        .await
        .is_err());
}

#[tokio::test]
async fn test_category_from_other_household_is_rejected() {
    let service = create_budget_service();
    let err = service
        .create_budget(new_budget(Some("cat3"), "100"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Validation(_)));
}

#[tokio::test]
async fn test_update_budget_merges_partial_fields() {
    let service = create_budget_service();
    let created = service
        .create_budget(new_budget(Some("cat1"), "800"))
        .await
        .unwrap();

    let updated = service
        .update_budget(
            &created.id,
            BudgetUpdate {
                amount: Some("950.25".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.amount, dec!(950.25));
    assert_eq!(updated.category_id.as_deref(), Some("cat1"));
    assert_eq!(updated.period, BudgetPeriod::Monthly);
    assert_eq!(updated.created_at, created.created_at);
}

#[tokio::test]
async fn test_update_budget_onto_taken_category_is_rejected() {
    let service = create_budget_service();
    service
        .create_budget(new_budget(Some("cat1"), "800"))
        .await
        .unwrap();
    let second = service
        .create_budget(new_budget(Some("cat2"), "200"))
        .await
        .unwrap();

    let err = service
        .update_budget(
            &second.id,
            BudgetUpdate {
                category_id: Some("cat1".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, Error::ConstraintViolation(_)));
}

#[tokio::test]
async fn test_update_keeping_own_category_is_allowed() {
    let service = create_budget_service();
    let created = service
        .create_budget(new_budget(Some("cat1"), "800"))
        .await
        .unwrap();

    let updated = service
        .update_budget(
            &created.id,
            BudgetUpdate {
                category_id: Some("cat1".to_string()),
                period: Some(BudgetPeriod::Yearly),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.period, BudgetPeriod::Yearly);
}

#[tokio::test]
async fn test_update_and_delete_unknown_budget_are_not_found() {
    let service = create_budget_service();

    let err = service
        .update_budget("missing", BudgetUpdate::default())
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    let err = service.delete_budget("missing").await.unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_budget_period_parsing() {
    assert_eq!("Weekly".parse::<BudgetPeriod>().unwrap(), BudgetPeriod::Weekly);
    assert!("fortnightly".parse::<BudgetPeriod>().is_err());
    assert_eq!(BudgetPeriod::Yearly.to_string(), "yearly");
}
