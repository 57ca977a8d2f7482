use super::*;
use crate::budgets::{Budget, BudgetPeriod};
use crate::categories::Category;
use crate::errors::{Error, Result};
use crate::expenses::Expense;
use crate::households::User;
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use rust_decimal_macros::dec;
use std::sync::Arc;

// --- Mock HouseholdData ---

struct MockHouseholdData {
    fail_budgets: bool,
}

fn as_of() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 10, 8, 0, 0).unwrap()
}

#[async_trait]
impl HouseholdDataTrait for MockHouseholdData {
    async fn list_expenses(&self, household_id: &str) -> Result<Vec<Expense>> {
        if household_id != "hh1" {
            return Ok(Vec::new());
        }
        Ok(vec![Expense {
            id: "e1".to_string(),
            amount: dec!(120),
            description: "Weekly shop".to_string(),
            category_id: Some("cat1".to_string()),
            user_id: Some("user1".to_string()),
            household_id: "hh1".to_string(),
            is_shared: true,
            receipt_image: None,
            date: as_of(),
            created_at: as_of(),
        }])
    }

    async fn list_budgets(&self, household_id: &str) -> Result<Vec<Budget>> {
        if self.fail_budgets {
            return Err(Error::Unexpected("connection reset".to_string()));
        }
        if household_id != "hh1" {
            return Ok(Vec::new());
        }
        Ok(vec![Budget {
            id: "b1".to_string(),
            category_id: Some("cat1".to_string()),
            amount: dec!(800),
            period: BudgetPeriod::Monthly,
            household_id: "hh1".to_string(),
            created_at: as_of(),
        }])
    }

    async fn list_categories(&self, household_id: &str) -> Result<Vec<Category>> {
        if household_id != "hh1" {
            return Ok(Vec::new());
        }
        Ok(vec![Category {
            id: "cat1".to_string(),
            name: "Groceries".to_string(),
            icon: "fas fa-shopping-cart".to_string(),
            color: "#2563EB".to_string(),
            household_id: "hh1".to_string(),
        }])
    }

    async fn list_members(&self, household_id: &str) -> Result<Vec<User>> {
        if household_id != "hh1" {
            return Ok(Vec::new());
        }
        Ok(vec![User {
            id: "user1".to_string(),
            username: "sarah".to_string(),
            household_id: "hh1".to_string(),
            avatar: None,
        }])
    }

    async fn list_expenses_in_range(
        &self,
        _household_id: &str,
        _start: DateTime<Utc>,
        _end: DateTime<Utc>,
    ) -> Result<Vec<Expense>> {
        unimplemented!()
    }
}

fn service(fail_budgets: bool) -> DashboardService {
    DashboardService::new(Arc::new(MockHouseholdData { fail_budgets }))
}

#[tokio::test]
async fn test_get_dashboard_attaches_members() {
    let dashboard = service(false).get_dashboard("hh1", as_of()).await.unwrap();

    assert_eq!(dashboard.summary.monthly_budget, dec!(800));
    assert_eq!(dashboard.summary.spent, dec!(120));
    assert_eq!(dashboard.category_progress[0].percentage, 15);
    assert_eq!(dashboard.recent_expenses.len(), 1);
    assert_eq!(dashboard.members.len(), 1);
    assert_eq!(dashboard.members[0].username, "sarah");
}

#[tokio::test]
async fn test_unknown_household_yields_empty_dashboard() {
    let dashboard = service(false)
        .get_dashboard("nobody", as_of())
        .await
        .unwrap();

    assert!(dashboard.category_progress.is_empty());
    assert!(dashboard.recent_expenses.is_empty());
    assert!(dashboard.members.is_empty());
    assert_eq!(dashboard.summary.spent, dec!(0));
    assert_eq!(dashboard.summary.remaining, dec!(0));
}

#[tokio::test]
async fn test_fetch_failure_is_reported_as_unavailable() {
    let err = service(true).get_dashboard("hh1", as_of()).await.unwrap_err();
    assert!(err.is_unavailable());
}
