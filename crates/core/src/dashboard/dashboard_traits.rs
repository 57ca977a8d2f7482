use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::dashboard_model::Dashboard;
use crate::budgets::Budget;
use crate::categories::Category;
use crate::errors::Result;
use crate::expenses::Expense;
use crate::households::User;

/// Read access to everything the dashboard needs for a household.
///
/// Unknown households yield empty collections, never an error.
#[async_trait]
pub trait HouseholdDataTrait: Send + Sync {
    /// Newest first.
    async fn list_expenses(&self, household_id: &str) -> Result<Vec<Expense>>;

    async fn list_budgets(&self, household_id: &str) -> Result<Vec<Budget>>;

    async fn list_categories(&self, household_id: &str) -> Result<Vec<Category>>;

    async fn list_members(&self, household_id: &str) -> Result<Vec<User>>;

    /// Inclusive on both bounds.
    async fn list_expenses_in_range(
        &self,
        household_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Expense>>;
}

#[async_trait]
pub trait DashboardServiceTrait: Send + Sync {
    async fn get_dashboard(
        &self,
        household_id: &str,
        reference_date: DateTime<Utc>,
    ) -> Result<Dashboard>;
}
