use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, error};
use std::sync::Arc;

use super::dashboard_calculator::compute_dashboard;
use super::dashboard_model::Dashboard;
use super::dashboard_traits::{DashboardServiceTrait, HouseholdDataTrait};
use crate::errors::{Error, Result};

/// Fetches a household's records and runs the aggregation over them.
pub struct DashboardService {
    household_data: Arc<dyn HouseholdDataTrait>,
}

impl DashboardService {
    pub fn new(household_data: Arc<dyn HouseholdDataTrait>) -> Self {
        DashboardService { household_data }
    }
}

#[async_trait]
impl DashboardServiceTrait for DashboardService {
    async fn get_dashboard(
        &self,
        household_id: &str,
        reference_date: DateTime<Utc>,
    ) -> Result<Dashboard> {
        let data = self.household_data.as_ref();
        let (categories, budgets, expenses, members) = futures::try_join!(
            data.list_categories(household_id),
            data.list_budgets(household_id),
            data.list_expenses(household_id),
            data.list_members(household_id),
        )
        .map_err(|e| {
            error!("Failed to load dashboard data for {}: {}", household_id, e);
            Error::DependencyUnavailable(format!(
                "dashboard data for household '{}': {}",
                household_id, e
            ))
        })?;

        debug!(
            "Computing dashboard for {}: {} categories, {} budgets, {} expenses",
            household_id,
            categories.len(),
            budgets.len(),
            expenses.len()
        );

        Ok(compute_dashboard(&categories, &budgets, &expenses, reference_date).with_members(members))
    }
}
