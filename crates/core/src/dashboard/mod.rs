//! Monthly dashboard: spending summary and per-category progress.

mod dashboard_calculator;
mod dashboard_model;
mod dashboard_service;
mod dashboard_traits;
mod household_data;


#[cfg(test)]
mod dashboard_service_tests;

pub use dashboard_calculator::compute_dashboard;
pub use dashboard_model::{CategoryProgress, Dashboard, DashboardResult, DashboardSummary};
pub use dashboard_service::DashboardService;
pub use dashboard_traits::{DashboardServiceTrait, HouseholdDataTrait};
pub use household_data::HouseholdData;
