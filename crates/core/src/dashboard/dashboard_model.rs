//! Dashboard response models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::expenses::Expense;
use crate::households::User;

/// Month-to-date totals for a household.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Sum of every budget of the household, whatever its period.
    pub monthly_budget: Decimal,
    pub spent: Decimal,
    /// `monthly_budget - spent`. Negative when over budget.
    pub remaining: Decimal,
    /// `spent` divided by the day of the month, already rounded to 2 decimal
    /// places.
    pub daily_average: Decimal,
}

/// Spending against the budget of a single category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryProgress {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
    pub spent: Decimal,
    pub budget: Decimal,
    pub remaining: Decimal,
    /// Whole percent of the budget used. `0` when the category has no budget.
    pub percentage: i64,
}

/// Output of the aggregation, before members are attached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResult {
    pub summary: DashboardSummary,
    pub category_progress: Vec<CategoryProgress>,
    pub recent_expenses: Vec<Expense>,
}

impl DashboardResult {
    pub fn with_members(self, members: Vec<User>) -> Dashboard {
        Dashboard {
            summary: self.summary,
            category_progress: self.category_progress,
            recent_expenses: self.recent_expenses,
            members,
        }
    }
}

/// Full dashboard payload for a household.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub summary: DashboardSummary,
    pub category_progress: Vec<CategoryProgress>,
    pub recent_expenses: Vec<Expense>,
    pub members: Vec<User>,
}
