use chrono::{DateTime, Datelike, Utc};
use num_traits::ToPrimitive;
use rust_decimal::Decimal;

use super::dashboard_model::{CategoryProgress, DashboardResult, DashboardSummary};
use crate::budgets::Budget;
use crate::categories::Category;
use crate::constants::{DISPLAY_DECIMAL_PRECISION, RECENT_EXPENSES_LIMIT};
use crate::expenses::{newest_first, Expense};
use crate::utils::{is_within, saturating_sum, start_of_month};

/// Builds the monthly dashboard for one household.
///
/// The month window runs from the first instant of `reference_date`'s month
/// (UTC) up to and including `reference_date`. Budgets are summed regardless
/// of their period. Expenses without a category count towards the summary
/// but not towards any category's progress.
///
/// A category without a budget reports `budget = 0`, `percentage = 0` and
/// `remaining = -spent`.
///
/// Sums saturate at the bounds of `Decimal`, so extreme inputs clamp rather
/// than panic. Inputs are not modified; identical inputs always give
/// identical output.
pub fn compute_dashboard(
    categories: &[Category],
    budgets: &[Budget],
    all_expenses: &[Expense],
    reference_date: DateTime<Utc>,
) -> DashboardResult {
    let month_start = start_of_month(reference_date);
    let monthly_expenses: Vec<&Expense> = all_expenses
        .iter()
        .filter(|e| is_within(e.date, month_start, reference_date))
        .collect();

    let total_spent = saturating_sum(monthly_expenses.iter().map(|e| e.amount));
    let total_budget = saturating_sum(budgets.iter().map(|b| b.amount));
    let day_of_month = Decimal::from(reference_date.day());

    let summary = DashboardSummary {
        monthly_budget: total_budget,
        spent: total_spent,
        remaining: total_budget.saturating_sub(total_spent),
        daily_average: (total_spent / day_of_month).round_dp(DISPLAY_DECIMAL_PRECISION),
    };

    let category_progress = categories
        .iter()
        .map(|category| category_progress(category, budgets, &monthly_expenses))
        .collect();

    let mut recent_expenses = all_expenses.to_vec();
    recent_expenses.sort_by(newest_first);
    recent_expenses.truncate(RECENT_EXPENSES_LIMIT);

    DashboardResult {
        summary,
        category_progress,
        recent_expenses,
    }
}

fn category_progress(
    category: &Category,
    budgets: &[Budget],
    monthly_expenses: &[&Expense],
) -> CategoryProgress {
    // Budgets are unique per category, so the first match is the only one.
    let budget = budgets
        .iter()
        .find(|b| b.category_id.as_deref() == Some(category.id.as_str()))
        .map(|b| b.amount)
        .unwrap_or(Decimal::ZERO);

    let spent = saturating_sum(
        monthly_expenses
            .iter()
            .filter(|e| e.category_id.as_deref() == Some(category.id.as_str()))
            .map(|e| e.amount),
    );

    CategoryProgress {
        id: category.id.clone(),
        name: category.name.clone(),
        icon: category.icon.clone(),
        color: category.color.clone(),
        spent,
        budget,
        remaining: budget.saturating_sub(spent),
        percentage: percentage_used(spent, budget),
    }
}

/// `round(spent / budget * 100)` with halves rounded up, or `0` when there is
/// no positive budget to compare against.
pub(crate) fn percentage_used(spent: Decimal, budget: Decimal) -> i64 {
    if budget <= Decimal::ZERO {
        return 0;
    }
    spent
        .checked_div(budget)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .and_then(|pct| pct.checked_add(Decimal::new(5, 1)))
        .and_then(|pct| pct.floor().to_i64())
        .unwrap_or(0)
}
