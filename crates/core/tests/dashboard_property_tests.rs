//! Property-based integration tests for the dashboard aggregation.
//!
//! Amounts are generated as whole cents so the expected values can be
//! computed with integer arithmetic, independently of the aggregation code.

use budgetbuddy_core::budgets::{Budget, BudgetPeriod};
use budgetbuddy_core::categories::Category;
use budgetbuddy_core::dashboard::compute_dashboard;
use budgetbuddy_core::expenses::Expense;
use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

const CATEGORY_IDS: [&str; 4] = ["cat1", "cat2", "cat3", "cat4"];

fn reference_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap()
}

fn month_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()
}

fn cents(value: i64) -> Decimal {
    Decimal::new(value, 2)
}

// =============================================================================
// Generators
// =============================================================================

fn categories() -> Vec<Category> {
    CATEGORY_IDS
        .iter()
        .map(|id| Category {
            id: id.to_string(),
            name: id.to_uppercase(),
            icon: "fas fa-question".to_string(),
            color: "#64748B".to_string(),
            household_id: "hh1".to_string(),
        })
        .collect()
}

/// An expense somewhere in the 60 days before the reference date, optionally
/// categorized.
fn arb_expense() -> impl Strategy<Value = (i64, Option<usize>, i64)> {
    (
        0i64..500_000,
        proptest::option::of(0usize..CATEGORY_IDS.len()),
        0i64..(60 * 24 * 3600),
    )
}

fn arb_expenses(max_count: usize) -> impl Strategy<Value = Vec<Expense>> {
    proptest::collection::vec(arb_expense(), 0..=max_count).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (amount_cents, category, seconds_back))| {
                let date = reference_date() - Duration::seconds(seconds_back);
                Expense {
                    id: format!("e{}", i),
                    amount: cents(amount_cents),
                    description: "generated".to_string(),
                    category_id: category.map(|c| CATEGORY_IDS[c].to_string()),
                    user_id: None,
                    household_id: "hh1".to_string(),
                    is_shared: false,
                    receipt_image: None,
                    date,
                    created_at: date,
                }
            })
            .collect()
    })
}

/// At most one budget per category; a `None` slot leaves the category unbudgeted.
fn arb_budgets() -> impl Strategy<Value = Vec<Budget>> {
    proptest::collection::vec(
        proptest::option::of(1i64..1_000_000),
        CATEGORY_IDS.len(),
    )
    .prop_map(|slots| {
        slots
            .into_iter()
            .enumerate()
            .filter_map(|(i, slot)| {
                slot.map(|amount_cents| Budget {
                    id: format!("b{}", i),
                    category_id: Some(CATEGORY_IDS[i].to_string()),
                    amount: cents(amount_cents),
                    period: BudgetPeriod::Monthly,
                    household_id: "hh1".to_string(),
                    created_at: month_start(),
                })
            })
            .collect()
    })
}

fn in_window(expense: &Expense) -> bool {
    expense.date >= month_start() && expense.date <= reference_date()
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Total spent is the exact sum of this month's expenses.
    #[test]
    fn prop_total_spent_is_sum_of_monthly_expenses(
        expenses in arb_expenses(40),
        budgets in arb_budgets(),
    ) {
        let result = compute_dashboard(&categories(), &budgets, &expenses, reference_date());

        let expected: Decimal = expenses.iter().filter(|e| in_window(e)).map(|e| e.amount).sum();
        prop_assert_eq!(result.summary.spent, expected);
    }

    /// Expenses outside the current month never change the total.
    #[test]
    fn prop_out_of_window_expense_does_not_change_total(
        expenses in arb_expenses(20),
        amount_cents in 0i64..500_000,
        seconds_before_month in 1i64..(90 * 24 * 3600),
    ) {
        let before = compute_dashboard(&categories(), &[], &expenses, reference_date());

        let date = month_start() - Duration::seconds(seconds_before_month);
        let mut extended = expenses.clone();
        extended.push(Expense {
            id: "outside".to_string(),
            amount: cents(amount_cents),
            description: "last month".to_string(),
            category_id: Some(CATEGORY_IDS[0].to_string()),
            user_id: None,
            household_id: "hh1".to_string(),
            is_shared: false,
            receipt_image: None,
            date,
            created_at: date,
        });
        let after = compute_dashboard(&categories(), &[], &extended, reference_date());

        prop_assert_eq!(before.summary.spent, after.summary.spent);
        prop_assert_eq!(before.category_progress, after.category_progress);
    }

    /// Percentage is the half-up rounded share of the budget and may exceed 100.
    #[test]
    fn prop_percentage_matches_rounded_share(
        expenses in arb_expenses(40),
        budgets in arb_budgets(),
    ) {
        let result = compute_dashboard(&categories(), &budgets, &expenses, reference_date());

        for progress in &result.category_progress {
            let budget = budgets
                .iter()
                .find(|b| b.category_id.as_deref() == Some(progress.id.as_str()));
            match budget {
                Some(budget) => {
                    let spent_cents: i128 = expenses
                        .iter()
                        .filter(|e| in_window(e) && e.category_id.as_deref() == Some(progress.id.as_str()))
                        .map(|e| e.amount.mantissa())
                        .sum();
                    let budget_cents = budget.amount.mantissa();
                    let expected = (200 * spent_cents + budget_cents) / (2 * budget_cents);
                    prop_assert_eq!(i128::from(progress.percentage), expected);
                }
                None => {
                    prop_assert_eq!(progress.percentage, 0);
                    prop_assert_eq!(progress.budget, Decimal::ZERO);
                }
            }
        }
    }

    /// Remaining is budget minus spent, for every category and the summary.
    #[test]
    fn prop_remaining_is_budget_minus_spent(
        expenses in arb_expenses(40),
        budgets in arb_budgets(),
    ) {
        let result = compute_dashboard(&categories(), &budgets, &expenses, reference_date());

        prop_assert_eq!(
            result.summary.remaining,
            result.summary.monthly_budget - result.summary.spent
        );
        for progress in &result.category_progress {
            prop_assert_eq!(progress.remaining, progress.budget - progress.spent);
        }
    }

    /// Recent expenses are capped at ten and sorted newest first.
    #[test]
    fn prop_recent_expenses_capped_and_sorted(expenses in arb_expenses(30)) {
        let result = compute_dashboard(&[], &[], &expenses, reference_date());

        prop_assert_eq!(result.recent_expenses.len(), expenses.len().min(10));
        for pair in result.recent_expenses.windows(2) {
            prop_assert!(pair[0].date >= pair[1].date);
        }
    }
}
