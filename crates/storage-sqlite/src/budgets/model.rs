//! Database model for budgets.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use budgetbuddy_core::budgets::Budget;

use crate::utils::{parse_stored_decimal, parse_stored_period};

/// Budget row. `amount` holds the decimal as text and `period` its
/// lowercase name.
#[derive(
    Queryable, Selectable, Insertable, Identifiable, AsChangeset, PartialEq, Debug, Clone,
)]
#[diesel(table_name = crate::schema::budgets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct BudgetDB {
    pub id: String,
    pub household_id: String,
    pub category_id: Option<String>,
    pub amount: String,
    pub period: String,
    pub created_at: NaiveDateTime,
}

impl From<BudgetDB> for Budget {
    fn from(db: BudgetDB) -> Self {
        Self {
            amount: parse_stored_decimal("budgets.amount", &db.amount),
            period: parse_stored_period(&db.period),
            id: db.id,
            category_id: db.category_id,
            household_id: db.household_id,
            created_at: db.created_at.and_utc(),
        }
    }
}

impl From<Budget> for BudgetDB {
    fn from(domain: Budget) -> Self {
        Self {
            id: domain.id,
            household_id: domain.household_id,
            category_id: domain.category_id,
            amount: domain.amount.to_string(),
            period: domain.period.as_str().to_string(),
            created_at: domain.created_at.naive_utc(),
        }
    }
}
