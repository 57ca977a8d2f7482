use chrono::NaiveDateTime;
use diesel::prelude::*;

use budgetbuddy_core::expenses::Expense;

use crate::utils::parse_stored_decimal;

#[derive(Queryable, Selectable, Insertable, Identifiable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::expenses)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ExpenseDB {
    pub id: String,
    pub household_id: String,
    pub amount: String,
    pub description: String,
    pub category_id: Option<String>,
    pub user_id: Option<String>,
    pub is_shared: bool,
    pub receipt_image: Option<String>,
    pub date: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

impl From<ExpenseDB> for Expense {
    fn from(db: ExpenseDB) -> Self {
        Self {
            amount: parse_stored_decimal("expenses.amount", &db.amount),
            id: db.id,
            description: db.description,
            category_id: db.category_id,
            user_id: db.user_id,
            household_id: db.household_id,
            is_shared: db.is_shared,
            receipt_image: db.receipt_image,
            date: db.date.and_utc(),
            created_at: db.created_at.and_utc(),
        }
    }
}

impl From<Expense> for ExpenseDB {
    fn from(domain: Expense) -> Self {
        Self {
            id: domain.id,
            household_id: domain.household_id,
            amount: domain.amount.to_string(),
            description: domain.description,
            category_id: domain.category_id,
            user_id: domain.user_id,
            is_shared: domain.is_shared,
            receipt_image: domain.receipt_image,
            date: domain.date.naive_utc(),
            created_at: domain.created_at.naive_utc(),
        }
    }
}
