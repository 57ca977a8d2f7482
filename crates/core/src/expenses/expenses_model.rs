//! Expense domain models.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::households::User;
use crate::receipts::ReceiptHints;

/// A single recorded outflow of money.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub amount: Decimal,
    pub description: String,
    pub category_id: Option<String>,
    pub user_id: Option<String>,
    pub household_id: String,
    pub is_shared: bool,
    pub receipt_image: Option<String>,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Input model for recording an expense.
///
/// `amount` is text so malformed values can be rejected with a field-level
/// message. Fields left empty may be filled from `receipt_hints`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub id: Option<String>,
    pub household_id: String,
    pub amount: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<String>,
    pub user_id: Option<String>,
    #[serde(default)]
    pub is_shared: bool,
    pub receipt_image: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub receipt_hints: Option<ReceiptHints>,
}

/// The member who recorded an expense, as shown next to it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseUser {
    pub id: String,
    pub username: String,
    pub avatar: Option<String>,
}

impl From<&User> for ExpenseUser {
    fn from(user: &User) -> Self {
        ExpenseUser {
            id: user.id.clone(),
            username: user.username.clone(),
            avatar: user.avatar.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseWithUser {
    #[serde(flatten)]
    pub expense: Expense,
    pub user: Option<ExpenseUser>,
}

/// Ordering used wherever expenses are listed: latest `date` first, then
/// latest `created_at`, then descending id so equal timestamps stay stable.
pub fn newest_first(a: &Expense, b: &Expense) -> Ordering {
    b.date
        .cmp(&a.date)
        .then_with(|| b.created_at.cmp(&a.created_at))
        .then_with(|| b.id.cmp(&a.id))
}
