use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Values guessed from a receipt. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptHints {
    pub amount: Option<Decimal>,
    pub date: Option<NaiveDate>,
    /// Suggested category name, matched against the household's categories.
    pub category: Option<String>,
}

impl ReceiptHints {
    pub fn is_empty(&self) -> bool {
        self.amount.is_none() && self.date.is_none() && self.category.is_none()
    }
}

/// Request body carrying OCR output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptText {
    pub text: String,
}
