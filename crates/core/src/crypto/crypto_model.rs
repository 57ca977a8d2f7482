//! Crypto holding domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Quantity of a crypto asset held by a household.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CryptoHolding {
    pub id: String,
    pub household_id: String,
    pub symbol: String,
    pub name: String,
    pub amount: Decimal,
    pub platform: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCryptoHolding {
    pub id: Option<String>,
    pub household_id: String,
    pub symbol: String,
    pub name: String,
    pub amount: String,
    pub platform: Option<String>,
}

/// Partial update. Absent fields keep their current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CryptoHoldingUpdate {
    pub symbol: Option<String>,
    pub name: Option<String>,
    pub amount: Option<String>,
    pub platform: Option<String>,
}

/// A holding joined with its looked-up price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValuedHolding {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub amount: Decimal,
    pub platform: Option<String>,
    pub price_usd: Decimal,
    pub usd_value: Decimal,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CryptoPortfolio {
    pub holdings: Vec<ValuedHolding>,
    pub total_usd_value: Decimal,
}
