use chrono::NaiveDateTime;
use diesel::prelude::*;

use budgetbuddy_core::crypto::CryptoHolding;

use crate::utils::parse_stored_decimal;

#[derive(
    Queryable, Selectable, Insertable, Identifiable, AsChangeset, PartialEq, Debug, Clone,
)]
#[diesel(table_name = crate::schema::crypto_holdings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct CryptoHoldingDB {
    pub id: String,
    pub household_id: String,
    pub symbol: String,
    pub name: String,
    pub amount: String,
    pub platform: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<CryptoHoldingDB> for CryptoHolding {
    fn from(db: CryptoHoldingDB) -> Self {
        Self {
            amount: parse_stored_decimal("crypto_holdings.amount", &db.amount),
            id: db.id,
            household_id: db.household_id,
            symbol: db.symbol,
            name: db.name,
            platform: db.platform,
            created_at: db.created_at.and_utc(),
            updated_at: db.updated_at.and_utc(),
        }
    }
}

impl From<CryptoHolding> for CryptoHoldingDB {
    fn from(domain: CryptoHolding) -> Self {
        Self {
            id: domain.id,
            household_id: domain.household_id,
            symbol: domain.symbol,
            name: domain.name,
            amount: domain.amount.to_string(),
            platform: domain.platform,
            created_at: domain.created_at.naive_utc(),
            updated_at: domain.updated_at.naive_utc(),
        }
    }
}
