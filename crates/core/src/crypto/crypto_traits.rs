use async_trait::async_trait;
use rust_decimal::Decimal;

use super::crypto_model::{CryptoHolding, CryptoHoldingUpdate, CryptoPortfolio, NewCryptoHolding};
use crate::errors::Result;

#[async_trait]
pub trait CryptoHoldingRepositoryTrait: Send + Sync {
    async fn insert_holding(&self, holding: CryptoHolding) -> Result<CryptoHolding>;

    async fn update_holding(&self, holding: CryptoHolding) -> Result<CryptoHolding>;

    /// Returns the number of deleted rows.
    async fn delete_holding(&self, holding_id: &str) -> Result<usize>;

    async fn get_holding(&self, holding_id: &str) -> Result<Option<CryptoHolding>>;

    async fn list_holdings(&self, household_id: &str) -> Result<Vec<CryptoHolding>>;
}

/// Source of current USD prices. Any error means "price unavailable".
#[async_trait]
pub trait PriceLookupTrait: Send + Sync {
    async fn get_price_usd(&self, symbol: &str) -> Result<Decimal>;
}

#[async_trait]
pub trait CryptoServiceTrait: Send + Sync {
    async fn create_holding(&self, new_holding: NewCryptoHolding) -> Result<CryptoHolding>;

    async fn update_holding(
        &self,
        holding_id: &str,
        update: CryptoHoldingUpdate,
    ) -> Result<CryptoHolding>;

    async fn delete_holding(&self, holding_id: &str) -> Result<()>;

    async fn list_holdings(&self, household_id: &str) -> Result<Vec<CryptoHolding>>;

    /// Holdings valued at current prices. Price failures never fail the
    /// call; the affected holdings are valued at zero.
    async fn get_portfolio(&self, household_id: &str) -> Result<CryptoPortfolio>;
}
