use async_trait::async_trait;
use budgetbuddy_market_data::ProviderRegistry;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::crypto_traits::PriceLookupTrait;
use crate::constants::VALUATION_CURRENCY;
use crate::errors::{Error, Result};

/// [`PriceLookupTrait`] backed by the market data provider registry.
pub struct MarketPriceLookup {
    registry: Arc<ProviderRegistry>,
}

impl MarketPriceLookup {
    pub fn new(registry: Arc<ProviderRegistry>) -> Self {
        MarketPriceLookup { registry }
    }
}

#[async_trait]
impl PriceLookupTrait for MarketPriceLookup {
    async fn get_price_usd(&self, symbol: &str) -> Result<Decimal> {
        let quote = self.registry.get_latest_quote(symbol).await?;
        if !quote.currency.eq_ignore_ascii_case(VALUATION_CURRENCY) {
            return Err(Error::Unexpected(format!(
                "Quote for {} is in {}, expected {}",
                symbol, quote.currency, VALUATION_CURRENCY
            )));
        }
        Ok(quote.close)
    }
}
