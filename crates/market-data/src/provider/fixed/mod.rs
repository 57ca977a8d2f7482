//! Provider serving prices from a static table.
//!
//! Configured from text such as `BTC=65000,ETH=3000`. Useful without network
//! access and as a last-resort fallback.

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::str::FromStr;

use crate::errors::MarketDataError;
use crate::models::Quote;
use crate::provider::MarketDataProvider;

const PROVIDER_ID: &str = "FIXED";

/// Asked after live providers unless configured otherwise.
const DEFAULT_PRIORITY: u8 = 50;

pub struct FixedPriceProvider {
    prices: HashMap<String, Decimal>,
    priority: u8,
}

impl FixedPriceProvider {
    pub fn new(prices: HashMap<String, Decimal>) -> Self {
        let prices = prices
            .into_iter()
            .map(|(symbol, price)| (symbol.trim().to_uppercase(), price))
            .collect();
        Self {
            prices,
            priority: DEFAULT_PRIORITY,
        }
    }

    /// Parses `SYMBOL=PRICE` pairs separated by commas. Blank entries are
    /// ignored.
    pub fn from_spec(spec: &str) -> Result<Self, MarketDataError> {
        let mut prices = HashMap::new();
        for entry in spec.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (symbol, price) =
                entry
                    .split_once('=')
                    .ok_or_else(|| MarketDataError::ValidationFailed {
                        message: format!("expected SYMBOL=PRICE, got '{}'", entry),
                    })?;
            let symbol = symbol.trim();
            let price = Decimal::from_str(price.trim()).map_err(|e| {
                MarketDataError::ValidationFailed {
                    message: format!("invalid price for {}: {}", symbol, e),
                }
            })?;
            if symbol.is_empty() || price.is_sign_negative() {
                return Err(MarketDataError::ValidationFailed {
                    message: format!("invalid fixed price entry '{}'", entry),
                });
            }
            prices.insert(symbol.to_string(), price);
        }
        Ok(Self::new(prices))
    }

    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

#[async_trait]
impl MarketDataProvider for FixedPriceProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn priority(&self) -> u8 {
        self.priority
    }

    fn supports(&self, symbol: &str) -> bool {
        self.prices.contains_key(&symbol.to_uppercase())
    }

    async fn get_latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        let symbol = symbol.to_uppercase();
        let price = self
            .prices
            .get(&symbol)
            .copied()
            .ok_or_else(|| MarketDataError::SymbolNotFound(symbol.clone()))?;

        Ok(Quote::new(
            symbol,
            Utc::now(),
            price,
            "USD".to_string(),
            PROVIDER_ID.to_string(),
        ))
    }
}
