use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Latest price of a symbol as reported by a provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Upper-case ticker, e.g. `BTC`.
    pub symbol: String,

    pub timestamp: DateTime<Utc>,

    /// Current price in `currency`.
    pub close: Decimal,

    /// Quote currency
    pub currency: String,

    /// Provider that produced the quote (COINGECKO, FIXED, ...)
    pub source: String,
}

impl Quote {
    pub fn new(
        symbol: String,
        timestamp: DateTime<Utc>,
        close: Decimal,
        currency: String,
        source: String,
    ) -> Self {
        Self {
            symbol,
            timestamp,
            close,
            currency,
            source,
        }
    }
}
