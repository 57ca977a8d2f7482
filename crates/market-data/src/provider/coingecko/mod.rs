//! CoinGecko provider for crypto prices.
//!
//! Uses the public `simple/price` endpoint. Tickers are mapped to CoinGecko
//! coin ids with a static table; other tickers are not supported.

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, StatusCode};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};

use crate::errors::MarketDataError;
use crate::models::Quote;
use crate::provider::MarketDataProvider;

/// Provider ID constant
const PROVIDER_ID: &str = "COINGECKO";

const BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// Header carrying a demo-plan API key
const API_KEY_HEADER: &str = "x-cg-demo-api-key";

/// Currency requested from the API, lower-case as the API expects it
const VS_CURRENCY: &str = "usd";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Ticker to CoinGecko coin id.
const COIN_IDS: &[(&str, &str)] = &[
    ("BTC", "bitcoin"),
    ("ETH", "ethereum"),
    ("XRP", "ripple"),
    ("SOL", "solana"),
    ("ADA", "cardano"),
    ("DOGE", "dogecoin"),
    ("DOT", "polkadot"),
    ("LTC", "litecoin"),
    ("USDT", "tether"),
    ("USDC", "usd-coin"),
    ("BNB", "binancecoin"),
    ("MATIC", "matic-network"),
    ("AVAX", "avalanche-2"),
    ("LINK", "chainlink"),
];

/// `{"bitcoin": {"usd": 65000.0}}`
type SimplePriceResponse = HashMap<String, HashMap<String, f64>>;

/// CoinGecko provider.
///
/// ```ignore
/// let provider = CoinGeckoProvider::new(Some("demo-key".to_string()));
/// ```
pub struct CoinGeckoProvider {
    client: Client,
    api_key: Option<String>,
}

impl CoinGeckoProvider {
    pub fn new(api_key: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, api_key }
    }

    fn coin_id(symbol: &str) -> Option<&'static str> {
        COIN_IDS
            .iter()
            .find(|(ticker, _)| ticker.eq_ignore_ascii_case(symbol))
            .map(|(_, id)| *id)
    }

    fn map_request_error(err: reqwest::Error) -> MarketDataError {
        if err.is_timeout() {
            MarketDataError::Timeout {
                provider: PROVIDER_ID.to_string(),
            }
        } else {
            MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: err.to_string(),
            }
        }
    }
}

/// Extracts the USD price of `coin_id` from a `simple/price` response.
fn price_from_response(
    response: &SimplePriceResponse,
    coin_id: &str,
    symbol: &str,
) -> Result<Decimal, MarketDataError> {
    let price = response
        .get(coin_id)
        .and_then(|prices| prices.get(VS_CURRENCY))
        .ok_or_else(|| MarketDataError::SymbolNotFound(symbol.to_string()))?;

    if !price.is_finite() || *price < 0.0 {
        return Err(MarketDataError::ValidationFailed {
            message: format!("{} returned an invalid price for {}: {}", PROVIDER_ID, symbol, price),
        });
    }

    Decimal::try_from(*price).map_err(|_| MarketDataError::ValidationFailed {
        message: format!("Failed to convert price of {} to decimal", symbol),
    })
}

#[async_trait]
impl MarketDataProvider for CoinGeckoProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn priority(&self) -> u8 {
        1
    }

    fn supports(&self, symbol: &str) -> bool {
        Self::coin_id(symbol).is_some()
    }

    async fn get_latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        let coin_id = Self::coin_id(symbol)
            .ok_or_else(|| MarketDataError::SymbolNotFound(symbol.to_string()))?;

        let url = format!("{}/simple/price", BASE_URL);
        let mut request = self
            .client
            .get(&url)
            .query(&[("ids", coin_id), ("vs_currencies", VS_CURRENCY)]);
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        debug!("Requesting {} price for {} ({})", PROVIDER_ID, symbol, coin_id);
        let response = request.send().await.map_err(Self::map_request_error)?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            warn!("{} rate limited the request for {}", PROVIDER_ID, symbol);
            return Err(MarketDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }
        if !status.is_success() {
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {}", status),
            });
        }

        let body: SimplePriceResponse = response.json().await.map_err(Self::map_request_error)?;
        let price = price_from_response(&body, coin_id, symbol)?;

        Ok(Quote::new(
            symbol.to_uppercase(),
            Utc::now(),
            price,
            "USD".to_string(),
            PROVIDER_ID.to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn parse(body: &str) -> SimplePriceResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_provider_id_and_priority() {
        let provider = CoinGeckoProvider::new(None);
        assert_eq!(provider.id(), "COINGECKO");
        assert_eq!(provider.priority(), 1);
    }

    #[test]
    fn test_supports_mapped_symbols_only() {
        let provider = CoinGeckoProvider::new(None);
        assert!(provider.supports("BTC"));
        assert!(provider.supports("xrp"));
        assert!(!provider.supports("NOTACOIN"));
    }

    #[test]
    fn test_coin_id_lookup() {
        assert_eq!(CoinGeckoProvider::coin_id("ETH"), Some("ethereum"));
        assert_eq!(CoinGeckoProvider::coin_id("USDC"), Some("usd-coin"));
        assert_eq!(CoinGeckoProvider::coin_id(""), None);
    }

    #[test]
    fn test_price_from_response() {
        let body = parse(r#"{"bitcoin": {"usd": 65000.5}}"#);
        let price = price_from_response(&body, "bitcoin", "BTC").unwrap();
        assert_eq!(price, dec!(65000.5));
    }

    #[test]
    fn test_missing_coin_is_symbol_not_found() {
        let body = parse(r#"{}"#);
        let err = price_from_response(&body, "ripple", "XRP").unwrap_err();
        assert!(matches!(err, MarketDataError::SymbolNotFound(s) if s == "XRP"));
    }

    #[test]
    fn test_negative_price_fails_validation() {
        let body = parse(r#"{"dogecoin": {"usd": -1.0}}"#);
        let err = price_from_response(&body, "dogecoin", "DOGE").unwrap_err();
        assert!(matches!(err, MarketDataError::ValidationFailed { .. }));
    }

    #[tokio::test]
    async fn test_unmapped_symbol_fails_without_request() {
        let provider = CoinGeckoProvider::new(None);
        let err = provider.get_latest_quote("NOTACOIN").await.unwrap_err();
        assert!(matches!(err, MarketDataError::SymbolNotFound(_)));
    }
}
