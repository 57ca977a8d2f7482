//! Market data provider trait definition.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::Quote;

/// Trait for price providers.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use budgetbuddy_market_data::{MarketDataError, MarketDataProvider, Quote};
///
/// struct MyProvider;
///
/// #[async_trait]
/// impl MarketDataProvider for MyProvider {
///     fn id(&self) -> &'static str {
///         "MY_PROVIDER"
///     }
///
///     async fn get_latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
///         // ...
///     }
/// }
/// ```
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier such as `"COINGECKO"`. Used for logging and as the
    /// quote source.
    fn id(&self) -> &'static str;

    /// Lower values are asked first. Default is 10.
    fn priority(&self) -> u8 {
        10
    }

    /// Whether the provider can price `symbol` at all. The registry skips
    /// providers that return `false`.
    fn supports(&self, _symbol: &str) -> bool {
        true
    }

    /// Fetch the latest USD quote for an upper-case symbol.
    async fn get_latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError>;
}
