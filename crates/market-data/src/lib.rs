//! BudgetBuddy Market Data Crate
//!
//! Latest USD prices for crypto holdings.
//!
//! # Overview
//!
//! - [`MarketDataProvider`] is implemented once per price source.
//!   [`CoinGeckoProvider`] queries the CoinGecko simple price API and
//!   [`FixedPriceProvider`] serves a static table (offline use, tests).
//! - [`ProviderRegistry`] asks the providers in priority order, falls back to
//!   the next one when an error allows it, and caches successful quotes for
//!   a configurable time.
//!
//! ```text
//! symbol --> ProviderRegistry --(cache hit)--> Quote
//!                  |
//!                  v
//!       providers by priority (CoinGecko, Fixed, ...)
//! ```

pub mod errors;
pub mod models;
pub mod provider;
pub mod registry;

pub use errors::{MarketDataError, RetryClass};
pub use models::Quote;
pub use provider::coingecko::CoinGeckoProvider;
pub use provider::fixed::FixedPriceProvider;
pub use provider::MarketDataProvider;
pub use registry::{ProviderRegistry, QuoteCache};
