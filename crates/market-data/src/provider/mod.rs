//! Price provider abstraction and implementations.
//!
//! Providers are independent of each other; ordering and fallback are the
//! registry's job.

mod traits;

pub mod coingecko;
pub mod fixed;

pub use traits::MarketDataProvider;
