//! Provider registry module.
//!
//! - Provider ordering by priority and symbol support
//! - Fallback to the next provider based on [`RetryClass`](crate::RetryClass)
//! - Short-lived quote cache

mod quote_cache;
mod registry;

pub use quote_cache::QuoteCache;
pub use registry::ProviderRegistry;
