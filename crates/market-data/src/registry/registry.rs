//! Provider registry for orchestrating price providers.
//!
//! The registry manages multiple providers, handling:
//! - Provider selection based on symbol support and priority
//! - Fallback to alternative providers on failure
//! - Caching of successful quotes

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};

use super::quote_cache::QuoteCache;
use crate::errors::{MarketDataError, RetryClass};
use crate::models::Quote;
use crate::provider::MarketDataProvider;

/// Provider registry for orchestrating price lookups.
pub struct ProviderRegistry {
    providers: Vec<Arc<dyn MarketDataProvider>>,
    cache: QuoteCache,
}

impl ProviderRegistry {
    /// Create a registry with the default cache lifetime.
    pub fn new(providers: Vec<Arc<dyn MarketDataProvider>>) -> Self {
        Self {
            providers,
            cache: QuoteCache::default(),
        }
    }

    /// Create a registry whose quotes stay cached for `ttl`.
    pub fn with_cache_ttl(providers: Vec<Arc<dyn MarketDataProvider>>, ttl: Duration) -> Self {
        Self {
            providers,
            cache: QuoteCache::new(ttl),
        }
    }

    /// Fetch the latest quote for a symbol.
    ///
    /// 1. Return a cached quote if one is still fresh
    /// 2. Ask providers that support the symbol, by priority
    /// 3. On failure, try the next provider unless the error is terminal
    /// 4. Cache the first successful quote
    pub async fn get_latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        let symbol = symbol.trim().to_uppercase();

        if let Some(quote) = self.cache.get(&symbol).await {
            debug!("Cache hit for '{}' from '{}'", symbol, quote.source);
            return Ok(quote);
        }

        let providers = self.ordered_providers(&symbol);
        if providers.is_empty() {
            warn!("No providers available for symbol: {}", symbol);
            return Err(MarketDataError::NoProvidersAvailable);
        }

        let mut last_error: Option<MarketDataError> = None;

        for provider in providers {
            let provider_id = provider.id();

            match provider.get_latest_quote(&symbol).await {
                Ok(quote) => {
                    if quote.close.is_sign_negative() {
                        warn!(
                            "Provider '{}' returned a negative price for '{}'",
                            provider_id, symbol
                        );
                        last_error = Some(MarketDataError::ValidationFailed {
                            message: format!("negative price for {}", symbol),
                        });
                        continue;
                    }

                    debug!("Fetched '{}' from '{}'", symbol, provider_id);
                    self.cache.insert(&symbol, quote.clone()).await;
                    return Ok(quote);
                }
                Err(e) => match e.retry_class() {
                    RetryClass::Never => {
                        info!(
                            "Terminal error from '{}': {:?}, not retrying",
                            provider_id, e
                        );
                        return Err(e);
                    }
                    RetryClass::WithBackoff => {
                        warn!(
                            "Provider '{}' is backing off ({}), trying next provider",
                            provider_id, e
                        );
                        last_error = Some(e);
                    }
                    RetryClass::NextProvider => {
                        info!(
                            "Provider '{}' failed with {:?}, trying next provider",
                            provider_id, e
                        );
                        last_error = Some(e);
                    }
                },
            }
        }

        Err(last_error.unwrap_or(MarketDataError::AllProvidersFailed))
    }

    /// Providers that support `symbol`, lowest priority value first.
    fn ordered_providers(&self, symbol: &str) -> Vec<&Arc<dyn MarketDataProvider>> {
        let mut providers: Vec<_> = self
            .providers
            .iter()
            .filter(|p| p.supports(symbol))
            .collect();
        providers.sort_by_key(|p| p.priority());
        providers
    }

    /// Get the list of registered providers.
    pub fn providers(&self) -> &[Arc<dyn MarketDataProvider>] {
        &self.providers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Clone, Copy)]
    enum Behavior {
        Succeed(Decimal),
        ProviderError,
        RateLimited,
        NotFound,
    }

    struct MockProvider {
        id: &'static str,
        priority: u8,
        symbols: &'static [&'static str],
        behavior: Behavior,
        call_count: AtomicUsize,
    }

    impl MockProvider {
        fn new(id: &'static str, priority: u8, behavior: Behavior) -> Self {
            Self {
                id,
                priority,
                symbols: &["BTC", "ETH"],
                behavior,
                call_count: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }
    }

    #[async_trait::async_trait]
    impl MarketDataProvider for MockProvider {
        fn id(&self) -> &'static str {
            self.id
        }

        fn priority(&self) -> u8 {
            self.priority
        }

        fn supports(&self, symbol: &str) -> bool {
            self.symbols.contains(&symbol)
        }

        async fn get_latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
            self.call_count.fetch_add(1, Ordering::SeqCst);

            match self.behavior {
                Behavior::Succeed(price) => Ok(Quote::new(
                    symbol.to_string(),
                    Utc::now(),
                    price,
                    "USD".to_string(),
                    self.id.to_string(),
                )),
                Behavior::ProviderError => Err(MarketDataError::ProviderError {
                    provider: self.id.to_string(),
                    message: "Mock failure".to_string(),
                }),
                Behavior::RateLimited => Err(MarketDataError::RateLimited {
                    provider: self.id.to_string(),
                }),
                Behavior::NotFound => Err(MarketDataError::SymbolNotFound(symbol.to_string())),
            }
        }
    }

    #[tokio::test]
    async fn test_provider_ordering_by_priority() {
        let low = Arc::new(MockProvider::new("LOW_PRIORITY", 20, Behavior::Succeed(dec!(1))));
        let high = Arc::new(MockProvider::new("HIGH_PRIORITY", 5, Behavior::Succeed(dec!(2))));
        let registry = ProviderRegistry::new(vec![low.clone(), high.clone()]);

        let quote = registry.get_latest_quote("btc").await.unwrap();

        assert_eq!(quote.source, "HIGH_PRIORITY");
        assert_eq!(quote.close, dec!(2));
        assert_eq!(low.calls(), 0);
    }

    #[tokio::test]
    async fn test_falls_back_on_provider_error() {
        let failing = Arc::new(MockProvider::new("FAILING", 1, Behavior::ProviderError));
        let backup = Arc::new(MockProvider::new("BACKUP", 2, Behavior::Succeed(dec!(3000))));
        let registry = ProviderRegistry::new(vec![failing.clone(), backup.clone()]);

        let quote = registry.get_latest_quote("ETH").await.unwrap();

        assert_eq!(quote.source, "BACKUP");
        assert_eq!(failing.calls(), 1);
        assert_eq!(backup.calls(), 1);
    }

    #[tokio::test]
    async fn test_falls_back_on_rate_limit() {
        let limited = Arc::new(MockProvider::new("LIMITED", 1, Behavior::RateLimited));
        let backup = Arc::new(MockProvider::new("BACKUP", 2, Behavior::Succeed(dec!(5))));
        let registry = ProviderRegistry::new(vec![limited, backup]);

        let quote = registry.get_latest_quote("BTC").await.unwrap();
        assert_eq!(quote.source, "BACKUP");
    }

    #[tokio::test]
    async fn test_terminal_error_stops_the_chain() {
        let not_found = Arc::new(MockProvider::new("FIRST", 1, Behavior::NotFound));
        let backup = Arc::new(MockProvider::new("BACKUP", 2, Behavior::Succeed(dec!(5))));
        let registry = ProviderRegistry::new(vec![not_found, backup.clone()]);

        let err = registry.get_latest_quote("BTC").await.unwrap_err();

        assert!(matches!(err, MarketDataError::SymbolNotFound(_)));
        assert_eq!(backup.calls(), 0);
    }

    #[tokio::test]
    async fn test_all_failing_returns_last_error() {
        let first = Arc::new(MockProvider::new("FIRST", 1, Behavior::ProviderError));
        let second = Arc::new(MockProvider::new("SECOND", 2, Behavior::RateLimited));
        let registry = ProviderRegistry::new(vec![first, second]);

        let err = registry.get_latest_quote("BTC").await.unwrap_err();
        assert!(matches!(err, MarketDataError::RateLimited { .. }));
    }

    #[tokio::test]
    async fn test_unsupported_symbol_has_no_providers() {
        let provider = Arc::new(MockProvider::new("ONLY", 1, Behavior::Succeed(dec!(1))));
        let registry = ProviderRegistry::new(vec![provider.clone()]);

        let err = registry.get_latest_quote("XRP").await.unwrap_err();

        assert!(matches!(err, MarketDataError::NoProvidersAvailable));
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn test_negative_price_is_rejected_and_next_provider_used() {
        let broken = Arc::new(MockProvider::new("BROKEN", 1, Behavior::Succeed(dec!(-1))));
        let backup = Arc::new(MockProvider::new("BACKUP", 2, Behavior::Succeed(dec!(7))));
        let registry = ProviderRegistry::new(vec![broken, backup]);

        let quote = registry.get_latest_quote("BTC").await.unwrap();
        assert_eq!(quote.close, dec!(7));
    }

    #[tokio::test]
    async fn test_quotes_are_cached() {
        let provider = Arc::new(MockProvider::new("ONLY", 1, Behavior::Succeed(dec!(1))));
        let registry =
            ProviderRegistry::with_cache_ttl(vec![provider.clone()], Duration::from_secs(60));

        registry.get_latest_quote("BTC").await.unwrap();
        registry.get_latest_quote("btc").await.unwrap();

        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_zero_ttl_disables_cache() {
        let provider = Arc::new(MockProvider::new("ONLY", 1, Behavior::Succeed(dec!(1))));
        let registry = ProviderRegistry::with_cache_ttl(vec![provider.clone()], Duration::ZERO);

        registry.get_latest_quote("BTC").await.unwrap();
        registry.get_latest_quote("BTC").await.unwrap();

        assert_eq!(provider.calls(), 2);
    }
}
