//! In-memory cache of latest quotes.
//!
//! Entries expire after a fixed time-to-live. The cache is process-local and
//! starts empty on every restart.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

use crate::models::Quote;

/// Default lifetime of a cached quote.
pub const DEFAULT_QUOTE_TTL: Duration = Duration::from_secs(60);

struct CachedQuote {
    quote: Quote,
    fetched_at: Instant,
}

pub struct QuoteCache {
    entries: RwLock<HashMap<String, CachedQuote>>,
    ttl: Duration,
}

impl QuoteCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Returns the cached quote for `symbol` if it is younger than the TTL.
    pub async fn get(&self, symbol: &str) -> Option<Quote> {
        let entries = self.entries.read().await;
        entries
            .get(symbol)
            .filter(|cached| cached.fetched_at.elapsed() < self.ttl)
            .map(|cached| cached.quote.clone())
    }

    pub async fn insert(&self, symbol: &str, quote: Quote) {
        let mut entries = self.entries.write().await;
        entries.insert(
            symbol.to_string(),
            CachedQuote {
                quote,
                fetched_at: Instant::now(),
            },
        );
    }

    /// Drops expired entries.
    pub async fn purge_expired(&self) {
        let ttl = self.ttl;
        self.entries
            .write()
            .await
            .retain(|_, cached| cached.fetched_at.elapsed() < ttl);
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

impl Default for QuoteCache {
    fn default() -> Self {
        Self::new(DEFAULT_QUOTE_TTL)
    }
}
