use futures::future::join_all;
use log::warn;
use rust_decimal::Decimal;
use std::collections::{BTreeSet, HashMap};

use super::crypto_model::{CryptoHolding, CryptoPortfolio, ValuedHolding};
use super::crypto_traits::PriceLookupTrait;
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::utils::saturating_sum;

/// Looks up every distinct symbol concurrently, then values the holdings.
///
/// A failed lookup is logged and the symbol is treated as unpriced.
pub async fn valuate(
    holdings: Vec<CryptoHolding>,
    price_lookup: &dyn PriceLookupTrait,
) -> CryptoPortfolio {
    let symbols: BTreeSet<&str> = holdings.iter().map(|h| h.symbol.as_str()).collect();

    let lookups = symbols.into_iter().map(|symbol| async move {
        match price_lookup.get_price_usd(symbol).await {
            Ok(price) => Some((symbol.to_string(), price)),
            Err(e) => {
                warn!("Price unavailable for {}: {}", symbol, e);
                None
            }
        }
    });
    let prices: HashMap<String, Decimal> = join_all(lookups).await.into_iter().flatten().collect();

    valuate_with_prices(holdings, &prices)
}

/// Joins holdings with known prices. Holdings without a price keep their
/// place in the output with `priceUsd = 0` and `usdValue = 0`.
pub fn valuate_with_prices(
    holdings: Vec<CryptoHolding>,
    prices: &HashMap<String, Decimal>,
) -> CryptoPortfolio {
    let valued: Vec<ValuedHolding> = holdings
        .into_iter()
        .map(|h| {
            let price_usd = prices.get(&h.symbol).copied().unwrap_or(Decimal::ZERO);
            let usd_value = h
                .amount
                .saturating_mul(price_usd)
                .round_dp(DISPLAY_DECIMAL_PRECISION);
            ValuedHolding {
                id: h.id,
                symbol: h.symbol,
                name: h.name,
                amount: h.amount,
                platform: h.platform,
                price_usd,
                usd_value,
            }
        })
        .collect();

    let total_usd_value = saturating_sum(valued.iter().map(|h| h.usd_value));

    CryptoPortfolio {
        holdings: valued,
        total_usd_value,
    }
}
