//! Crypto module - holdings, price lookup and portfolio valuation.

mod crypto_model;
mod crypto_service;
mod crypto_traits;
mod market_price_lookup;
mod valuation;


pub use crypto_model::{
    CryptoHolding, CryptoHoldingUpdate, CryptoPortfolio, NewCryptoHolding, ValuedHolding,
};
pub use crypto_service::CryptoService;
pub use crypto_traits::{CryptoHoldingRepositoryTrait, CryptoServiceTrait, PriceLookupTrait};
pub use market_price_lookup::MarketPriceLookup;
pub use valuation::{valuate, valuate_with_prices};
