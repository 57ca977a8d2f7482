//! SQLite storage for crypto holdings.

mod model;
mod repository;

pub use model::CryptoHoldingDB;
pub use repository::CryptoHoldingRepository;
