//! Market data models.

mod quote;

pub use quote::Quote;
