//! Receipts module - hint extraction from OCR text.
//!
//! The OCR itself runs outside this crate. What arrives here is the raw text,
//! from which an amount, a purchase date and a suggested category name are
//! guessed. The hints are optional inputs to expense creation.

mod receipt_parser;
mod receipts_model;

pub use receipt_parser::extract_receipt_hints;
pub use receipts_model::{ReceiptHints, ReceiptText};
