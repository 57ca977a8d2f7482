//! HTTP API for BudgetBuddy.
//!
//! The binary in `main.rs` is a thin wrapper; everything needed to build
//! the router is exposed here so integration tests can drive it in-process.

pub mod api;
pub mod config;
pub mod error;
pub mod main_lib;

pub use main_lib::{build_state, init_tracing, AppState};
