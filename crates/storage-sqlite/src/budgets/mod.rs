//! SQLite storage for budgets.

mod model;
mod repository;

pub use model::BudgetDB;
pub use repository::BudgetRepository;
