//! SQLite storage for households and their members.

mod model;
mod repository;

pub use model::{HouseholdDB, UserDB};
pub use repository::HouseholdRepository;
