//! Households module - domain models, services, and traits.

mod households_model;
mod households_service;
mod households_traits;

#[cfg(test)]
mod households_service_tests;

pub use households_model::{Household, NewHousehold, NewUser, User};
pub use households_service::HouseholdService;
pub use households_traits::{HouseholdRepositoryTrait, HouseholdServiceTrait};
