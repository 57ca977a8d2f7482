use std::collections::HashMap;

use budgetbuddy_core::budgets::Budget;
use budgetbuddy_core::categories::Category;
use budgetbuddy_core::crypto::CryptoHolding;
use budgetbuddy_core::errors::{DatabaseError, Error, Result};
use budgetbuddy_core::expenses::Expense;
use budgetbuddy_core::households::{Household, User};

/// Ids of one household's records, in insertion order.
#[derive(Default)]
pub(crate) struct HouseholdIndex {
    pub members: Vec<String>,
    pub categories: Vec<String>,
    pub budgets: Vec<String>,
    pub expenses: Vec<String>,
    pub holdings: Vec<String>,
}

#[derive(Default)]
pub(crate) struct Tables {
    pub households: HashMap<String, Household>,
    pub users: HashMap<String, User>,
    pub categories: HashMap<String, Category>,
    pub budgets: HashMap<String, Budget>,
    pub expenses: HashMap<String, Expense>,
    pub holdings: HashMap<String, CryptoHolding>,
    pub by_household: HashMap<String, HouseholdIndex>,
}

impl Tables {
    pub fn clear(&mut self) {
        *self = Tables::default();
    }

    pub fn index_mut(&mut self, household_id: &str) -> &mut HouseholdIndex {
        self.by_household
            .entry(household_id.to_string())
            .or_default()
    }

    pub fn index(&self, household_id: &str) -> Option<&HouseholdIndex> {
        self.by_household.get(household_id)
    }
}

/// Resolves indexed ids against a table, skipping ids that are gone.
pub(crate) fn collect<T: Clone>(ids: &[String], table: &HashMap<String, T>) -> Vec<T> {
    ids.iter().filter_map(|id| table.get(id)).cloned().collect()
}

pub(crate) fn ensure_new_id<T>(table: &HashMap<String, T>, id: &str, entity: &str) -> Result<()> {
    if table.contains_key(id) {
        return Err(Error::Database(DatabaseError::UniqueViolation(format!(
            "{} '{}' already exists",
            entity, id
        ))));
    }
    Ok(())
}

pub(crate) fn not_found(entity: &str, id: &str) -> Error {
    Error::Database(DatabaseError::NotFound(format!("{} '{}'", entity, id)))
}
