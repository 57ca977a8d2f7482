use async_trait::async_trait;

use super::households_model::{Household, NewHousehold, NewUser, User};
use crate::errors::Result;

/// Persistence contract for households and their members.
#[async_trait]
pub trait HouseholdRepositoryTrait: Send + Sync {
    async fn insert_household(&self, household: Household) -> Result<Household>;

    async fn get_household(&self, household_id: &str) -> Result<Option<Household>>;

    async fn insert_user(&self, user: User) -> Result<User>;

    async fn get_user(&self, user_id: &str) -> Result<Option<User>>;

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Members of a household. Unknown households yield an empty list.
    async fn list_members(&self, household_id: &str) -> Result<Vec<User>>;
}

#[async_trait]
pub trait HouseholdServiceTrait: Send + Sync {
    async fn create_household(&self, new_household: NewHousehold) -> Result<Household>;

    /// Fails with `NotFound` when the household does not exist.
    async fn get_household(&self, household_id: &str) -> Result<Household>;

    /// Adds a member. Usernames are unique across all households.
    async fn create_user(&self, new_user: NewUser) -> Result<User>;

    async fn list_members(&self, household_id: &str) -> Result<Vec<User>>;
}
