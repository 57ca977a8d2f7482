use async_trait::async_trait;

use budgetbuddy_core::errors::{DatabaseError, Error, Result};
use budgetbuddy_core::households::{Household, HouseholdRepositoryTrait, User};

use crate::tables::{collect, ensure_new_id};
use crate::MemoryStore;

#[async_trait]
impl HouseholdRepositoryTrait for MemoryStore {
    async fn insert_household(&self, household: Household) -> Result<Household> {
        let mut tables = self.tables.write().await;
        ensure_new_id(&tables.households, &household.id, "Household")?;
        tables.index_mut(&household.id);
        tables
            .households
            .insert(household.id.clone(), household.clone());
        Ok(household)
    }

    async fn get_household(&self, household_id: &str) -> Result<Option<Household>> {
        Ok(self.tables.read().await.households.get(household_id).cloned())
    }

    async fn insert_user(&self, user: User) -> Result<User> {
        let mut tables = self.tables.write().await;
        ensure_new_id(&tables.users, &user.id, "User")?;
        if tables.users.values().any(|u| u.username == user.username) {
            return Err(Error::Database(DatabaseError::UniqueViolation(format!(
                "username '{}' is taken",
                user.username
            ))));
        }
        tables.index_mut(&user.household_id).members.push(user.id.clone());
        tables.users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn get_user(&self, user_id: &str) -> Result<Option<User>> {
        Ok(self.tables.read().await.users.get(user_id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn list_members(&self, household_id: &str) -> Result<Vec<User>> {
        let tables = self.tables.read().await;
        Ok(tables
            .index(household_id)
            .map(|index| collect(&index.members, &tables.users))
            .unwrap_or_default())
    }
}
