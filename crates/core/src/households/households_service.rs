use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};
use std::sync::Arc;
use uuid::Uuid;

use super::households_model::{Household, NewHousehold, NewUser, User};
use super::households_traits::{HouseholdRepositoryTrait, HouseholdServiceTrait};
use crate::errors::{Error, Result, ValidationError};

pub struct HouseholdService {
    repository: Arc<dyn HouseholdRepositoryTrait>,
}

impl HouseholdService {
    pub fn new(repository: Arc<dyn HouseholdRepositoryTrait>) -> Self {
        HouseholdService { repository }
    }
}

fn required(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field.to_string()).into());
    }
    Ok(trimmed.to_string())
}

#[async_trait]
impl HouseholdServiceTrait for HouseholdService {
    async fn create_household(&self, new_household: NewHousehold) -> Result<Household> {
        let name = required("name", &new_household.name)?;
        let id = new_household
            .id
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        if self.repository.get_household(&id).await?.is_some() {
            return Err(Error::ConstraintViolation(format!(
                "Household '{}' already exists",
                id
            )));
        }

        info!("Creating household {}", id);
        self.repository
            .insert_household(Household {
                id,
                name,
                created_at: Utc::now(),
            })
            .await
    }

    async fn get_household(&self, household_id: &str) -> Result<Household> {
        self.repository
            .get_household(household_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Household '{}'", household_id)))
    }

    async fn create_user(&self, new_user: NewUser) -> Result<User> {
        let username = required("username", &new_user.username)?;

        if self.repository.get_household(&new_user.household_id).await?.is_none() {
            return Err(Error::NotFound(format!(
                "Household '{}'",
                new_user.household_id
            )));
        }
        if self
            .repository
            .get_user_by_username(&username)
            .await?
            .is_some()
        {
            return Err(Error::ConstraintViolation(format!(
                "Username '{}' is already taken",
                username
            )));
        }

        let user = User {
            id: new_user.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            username,
            household_id: new_user.household_id,
            avatar: new_user.avatar,
        };
        debug!("Adding member {} to household {}", user.id, user.household_id);
        self.repository.insert_user(user).await
    }

    async fn list_members(&self, household_id: &str) -> Result<Vec<User>> {
        self.repository.list_members(household_id).await
    }
}
