//! Unit tests for the household service.

use super::*;
use crate::errors::{Error, Result, ValidationError};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};

// =============================================================================
// Mock Implementations
// =============================================================================

#[derive(Default)]
struct MockHouseholdRepository {
    households: Mutex<Vec<Household>>,
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl HouseholdRepositoryTrait for MockHouseholdRepository {
    async fn insert_household(&self, household: Household) -> Result<Household> {
        self.households.lock().unwrap().push(household.clone());
        Ok(household)
    }

    async fn get_household(&self, household_id: &str) -> Result<Option<Household>> {
        Ok(self
            .households
            .lock()
            .unwrap()
            .iter()
            .find(|h| h.id == household_id)
            .cloned())
    }

    async fn insert_user(&self, user: User) -> Result<User> {
        self.users.lock().unwrap().push(user.clone());
        Ok(user)
    }

    async fn get_user(&self, user_id: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == user_id)
            .cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn list_members(&self, household_id: &str) -> Result<Vec<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| u.household_id == household_id)
            .cloned()
            .collect())
    }
}

fn create_service_with_household(id: &str) -> HouseholdService {
    let repo = MockHouseholdRepository::default();
    repo.households.lock().unwrap().push(Household {
        id: id.to_string(),
        name: "The Johnsons".to_string(),
        created_at: Utc::now(),
    });
    HouseholdService::new(Arc::new(repo))
}

fn new_user(username: &str, household_id: &str) -> NewUser {
    NewUser {
        id: None,
        username: username.to_string(),
        household_id: household_id.to_string(),
        avatar: None,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn test_create_household_generates_id() {
    let service = HouseholdService::new(Arc::new(MockHouseholdRepository::default()));
    let household = service
        .create_household(NewHousehold {
            id: None,
            name: "  The Smiths ".to_string(),
        })
        .await
        .unwrap();

    assert!(!household.id.is_empty());
    assert_eq!(household.name, "The Smiths");
}

#[tokio::test]
async fn test_create_household_rejects_duplicate_id() {
    let service = create_service_with_household("hh1");
    let err = service
        .create_household(NewHousehold {
            id: Some("hh1".to_string()),
            name: "Again".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, Error::ConstraintViolation(_)));
}

#[tokio::test]
async fn test_get_unknown_household_is_not_found() {
    let service = create_service_with_household("hh1");
    let err = service.get_household("nope").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_create_user_requires_existing_household() {
    let service = create_service_with_household("hh1");
    let err = service.create_user(new_user("sarah", "hh2")).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_usernames_are_unique() {
    let service = create_service_with_household("hh1");
    service.create_user(new_user("sarah", "hh1")).await.unwrap();

    let err = service.create_user(new_user("sarah", "hh1")).await.unwrap_err();
    assert!(matches!(err, Error::ConstraintViolation(_)));
}

#[tokio::test]
async fn test_blank_username_is_a_validation_error() {
    let service = create_service_with_household("hh1");
    let err = service.create_user(new_user("   ", "hh1")).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::MissingField(_))
    ));
}

#[tokio::test]
async fn test_list_members_only_returns_household_members() {
    let service = create_service_with_household("hh1");
    service.create_user(new_user("sarah", "hh1")).await.unwrap();
    service.create_user(new_user("mike", "hh1")).await.unwrap();

    let members = service.list_members("hh1").await.unwrap();
    assert_eq!(members.len(), 2);
    assert!(service.list_members("unknown").await.unwrap().is_empty());
}
