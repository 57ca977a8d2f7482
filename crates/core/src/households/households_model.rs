//! Household and member domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Partition boundary for every other entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Household {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Input model for creating a household
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHousehold {
    pub id: Option<String>,
    pub name: String,
}

/// A member of a household.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub household_id: String,
    pub avatar: Option<String>,
}

/// Input model for adding a member
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub id: Option<String>,
    pub username: String,
    pub household_id: String,
    pub avatar: Option<String>,
}
