//! Database models for households and users.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use budgetbuddy_core::households::{Household, User};

#[derive(Queryable, Selectable, Insertable, Identifiable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::households)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct HouseholdDB {
    pub id: String,
    pub name: String,
    pub created_at: NaiveDateTime,
}

#[derive(Queryable, Selectable, Insertable, Identifiable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserDB {
    pub id: String,
    pub username: String,
    pub household_id: String,
    pub avatar: Option<String>,
}

impl From<HouseholdDB> for Household {
    fn from(db: HouseholdDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            created_at: db.created_at.and_utc(),
        }
    }
}

impl From<Household> for HouseholdDB {
    fn from(domain: Household) -> Self {
        Self {
            id: domain.id,
            name: domain.name,
            created_at: domain.created_at.naive_utc(),
        }
    }
}

impl From<UserDB> for User {
    fn from(db: UserDB) -> Self {
        Self {
            id: db.id,
            username: db.username,
            household_id: db.household_id,
            avatar: db.avatar,
        }
    }
}

impl From<User> for UserDB {
    fn from(domain: User) -> Self {
        Self {
            id: domain.id,
            username: domain.username,
            household_id: domain.household_id,
            avatar: domain.avatar,
        }
    }
}
