use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sql_types::BigInt;
use diesel::SqliteConnection;
use std::sync::Arc;

use budgetbuddy_core::households::{Household, HouseholdRepositoryTrait, User};
use budgetbuddy_core::Result;

use super::model::{HouseholdDB, UserDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{households, users};

pub struct HouseholdRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl HouseholdRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        HouseholdRepository { pool, writer }
    }
}

#[async_trait]
impl HouseholdRepositoryTrait for HouseholdRepository {
    async fn insert_household(&self, household: Household) -> Result<Household> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Household> {
                let row = diesel::insert_into(households::table)
                    .values(HouseholdDB::from(household))
                    .returning(HouseholdDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(row.into())
            })
            .await
    }

    async fn get_household(&self, household_id: &str) -> Result<Option<Household>> {
        let mut conn = get_connection(&self.pool)?;
        let row = households::table
            .find(household_id)
            .select(HouseholdDB::as_select())
            .first(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(Household::from))
    }

    async fn insert_user(&self, user: User) -> Result<User> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<User> {
                let row = diesel::insert_into(users::table)
                    .values(UserDB::from(user))
                    .returning(UserDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(row.into())
            })
            .await
    }

    async fn get_user(&self, user_id: &str) -> Result<Option<User>> {
        let mut conn = get_connection(&self.pool)?;
        let row = users::table
            .find(user_id)
            .select(UserDB::as_select())
            .first(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(User::from))
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let mut conn = get_connection(&self.pool)?;
        let row = users::table
            .filter(users::username.eq(username))
            .select(UserDB::as_select())
            .first(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(User::from))
    }

    async fn list_members(&self, household_id: &str) -> Result<Vec<User>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = users::table
            .filter(users::household_id.eq(household_id))
            .order(diesel::dsl::sql::<BigInt>("rowid"))
            .select(UserDB::as_select())
            .load(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(User::from).collect())
    }
}
