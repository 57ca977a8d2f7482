use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sql_types::BigInt;
use diesel::SqliteConnection;
use std::sync::Arc;

use budgetbuddy_core::crypto::{CryptoHolding, CryptoHoldingRepositoryTrait};
use budgetbuddy_core::errors::{DatabaseError, Error};
use budgetbuddy_core::Result;

use super::model::CryptoHoldingDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::crypto_holdings;

pub struct CryptoHoldingRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl CryptoHoldingRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        CryptoHoldingRepository { pool, writer }
    }
}

#[async_trait]
impl CryptoHoldingRepositoryTrait for CryptoHoldingRepository {
    async fn insert_holding(&self, holding: CryptoHolding) -> Result<CryptoHolding> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<CryptoHolding> {
                let row = diesel::insert_into(crypto_holdings::table)
                    .values(CryptoHoldingDB::from(holding))
                    .returning(CryptoHoldingDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(row.into())
            })
            .await
    }

    async fn update_holding(&self, holding: CryptoHolding) -> Result<CryptoHolding> {
        let holding_db = CryptoHoldingDB::from(holding);
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<CryptoHolding> {
                let updated = diesel::update(crypto_holdings::table.find(holding_db.id.clone()))
                    .set(&holding_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                if updated == 0 {
                    return Err(Error::Database(DatabaseError::NotFound(format!(
                        "Crypto holding '{}'",
                        holding_db.id
                    ))));
                }
                Ok(holding_db.into())
            })
            .await
    }

    async fn delete_holding(&self, holding_id: &str) -> Result<usize> {
        let holding_id = holding_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(crypto_holdings::table.find(holding_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }

    async fn get_holding(&self, holding_id: &str) -> Result<Option<CryptoHolding>> {
        let mut conn = get_connection(&self.pool)?;
        let row = crypto_holdings::table
            .find(holding_id)
            .select(CryptoHoldingDB::as_select())
            .first(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(CryptoHolding::from))
    }

    async fn list_holdings(&self, household_id: &str) -> Result<Vec<CryptoHolding>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = crypto_holdings::table
            .filter(crypto_holdings::household_id.eq(household_id))
            .order(diesel::dsl::sql::<BigInt>("rowid"))
            .select(CryptoHoldingDB::as_select())
            .load(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(CryptoHolding::from).collect())
    }
}
