use async_trait::async_trait;

use budgetbuddy_core::crypto::{CryptoHolding, CryptoHoldingRepositoryTrait};
use budgetbuddy_core::errors::Result;

use crate::tables::{collect, ensure_new_id, not_found};
use crate::MemoryStore;

#[async_trait]
impl CryptoHoldingRepositoryTrait for MemoryStore {
    async fn insert_holding(&self, holding: CryptoHolding) -> Result<CryptoHolding> {
        let mut tables = self.tables.write().await;
        ensure_new_id(&tables.holdings, &holding.id, "Crypto holding")?;
        tables
            .index_mut(&holding.household_id)
            .holdings
            .push(holding.id.clone());
        tables.holdings.insert(holding.id.clone(), holding.clone());
        Ok(holding)
    }

    async fn update_holding(&self, holding: CryptoHolding) -> Result<CryptoHolding> {
        let mut tables = self.tables.write().await;
        match tables.holdings.get_mut(&holding.id) {
            Some(existing) => {
                *existing = holding.clone();
                Ok(holding)
            }
            None => Err(not_found("Crypto holding", &holding.id)),
        }
    }

    async fn delete_holding(&self, holding_id: &str) -> Result<usize> {
        let mut tables = self.tables.write().await;
        let Some(holding) = tables.holdings.remove(holding_id) else {
            return Ok(0);
        };
        tables
            .index_mut(&holding.household_id)
            .holdings
            .retain(|id| id != holding_id);
        Ok(1)
    }

    async fn get_holding(&self, holding_id: &str) -> Result<Option<CryptoHolding>> {
        Ok(self.tables.read().await.holdings.get(holding_id).cloned())
    }

    async fn list_holdings(&self, household_id: &str) -> Result<Vec<CryptoHolding>> {
        let tables = self.tables.read().await;
        Ok(tables
            .index(household_id)
            .map(|index| collect(&index.holdings, &tables.holdings))
            .unwrap_or_default())
    }
}
