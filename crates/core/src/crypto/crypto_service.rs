use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use std::sync::Arc;
use uuid::Uuid;

use super::crypto_model::{CryptoHolding, CryptoHoldingUpdate, CryptoPortfolio, NewCryptoHolding};
use super::crypto_traits::{CryptoHoldingRepositoryTrait, CryptoServiceTrait, PriceLookupTrait};
use super::valuation::valuate;
use crate::constants::{CRYPTO_QUANTITY_SCALE, MAX_CRYPTO_QUANTITY};
use crate::errors::{Error, Result, ValidationError};
use crate::utils::parse_non_negative_amount;

pub struct CryptoService {
    repository: Arc<dyn CryptoHoldingRepositoryTrait>,
    price_lookup: Arc<dyn PriceLookupTrait>,
}

impl CryptoService {
    pub fn new(
        repository: Arc<dyn CryptoHoldingRepositoryTrait>,
        price_lookup: Arc<dyn PriceLookupTrait>,
    ) -> Self {
        CryptoService {
            repository,
            price_lookup,
        }
    }
}

fn normalize_symbol(raw: &str) -> Result<String> {
    let symbol = raw.trim().to_uppercase();
    if symbol.is_empty() {
        return Err(ValidationError::MissingField("symbol".to_string()).into());
    }
    if !symbol.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::InvalidInput(format!(
            "symbol: '{}' must be alphanumeric",
            raw
        ))
        .into());
    }
    Ok(symbol)
}

fn required_name(raw: &str) -> Result<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ValidationError::MissingField("name".to_string()).into());
    }
    Ok(name.to_string())
}

#[async_trait]
impl CryptoServiceTrait for CryptoService {
    async fn create_holding(&self, new_holding: NewCryptoHolding) -> Result<CryptoHolding> {
        if new_holding.household_id.trim().is_empty() {
            return Err(ValidationError::MissingField("householdId".to_string()).into());
        }
        let symbol = normalize_symbol(&new_holding.symbol)?;
        let name = required_name(&new_holding.name)?;
        let amount = parse_non_negative_amount(
            "amount",
            &new_holding.amount,
            CRYPTO_QUANTITY_SCALE,
            MAX_CRYPTO_QUANTITY,
        )?;

        let now = Utc::now();
        let holding = CryptoHolding {
            id: new_holding.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            household_id: new_holding.household_id,
            symbol,
            name,
            amount,
            platform: new_holding.platform,
            created_at: now,
            updated_at: now,
        };
        debug!("Adding {} {} to household {}", holding.amount, holding.symbol, holding.household_id);
        self.repository.insert_holding(holding).await
    }

    async fn update_holding(
        &self,
        holding_id: &str,
        update: CryptoHoldingUpdate,
    ) -> Result<CryptoHolding> {
        let mut holding = self
            .repository
            .get_holding(holding_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Crypto holding '{}'", holding_id)))?;

        if let Some(symbol) = update.symbol.as_deref() {
            holding.symbol = normalize_symbol(symbol)?;
        }
        if let Some(name) = update.name.as_deref() {
            holding.name = required_name(name)?;
        }
        if let Some(amount) = update.amount.as_deref() {
            holding.amount = parse_non_negative_amount(
                "amount",
                amount,
                CRYPTO_QUANTITY_SCALE,
                MAX_CRYPTO_QUANTITY,
            )?;
        }
        if update.platform.is_some() {
            holding.platform = update.platform;
        }
        holding.updated_at = Utc::now();

        self.repository.update_holding(holding).await
    }

    async fn delete_holding(&self, holding_id: &str) -> Result<()> {
        if self.repository.delete_holding(holding_id).await? == 0 {
            return Err(Error::NotFound(format!("Crypto holding '{}'", holding_id)));
        }
        Ok(())
    }

    async fn list_holdings(&self, household_id: &str) -> Result<Vec<CryptoHolding>> {
        self.repository.list_holdings(household_id).await
    }

    async fn get_portfolio(&self, household_id: &str) -> Result<CryptoPortfolio> {
        let holdings = self.repository.list_holdings(household_id).await?;
        Ok(valuate(holdings, self.price_lookup.as_ref()).await)
    }
}
