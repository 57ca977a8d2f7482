use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use budgetbuddy_core::{
    budgets::{BudgetService, BudgetServiceTrait},
    categories::{CategoryService, CategoryServiceTrait},
    crypto::{CryptoService, CryptoServiceTrait, MarketPriceLookup},
    dashboard::{DashboardService, DashboardServiceTrait, HouseholdData},
    expenses::{ExpenseService, ExpenseServiceTrait},
    households::{HouseholdService, HouseholdServiceTrait},
    seed::seed_demo_household,
    storage::StorageBackend,
};
use budgetbuddy_market_data::{
    CoinGeckoProvider, FixedPriceProvider, MarketDataProvider, ProviderRegistry,
};
use budgetbuddy_storage_memory::MemoryStorage;
use budgetbuddy_storage_sqlite::SqliteStorage;

use crate::config::{Config, StorageKind};

pub struct AppState {
    pub storage: Arc<dyn StorageBackend>,
    pub household_service: Arc<dyn HouseholdServiceTrait>,
    pub category_service: Arc<dyn CategoryServiceTrait>,
    pub budget_service: Arc<dyn BudgetServiceTrait>,
    pub expense_service: Arc<dyn ExpenseServiceTrait>,
    pub crypto_service: Arc<dyn CryptoServiceTrait>,
    pub dashboard_service: Arc<dyn DashboardServiceTrait>,
}

pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

fn open_storage(config: &Config) -> anyhow::Result<Arc<dyn StorageBackend>> {
    Ok(match config.storage {
        StorageKind::Sqlite => {
            let storage = SqliteStorage::open(&config.db_path)
                .with_context(|| format!("opening database at {}", config.db_path))?;
            tracing::info!("Database path in use: {}", storage.db_path());
            Arc::new(storage)
        }
        StorageKind::Memory => Arc::new(MemoryStorage::open()),
    })
}

/// Price providers in the order the registry should prefer them.
fn build_price_registry(config: &Config) -> anyhow::Result<ProviderRegistry> {
    let mut providers: Vec<Arc<dyn MarketDataProvider>> = Vec::new();

    if config.coingecko_enabled {
        providers.push(Arc::new(CoinGeckoProvider::new(
            config.coingecko_api_key.clone(),
        )));
    }
    if let Some(spec) = config.fixed_prices.as_deref() {
        let fixed = FixedPriceProvider::from_spec(spec).context("BB_FIXED_PRICES")?;
        if !fixed.is_empty() {
            providers.push(Arc::new(fixed));
        }
    }
    if providers.is_empty() {
        tracing::warn!("No price providers configured; crypto holdings will be valued at zero");
    }

    Ok(ProviderRegistry::with_cache_ttl(
        providers,
        config.price_cache_ttl,
    ))
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let storage = open_storage(config)?;
    let repositories = storage.repositories();
    tracing::info!("Storage backend: {}", storage.name());

    if config.seed_demo {
        seed_demo_household(&repositories)
            .await
            .context("seeding demo household")?;
    }

    let registry = Arc::new(build_price_registry(config)?);
    let price_lookup = Arc::new(MarketPriceLookup::new(registry));

    let household_service = Arc::new(HouseholdService::new(repositories.households.clone()));
    let category_service = Arc::new(CategoryService::new(repositories.categories.clone()));
    let budget_service = Arc::new(BudgetService::new(
        repositories.budgets.clone(),
        repositories.categories.clone(),
    ));
    let expense_service = Arc::new(ExpenseService::new(
        repositories.expenses.clone(),
        repositories.categories.clone(),
        repositories.households.clone(),
    ));
    let crypto_service = Arc::new(CryptoService::new(
        repositories.crypto_holdings.clone(),
        price_lookup,
    ));
    let dashboard_service = Arc::new(DashboardService::new(Arc::new(HouseholdData::new(
        &repositories,
    ))));

    Ok(Arc::new(AppState {
        storage,
        household_service,
        category_service,
        budget_service,
        expense_service,
        crypto_service,
        dashboard_service,
    }))
}
