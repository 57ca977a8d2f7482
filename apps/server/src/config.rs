use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{anyhow, Context};

/// Which storage backend the server runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Sqlite,
    Memory,
}

impl FromStr for StorageKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(StorageKind::Sqlite),
            "memory" => Ok(StorageKind::Memory),
            other => Err(anyhow!("unknown storage backend '{}'", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub storage: StorageKind,
    pub db_path: String,
    pub cors_allow_origins: Vec<String>,
    pub request_timeout: Duration,
    pub seed_demo: bool,
    pub coingecko_enabled: bool,
    pub coingecko_api_key: Option<String>,
    /// Offline price table, e.g. `BTC=65000,ETH=3000`.
    pub fixed_prices: Option<String>,
    pub price_cache_ttl: Duration,
    /// `text` or `json`.
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            storage: StorageKind::Sqlite,
            db_path: "./db/budgetbuddy.db".to_string(),
            cors_allow_origins: vec!["*".to_string()],
            request_timeout: Duration::from_millis(30_000),
            seed_demo: true,
            coingecko_enabled: true,
            coingecko_api_key: None,
            fixed_prices: None,
            price_cache_ttl: Duration::from_secs(60),
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    /// Reads `BB_*` variables from the process environment, after loading
    /// an optional `.env` file.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Unset or blank keys keep their
    /// defaults.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let mut config = Config::default();

        if let Some(addr) = get("BB_LISTEN_ADDR") {
            config.listen_addr = addr
                .parse()
                .with_context(|| format!("BB_LISTEN_ADDR: invalid address '{}'", addr))?;
        }
        if let Some(storage) = get("BB_STORAGE") {
            config.storage = storage.parse::<StorageKind>().context("BB_STORAGE")?;
        }
        if let Some(path) = get("BB_DB_PATH") {
            config.db_path = path;
        }
        if let Some(origins) = get("BB_CORS_ALLOW_ORIGINS") {
            config.cors_allow_origins = origins
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect();
        }
        if let Some(ms) = get("BB_REQUEST_TIMEOUT_MS") {
            let ms: u64 = ms
                .parse()
                .with_context(|| format!("BB_REQUEST_TIMEOUT_MS: not a number '{}'", ms))?;
            config.request_timeout = Duration::from_millis(ms);
        }
        if let Some(flag) = get("BB_SEED_DEMO") {
            config.seed_demo = parse_flag("BB_SEED_DEMO", &flag)?;
        }
        if let Some(flag) = get("BB_COINGECKO_ENABLED") {
            config.coingecko_enabled = parse_flag("BB_COINGECKO_ENABLED", &flag)?;
        }
        config.coingecko_api_key = get("BB_COINGECKO_API_KEY");
        config.fixed_prices = get("BB_FIXED_PRICES");
        if let Some(secs) = get("BB_PRICE_CACHE_TTL_SECS") {
            let secs: u64 = secs
                .parse()
                .with_context(|| format!("BB_PRICE_CACHE_TTL_SECS: not a number '{}'", secs))?;
            config.price_cache_ttl = Duration::from_secs(secs);
        }
        if let Some(format) = get("BB_LOG_FORMAT") {
            config.log_format = format;
        }

        Ok(config)
    }
}

fn parse_flag(key: &str, value: &str) -> anyhow::Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(anyhow!("{}: expected a boolean, got '{}'", key, other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.listen_addr.port(), 8080);
        assert_eq!(config.storage, StorageKind::Sqlite);
        assert_eq!(config.db_path, "./db/budgetbuddy.db");
        assert_eq!(config.cors_allow_origins, vec!["*"]);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(config.seed_demo);
        assert!(config.coingecko_enabled);
        assert_eq!(config.price_cache_ttl, Duration::from_secs(60));
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("BB_LISTEN_ADDR", "127.0.0.1:9000"),
            ("BB_STORAGE", "Memory"),
            ("BB_CORS_ALLOW_ORIGINS", "http://a.test, http://b.test"),
            ("BB_REQUEST_TIMEOUT_MS", "1500"),
            ("BB_SEED_DEMO", "false"),
            ("BB_COINGECKO_ENABLED", "0"),
            ("BB_FIXED_PRICES", "BTC=65000"),
            ("BB_LOG_FORMAT", "json"),
        ])
        .unwrap();
        assert_eq!(config.listen_addr.port(), 9000);
        assert_eq!(config.storage, StorageKind::Memory);
        assert_eq!(
            config.cors_allow_origins,
            vec!["http://a.test", "http://b.test"]
        );
        assert_eq!(config.request_timeout, Duration::from_millis(1500));
        assert!(!config.seed_demo);
        assert!(!config.coingecko_enabled);
        assert_eq!(config.fixed_prices.as_deref(), Some("BTC=65000"));
        assert_eq!(config.log_format, "json");
    }

    #[test]
    fn test_blank_values_keep_defaults() {
        let config = config_from(&[("BB_DB_PATH", "  "), ("BB_COINGECKO_API_KEY", "")]).unwrap();
        assert_eq!(config.db_path, "./db/budgetbuddy.db");
        assert!(config.coingecko_api_key.is_none());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(config_from(&[("BB_STORAGE", "postgres")]).is_err());
        assert!(config_from(&[("BB_REQUEST_TIMEOUT_MS", "soon")]).is_err());
        assert!(config_from(&[("BB_SEED_DEMO", "maybe")]).is_err());
        assert!(config_from(&[("BB_LISTEN_ADDR", "nowhere")]).is_err());
    }
}
