//! Configuration management for Shelfmark

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

/// Longest accepted loan period, about a century
pub const MAX_LOAN_PERIOD_DAYS: i64 = 36_500;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LendingConfig {
    /// Days between borrow time and due date
    pub loan_period_days: i64,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SearchConfig {
    pub max_results: usize,
    /// Drop items with a zero similarity score instead of padding the result
    /// with the first available items in catalog order.
    pub exclude_unrelated: bool,
}

/// Argon2 cost parameters used when hashing patron credentials
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AuthConfig {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub lending: LendingConfig,
    pub search: SearchConfig,
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Environment variables, e.g. SHELFMARK_LENDING__LOAN_PERIOD_DAYS=21
            .add_source(
                Environment::with_prefix("SHELFMARK")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let loaded: Self = config.try_deserialize()?;
        loaded.check()?;
        Ok(loaded)
    }

    fn check(&self) -> Result<(), ConfigError> {
        if !(0..=MAX_LOAN_PERIOD_DAYS).contains(&self.lending.loan_period_days) {
            return Err(ConfigError::Message(format!(
                "lending.loan_period_days must be between 0 and {}",
                MAX_LOAN_PERIOD_DAYS
            )));
        }
        if self.search.max_results == 0 {
            return Err(ConfigError::Message(
                "search.max_results must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl AuthConfig {
    /// Minimal argon2 cost; only suitable for throwaway processes and tests.
    pub fn low_cost() -> Self {
        Self {
            memory_kib: 8,
            iterations: 1,
            parallelism: 1,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for LendingConfig {
    fn default() -> Self {
        Self { loan_period_days: 14 }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: 3,
            exclude_unrelated: false,
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            memory_kib: argon2::Params::DEFAULT_M_COST,
            iterations: argon2::Params::DEFAULT_T_COST,
            parallelism: argon2::Params::DEFAULT_P_COST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests touching process environment run one at a time
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn load_with_env(key: &str, value: &str) -> Result<AppConfig, ConfigError> {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        env::set_var(key, value);
        let loaded = AppConfig::load();
        env::remove_var(key);
        loaded
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.lending.loan_period_days, 14);
        assert_eq!(config.search.max_results, 3);
        assert!(!config.search.exclude_unrelated);
        assert_eq!(config.logging.level, "info");
        assert!(config.check().is_ok());
    }

    #[test]
    fn test_load_reads_environment_overrides() {
        let config = load_with_env("SHELFMARK_SEARCH__MAX_RESULTS", "5").unwrap();
        assert_eq!(config.search.max_results, 5);
        assert_eq!(config.lending.loan_period_days, 14);
    }

    #[test]
    fn test_load_rejects_invalid_environment_value() {
        assert!(load_with_env("SHELFMARK_SEARCH__MAX_RESULTS", "0").is_err());
        assert!(load_with_env("SHELFMARK_LENDING__LOAN_PERIOD_DAYS", "100000000").is_err());
    }

    #[test]
    fn test_check_bounds_loan_period() {
        let mut config = AppConfig::default();
        config.lending.loan_period_days = MAX_LOAN_PERIOD_DAYS;
        assert!(config.check().is_ok());
        config.lending.loan_period_days = MAX_LOAN_PERIOD_DAYS + 1;
        assert!(config.check().is_err());
        config.lending.loan_period_days = -1;
        assert!(config.check().is_err());
    }

    #[test]
    fn test_check_rejects_zero_results() {
        let mut config = AppConfig::default();
        config.search.max_results = 0;
        assert!(config.check().is_err());
    }
}
