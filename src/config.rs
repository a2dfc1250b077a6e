//! Configuration management for the lending ledger

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct LoanConfig {
    /// Loan period in days; a loan is overdue strictly after
    /// checkout time + this period.
    pub period_days: i64,
    /// Offset from UTC, in minutes, of the single time zone in which
    /// due dates are evaluated and reported.
    pub utc_offset_minutes: i32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LedgerConfig {
    #[serde(default)]
    pub loan: LoanConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl LedgerConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix LEDGER_)
            .add_source(
                Environment::with_prefix("LEDGER")
                    .separator("_")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            loan: LoanConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoanConfig {
    fn default() -> Self {
        Self {
            period_days: 3,
            utc_offset_minutes: 0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
