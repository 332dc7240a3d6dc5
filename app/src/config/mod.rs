//! Configuration management for the Fitness Planner
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: FP__)

use crate::services::export::OutputFormat;
use anyhow::Result;
use fitness_planner_shared::units::EnergyUnit;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub food_search: FoodSearchConfig,
}

/// How plans are rendered
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Unit for the daily calorie target in text summaries
    pub energy_unit: EnergyUnit,
    /// Format used when `--format` is not given
    pub default_format: OutputFormat,
}

/// Food search configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodSearchConfig {
    pub simulated_delay_ms: u64,
}

impl Default for FoodSearchConfig {
    fn default() -> Self {
        Self {
            simulated_delay_ms: 1000,
        }
    }
}

impl FoodSearchConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with FP__ prefix
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        Self::load_from(&format!("config/{}.toml", env))
    }

    /// Load with an explicit config file path (the file may be absent)
    pub fn load_from(config_file: &str) -> Result<Self> {
        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(config::File::with_name(config_file).required(false))
            // e.g., FP__FOOD_SEARCH__SIMULATED_DELAY_MS=0 sets food_search.simulated_delay_ms
            .add_source(
                config::Environment::with_prefix("FP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }
}
