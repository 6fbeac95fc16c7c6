use std::env;
use std::path::PathBuf;

use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use mealwise_mealplan::PlanningPolicy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub planning: PlanningPolicy,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    /// Recipe catalog JSON file, the bundled catalog when unset
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ProfileConfig {
    /// User profile JSON file, the bundled sample user when unset
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// `pretty` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (MEALWISE__PLANNING__HORIZON_DAYS, etc.)
    /// 2. Config file given by path, `CONFIG_PATH`, or `config/default.toml`
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let policy = PlanningPolicy::default();

        let mut builder = ConfigBuilder::builder()
            .set_default("planning.horizon_days", policy.horizon_days as u64)?
            .set_default("planning.window_days", policy.window_days as u64)?
            .set_default(
                "planning.cuisine_cap_per_window",
                policy.cuisine_cap_per_window as u64,
            )?
            .set_default("planning.protein_cap", policy.protein_cap as u64)?
            .set_default("planning.alternatives_limit", policy.alternatives_limit as u64)?
            .set_default(
                "planning.enforce_user_exclusions",
                policy.enforce_user_exclusions,
            )?
            .set_default("observability.log_level", default_log_level())?
            .set_default("observability.format", default_log_format())?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // optional, a missing file leaves the defaults
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("MEALWISE")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        self.planning.validate()?;

        if !matches!(self.observability.format.as_str(), "pretty" | "json") {
            return Err(format!(
                "Unknown log format `{}`, expected `pretty` or `json`",
                self.observability.format
            ));
        }
        if self.observability.log_level.trim().is_empty() {
            return Err("Log level must not be empty".to_string());
        }
        Ok(())
    }
}
