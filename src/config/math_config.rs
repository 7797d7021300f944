// src/config/math_config.rs

use serde::{Deserialize, Serialize};
use config::{Config, ConfigError, Environment, File};
use std::path::Path;

use crate::integer_math::modular::DEFAULT_MODULUS;

/// Main contest-math configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MathConfig {
    /// Prime modulus for all modular arithmetic
    pub modulus: u64,

    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Precomputed table sizing
    pub tables: TableConfig,
}

/// Bounds for the build-once tables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    /// Highest integer the primality sieve covers (default: 1,000,000)
    pub sieve_bound: u64,

    /// Highest integer the factor table covers (default: 1,000,000)
    pub factor_bound: u64,

    /// Highest factorial the factorial table holds (default: 1,000,000)
    pub factorial_bound: u64,
}

impl Default for MathConfig {
    fn default() -> Self {
        MathConfig {
            modulus: DEFAULT_MODULUS,
            log_level: "info".to_string(),
            tables: TableConfig::default(),
        }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            sieve_bound: 1_000_000,
            factor_bound: 1_000_000,
            factorial_bound: 1_000_000,
        }
    }
}

impl MathConfig {
    /// Load configuration with precedence: config file → env vars → defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // Start with defaults
            .set_default("modulus", DEFAULT_MODULUS)?
            .set_default("log_level", "info")?
            .set_default("tables.sieve_bound", 1_000_000u64)?
            .set_default("tables.factor_bound", 1_000_000u64)?
            .set_default("tables.factorial_bound", 1_000_000u64)?;

        // Try to load from config files (TOML preferred, YAML fallback)
        if Path::new("contest-math.toml").exists() {
            builder = builder.add_source(File::with_name("contest-math.toml"));
        } else if Path::new("contest-math.yaml").exists() {
            builder = builder.add_source(File::with_name("contest-math.yaml"));
        }

        // Override with environment variables (prefix: CONTEST_MATH_)
        builder = builder.add_source(
            Environment::with_prefix("CONTEST_MATH")
                .separator("_")
                .try_parsing(true)
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // Start with defaults
            .set_default("modulus", DEFAULT_MODULUS)?
            .set_default("log_level", "info")?
            .set_default("tables.sieve_bound", 1_000_000u64)?
            .set_default("tables.factor_bound", 1_000_000u64)?
            .set_default("tables.factorial_bound", 1_000_000u64)?;

        // Load from specified file
        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        }

        // Override with environment variables (prefix: CONTEST_MATH_)
        builder = builder.add_source(
            Environment::with_prefix("CONTEST_MATH")
                .separator("_")
                .try_parsing(true)
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MathConfig::default();
        assert_eq!(config.modulus, 1_000_000_007);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.tables.sieve_bound, 1_000_000);
        assert_eq!(config.tables.factor_bound, 1_000_000);
        assert_eq!(config.tables.factorial_bound, 1_000_000);
    }

    #[test]
    fn test_load_without_file() {
        // Should successfully load defaults when no config file exists
        let config = MathConfig::load().unwrap_or_else(|_| MathConfig::default());
        assert_eq!(config.modulus, 1_000_000_007);
    }
}
