use serde::{Deserialize, Serialize};
use std::fs;

use super::benchmark::BenchmarkConfig;
use super::database::DatabaseConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::store::StoreConfig;

/// Main configuration, shared by the `dnsperf` and `dbsync` binaries
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub benchmark: BenchmarkConfig,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values given on the command line; `Some` wins over the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub servers_file: Option<String>,
    pub domains_file: Option<String>,
    pub iterations: Option<u32>,
    pub store_path: Option<String>,
    pub database_path: Option<String>,
    pub verbose: bool,
}

impl Config {
    /// Loads the optional TOML file, then applies CLI overrides.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(path, &contents)
    }

    fn from_toml(path: &str, contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(servers_file) = overrides.servers_file {
            self.benchmark.servers_file = servers_file;
        }
        if let Some(domains_file) = overrides.domains_file {
            self.benchmark.domains_file = domains_file;
        }
        if let Some(iterations) = overrides.iterations {
            self.benchmark.iterations = iterations;
        }
        if let Some(store_path) = overrides.store_path {
            self.store.path = store_path;
        }
        if let Some(database_path) = overrides.database_path {
            self.database.path = database_path;
        }
        if overrides.verbose {
            self.logging.level = "debug".to_string();
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.benchmark.iterations == 0 {
            return Err(ConfigError::Validation(
                "benchmark.iterations must be at least 1".to_string(),
            ));
        }
        if self.store.path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "store.path cannot be empty".to_string(),
            ));
        }
        if self.database.path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "database.path cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
