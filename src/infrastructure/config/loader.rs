use std::path::Path;

use anyhow::{bail, Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Default configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "instance-config.yaml";

/// Prefix for environment overrides of tool settings.
pub const ENV_PREFIX: &str = "INSTANCE_CONFIG_";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Database path cannot be empty")]
    EmptyDatabasePath,

    #[error("Invalid max_connections: {0}. Must be at least 1")]
    InvalidMaxConnections(u32),

    #[error("Invalid discovery timeout: {0}. Must be at least 1 second")]
    InvalidDiscoveryTimeout(u64),

    #[error(
        "Invalid backoff configuration: initial_backoff_ms ({0}) must be less than max_backoff_ms ({1})"
    )]
    InvalidBackoff(u64, u64),

    #[error("SECRET_KEY is set but empty")]
    EmptySecretKey,
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. YAML file (`path`, or `instance-config.yaml` when present)
    /// 3. `SECRET_KEY`
    /// 4. Environment variables (`INSTANCE_CONFIG_*` prefix, `__` separates sections)
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let file = match path {
            Some(path) => {
                if !path.exists() {
                    bail!("Config file not found: {}", path.display());
                }
                path.to_path_buf()
            }
            None => DEFAULT_CONFIG_FILE.into(),
        };

        let config: Config = Self::figment(&file)
            .extract()
            .with_context(|| format!("Failed to load config from {}", file.display()))?;

        Self::validate(&config)?;
        Ok(config)
    }

    fn figment(file: &Path) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(file))
            .merge(Env::raw().only(&["SECRET_KEY"]))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.database.path.trim().is_empty() {
            return Err(ConfigError::EmptyDatabasePath);
        }

        if config.database.max_connections == 0 {
            return Err(ConfigError::InvalidMaxConnections(config.database.max_connections));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        if config.discovery.timeout_secs == 0 {
            return Err(ConfigError::InvalidDiscoveryTimeout(config.discovery.timeout_secs));
        }

        if config.discovery.initial_backoff_ms >= config.discovery.max_backoff_ms {
            return Err(ConfigError::InvalidBackoff(
                config.discovery.initial_backoff_ms,
                config.discovery.max_backoff_ms,
            ));
        }

        if config.secret_key.as_deref().is_some_and(str::is_empty) {
            return Err(ConfigError::EmptySecretKey);
        }

        Ok(())
    }
}
