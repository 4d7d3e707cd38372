//! Store configuration
//!
//! Loads settings from defaults, an optional TOML file and `CHAMP_STORE__*`
//! environment variables, in that order of precedence (last wins).

use std::path::{Path, PathBuf};

use champ_core::logging_facility::Profile;
use ::config::builder::DefaultState;
use ::config::{Config, ConfigBuilder, Environment, File, FileFormat};
use serde::Deserialize;

use crate::errors::{config_error, Result};

const ENV_PREFIX: &str = "CHAMP_STORE";
const JOURNAL_MODES: &[&str] = &["DELETE", "TRUNCATE", "PERSIST", "MEMORY", "WAL", "OFF"];

/// Settings for opening and configuring store connections
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StoreConfig {
    /// SQLite database file
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,

    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,

    /// One of DELETE, TRUNCATE, PERSIST, MEMORY, WAL, OFF
    #[serde(default = "default_journal_mode")]
    pub journal_mode: String,

    #[serde(default = "default_true")]
    pub foreign_keys: bool,

    /// development, production or test
    #[serde(default = "default_log_profile")]
    pub log_profile: String,
}

fn default_database_path() -> PathBuf {
    PathBuf::from("champ.db")
}

fn default_busy_timeout_ms() -> u64 {
    5_000
}

fn default_journal_mode() -> String {
    "WAL".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_profile() -> String {
    "development".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            busy_timeout_ms: default_busy_timeout_ms(),
            journal_mode: default_journal_mode(),
            foreign_keys: default_true(),
            log_profile: default_log_profile(),
        }
    }
}

impl StoreConfig {
    /// Defaults pointed at a specific database file
    pub fn for_path(path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: path.into(),
            ..Self::default()
        }
    }

    /// Load from an optional TOML file and the environment
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` when a source cannot be parsed or a value is
    /// not accepted by [`StoreConfig::validate`].
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }
        builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));
        Self::build(builder)
    }

    /// Load from TOML text only, ignoring the environment
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` on malformed TOML or rejected values.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        Self::build(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let config: StoreConfig = builder
            .build()
            .and_then(|c| c.try_deserialize::<StoreConfig>())
            .map_err(|e| config_error(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check values the type system cannot
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` for an unknown journal mode or log profile.
    pub fn validate(&self) -> Result<()> {
        if !JOURNAL_MODES
            .iter()
            .any(|mode| mode.eq_ignore_ascii_case(&self.journal_mode))
        {
            return Err(config_error(format!(
                "unknown journal_mode '{}'",
                self.journal_mode
            )));
        }
        self.log_profile()?;
        Ok(())
    }

    /// Logging profile named by `log_profile`
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` when the name is not a known profile.
    pub fn log_profile(&self) -> Result<Profile> {
        self.log_profile
            .parse::<Profile>()
            .map_err(|e| config_error(e.to_string()))
    }
}
