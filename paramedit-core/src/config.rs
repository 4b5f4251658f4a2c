use std::path::{Path, PathBuf};

use log::LevelFilter;
use serde::Deserialize;
use toml::Table;

use crate::error::ConfigError;
use crate::state::IdPolicy;

/// Embedded defaults
const DEFAULT_CONFIG: &str = include_str!("../config.toml");

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    pub editor: EditorConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EditorConfig {
    #[serde(default)]
    pub id_policy: IdPolicy,
    #[serde(default)]
    pub seed_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        let table: Table =
            toml::from_str(DEFAULT_CONFIG).expect("Failed to parse embedded config.toml");
        toml::Value::Table(table)
            .try_into()
            .expect("Embedded config.toml does not match Config")
    }
}

impl Config {
    /// Embedded defaults merged with the user file, if one exists
    pub fn load() -> Result<Self, ConfigError> {
        match user_config_path() {
            Some(path) if path.exists() => Self::load_with_override(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_with_override(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_override_str(&contents)
    }

    pub fn from_override_str(user: &str) -> Result<Self, ConfigError> {
        let mut base: Table = toml::from_str(DEFAULT_CONFIG)?;
        let user: Table = toml::from_str(user)?;
        merge_tables(&mut base, user);
        Ok(toml::Value::Table(base).try_into()?)
    }

    /// Unknown level names fall back to `info`
    pub fn log_level(&self) -> LevelFilter {
        self.logging.level.parse().unwrap_or(LevelFilter::Info)
    }
}

pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("paramedit").join("config.toml"))
}

/// Recursively overlay `user` onto `base`; user keys win
fn merge_tables(base: &mut Table, user: Table) {
    for (key, value) in user {
        if let toml::Value::Table(user_sub) = value {
            if let Some(toml::Value::Table(base_sub)) = base.get_mut(&key) {
                merge_tables(base_sub, user_sub);
                continue;
            }
            base.insert(key, toml::Value::Table(user_sub));
        } else {
            base.insert(key, value);
        }
    }
}
