//! YAML configuration file (`~/.rcheckin/rcheckin.conf`).

use crate::errors::{AppError, AppResult};
use crate::utils::path::{config_dir, resolve_in};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    /// tracing filter used when neither RUST_LOG nor -v is given
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// How many row errors a successful import prints
    #[serde(default = "default_error_preview")]
    pub error_preview: usize,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_log_level() -> String {
    "warn".to_string()
}
fn default_error_preview() -> usize {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            log_level: default_log_level(),
            error_preview: default_error_preview(),
        }
    }
}

impl Config {
    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        config_dir().join("rcheckin.conf")
    }

    /// Return the full path of the default SQLite database
    pub fn database_file() -> PathBuf {
        config_dir().join("rcheckin.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    /// Missing keys take their default value.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Initialize configuration and database paths.
    ///
    /// In test mode the config file is left alone. Returns the database path.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let dir = config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = match custom_db {
            Some(name) => resolve_in(&dir, name),
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            let yaml = config.to_yaml()?;
            fs::write(Self::config_file(), yaml)
                .map_err(|e| AppError::ConfigSave(e.to_string()))?;
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(db_path)
    }
}
