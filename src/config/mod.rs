use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    /// strftime pattern for day headers in `list`
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// strftime pattern for entry times
    #[serde(default = "default_time_format")]
    pub time_format: String,
    /// Ask `[y/N]` before add, edit and delete.
    #[serde(default = "default_confirm_changes")]
    pub confirm_changes: bool,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
pub fn default_date_format() -> String {
    "%B %-d, %Y".to_string()
}
pub fn default_time_format() -> String {
    "%H:%M".to_string()
}
fn default_confirm_changes() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            date_format: default_date_format(),
            time_format: default_time_format(),
            confirm_changes: default_confirm_changes(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("letssleep")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".letssleep")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("letssleep.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("letssleep.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let mut cfg: Config = serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("invalid configuration file: {e}")))?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)
    }

    /// Initialize configuration and database files.
    ///
    /// In test mode the config file is left alone.
    pub fn init_all(&self, is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();

        if !is_test {
            fs::create_dir_all(&dir)?;
            fs::write(Self::config_file(), self.to_yaml()?)?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        let db_path = PathBuf::from(&self.database);
        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(())
    }
}
