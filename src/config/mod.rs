use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_log_file")]
    pub log_file: String,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

fn default_log_file() -> String {
    Config::log_file_path().to_string_lossy().to_string()
}
fn default_currency() -> String {
    "$".to_string()
}
fn default_timestamp_format() -> String {
    "%Y-%m-%d %H:%M:%S".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            currency: default_currency(),
            timestamp_format: default_timestamp_format(),
        }
    }
}

impl Config {
    /// Return the per-user configuration directory (`~/.rhours`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rhours")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rhours.conf")
    }

    /// Return the default path of the event log
    pub fn log_file_path() -> PathBuf {
        Self::config_dir().join("log.csv")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;

        // An empty file is a valid, all-defaults configuration.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(serde_yaml::from_str(&content)?)
    }

    /// Write the configuration file, creating the directory if needed
    pub fn save(&self) -> AppResult<PathBuf> {
        fs::create_dir_all(Self::config_dir())?;
        let path = Self::config_file();
        fs::write(&path, serde_yaml::to_string(self)?)?;
        Ok(path)
    }

    /// `log_file` with a leading `~/` resolved against the home directory
    pub fn log_path(&self) -> PathBuf {
        match (self.log_file.strip_prefix("~/"), dirs::home_dir()) {
            (Some(rest), Some(home)) => home.join(rest),
            _ => PathBuf::from(&self.log_file),
        }
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
