use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_roster_file")]
    pub roster_file: String,
    #[serde(default = "default_group_name")]
    pub group_name: String,
    #[serde(default = "default_commuter_marker")]
    pub commuter_marker: String,
    #[serde(default = "default_request_marker")]
    pub request_marker: String,
}

fn default_roster_file() -> String {
    "group_cN.txt".to_string()
}
fn default_group_name() -> String {
    "С-41".to_string()
}
fn default_commuter_marker() -> String {
    "(к)".to_string()
}
fn default_request_marker() -> String {
    "(рапорт)".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roster_file: default_roster_file(),
            group_name: default_group_name(),
            commuter_marker: default_commuter_marker(),
            request_marker: default_request_marker(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("leaveplanner")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".leaveplanner")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("leaveplanner.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let cfg: Config = serde_yaml::from_str(content)?;
        if cfg.commuter_marker.trim().is_empty() {
            return Err(AppError::Config("commuter_marker must not be empty".into()));
        }
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)
    }

    /// Write the default configuration file; an existing file is kept.
    pub fn init() -> AppResult<PathBuf> {
        fs::create_dir_all(Self::config_dir())?;

        let path = Self::config_file();
        if !path.exists() {
            fs::write(&path, Self::default().to_yaml()?)?;
        }
        Ok(path)
    }
}
