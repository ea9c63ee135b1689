use crate::DASHBOARD_APP_DIR;
use crate::error::config::ConfigError;
use crate::shortener_client::DEFAULT_TIMEOUT_DURATION;
use crate::views::format::DEFAULT_DATE_FORMAT;
use crate::views::navigation::Page;

use common::ErrorLocation;

use std::env;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::format::{Item, StrftimeItems};
use log::{info, warn};
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "config.toml";
const CONFIG_VERSION: u32 = 1;
const MAX_TIMEOUT_SECS: u64 = 300;

pub const DEFAULT_API_BASE_URL: &str = "https://the-alter-office.onrender.com";
pub const CONFIG_DIR_ENV_VAR: &str = "SHORTENER_CONFIG_DIR";
pub const API_URL_ENV_VAR: &str = "SHORTENER_API_URL";
pub const DATA_DIR_ENV_VAR: &str = crate::session::paths::DATA_DIR_ENV_VAR;

// ============================================
// CONFIG STRUCTS
// ============================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Where `session.json` and logs live; platform default when unset.
    pub data_dir_override: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiPreferences {
    #[serde(default)]
    pub start_page: Page,
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            start_page: Page::default(),
            date_format: default_date_format(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub ui: UiPreferences,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            api: ApiConfig::default(),
            session: SessionConfig::default(),
            ui: UiPreferences::default(),
        }
    }
}

// ============================================
// DEFAULT FUNCTIONS
// ============================================

fn default_version() -> u32 {
    CONFIG_VERSION
}
fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}
fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_DURATION.as_secs()
}
fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

// ============================================
// IMPLEMENTATION
// ============================================

impl AppConfig {
    /// Load config from {config_dir}/config.toml.
    ///
    /// # Returns
    ///
    /// Returns `Ok(AppConfig)` if loaded successfully or defaults if file missing.
    /// Returns `Err(ConfigError)` if file exists but is corrupted/invalid.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            info!(
                "Config file not found at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path).map_err(|e| {
            warn!("Failed to read config file: {}", e);
            ConfigError::ReadError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.clone(),
                source: e,
            }
        })?;

        let config: AppConfig = toml::from_str(&contents).map_err(|e| {
            warn!("Failed to parse config TOML: {}", e);
            ConfigError::ParseError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.clone(),
                reason: e.to_string(),
            }
        })?;

        config.validate()?;

        info!("Config loaded from {}", config_path.display());
        Ok(config)
    }

    /// Save config to {config_dir}/config.toml using atomic write.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if validation, directory creation,
    /// serialization, write or rename fails.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        self.validate()?;

        std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: config_dir.to_path_buf(),
            source: e,
        })?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let temp_path = config_dir.join(format!("{}.tmp", CONFIG_FILE_NAME));

        let contents = toml::to_string_pretty(self).map_err(|e| ConfigError::SerializeError {
            location: ErrorLocation::from(Location::caller()),
            reason: e.to_string(),
        })?;

        std::fs::write(&temp_path, contents).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: temp_path.clone(),
            source: e,
        })?;

        std::fs::rename(&temp_path, &config_path).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: config_path.clone(),
            source: e,
        })?;

        info!("Config saved to {}", config_path.display());
        Ok(())
    }

    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version == 0 || self.version > CONFIG_VERSION {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Invalid version: {} (expected 1-{})",
                    self.version, CONFIG_VERSION
                ),
            });
        }

        let base_url = self.api.base_url.trim();
        if base_url.is_empty() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: "api.base_url cannot be empty".to_string(),
            });
        }

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!("Invalid URL format: {}", base_url),
            });
        }

        if self.api.timeout_secs == 0 || self.api.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Invalid timeout: {}s (must be 1-{MAX_TIMEOUT_SECS})",
                    self.api.timeout_secs
                ),
            });
        }

        let format_invalid = self.ui.date_format.is_empty()
            || StrftimeItems::new(&self.ui.date_format).any(|item| matches!(item, Item::Error));
        if format_invalid {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!("Invalid date format: '{}'", self.ui.date_format),
            });
        }

        Ok(())
    }

    /// Apply process environment overrides on top of the file values.
    ///
    /// `.env` is not read here; call [`load_dotenv`] first so the same file
    /// also feeds [`default_config_dir`]. Returns the variables that were
    /// applied, for logging once the logger is up.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if an override is invalid.
    pub fn apply_env_overrides(&mut self) -> Result<Vec<&'static str>, ConfigError> {
        let mut applied = Vec::new();

        if let Some(base_url) = non_empty_env(API_URL_ENV_VAR) {
            self.api.base_url = base_url;
            applied.push(API_URL_ENV_VAR);
        }

        if let Some(data_dir) = non_empty_env(DATA_DIR_ENV_VAR) {
            self.session.data_dir_override = Some(data_dir);
            applied.push(DATA_DIR_ENV_VAR);
        }

        self.validate()?;
        Ok(applied)
    }

    pub fn data_dir_override(&self) -> Option<PathBuf> {
        self.session.data_dir_override.as_ref().map(PathBuf::from)
    }
}

/// Directory holding `config.toml`.
///
/// `SHORTENER_CONFIG_DIR` wins over the platform config directory.
pub fn default_config_dir() -> Result<PathBuf, ConfigError> {
    if let Some(dir) = non_empty_env(CONFIG_DIR_ENV_VAR) {
        return Ok(PathBuf::from(dir));
    }

    dirs::config_dir()
        .map(|dir| dir.join(DASHBOARD_APP_DIR))
        .ok_or_else(|| ConfigError::DirectoryNotFound {
            location: ErrorLocation::from(Location::caller()),
            reason: format!("No platform config directory; set {CONFIG_DIR_ENV_VAR}"),
        })
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Load `.env` from the working directory, then from next to the executable.
///
/// Variables already set in the process environment are kept. Returns the
/// file that was loaded, if any.
pub fn load_dotenv() -> Option<PathBuf> {
    if let Ok(path) = dotenvy::dotenv() {
        return Some(path);
    }

    let exe_path = env::current_exe().ok()?;
    load_dotenv_from(exe_path.parent()?)
}

/// Load `dir/.env` if it exists.
pub fn load_dotenv_from(dir: &Path) -> Option<PathBuf> {
    let env_path = dir.join(".env");
    if !env_path.exists() {
        return None;
    }

    match dotenvy::from_path(&env_path) {
        Ok(()) => Some(env_path),
        Err(e) => {
            warn!("Failed to parse .env at {:?}: {}", env_path, e);
            None
        }
    }
}
