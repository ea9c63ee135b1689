//! Platform-aware detection of the dashboard's data directory.
//!
//! Lookup order:
//! 1. Explicit override (from `config.toml`)
//! 2. SHORTENER_DATA_DIR environment variable
//! 3. Platform-specific data directory via `dirs` crate
//! 4. Fallback paths for common configurations

use crate::DASHBOARD_APP_DIR;
use crate::error::SessionError;

use std::env;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

pub const DATA_DIR_ENV_VAR: &str = "SHORTENER_DATA_DIR";
const CREDENTIAL_FILE_NAME: &str = "session.json";
const LOG_DIR_NAME: &str = "logs";

/// Resolved on-disk locations.
#[derive(Debug, Clone)]
pub struct DataPaths {
    pub data_dir: PathBuf,
    /// Where the bearer token is persisted.
    pub credential_file: PathBuf,
    pub log_dir: PathBuf,
    pub source: PathSource,
}

impl DataPaths {
    fn rooted_at(data_dir: PathBuf, source: PathSource) -> Self {
        Self {
            credential_file: data_dir.join(CREDENTIAL_FILE_NAME),
            log_dir: data_dir.join(LOG_DIR_NAME),
            data_dir,
            source,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSource {
    ConfigOverride,
    EnvVar,
    PlatformDefault,
    HomeFallback,
}

impl std::fmt::Display for PathSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathSource::ConfigOverride => write!(f, "config override"),
            PathSource::EnvVar => write!(f, "{DATA_DIR_ENV_VAR}"),
            PathSource::PlatformDefault => write!(f, "platform default"),
            PathSource::HomeFallback => write!(f, "home fallback"),
        }
    }
}

/// Detect data paths.
///
/// # Errors
/// Returns `SessionError::PathDetection` if no location can be determined.
pub fn detect_data_paths(override_dir: Option<&Path>) -> Result<DataPaths, SessionError> {
    if let Some(dir) = override_dir {
        info!("Using configured data dir: {:?}", dir);
        return Ok(DataPaths::rooted_at(dir.to_path_buf(), PathSource::ConfigOverride));
    }

    if let Ok(custom_dir) = env::var(DATA_DIR_ENV_VAR) {
        if !custom_dir.trim().is_empty() {
            info!("Using {DATA_DIR_ENV_VAR} override: {custom_dir}");
            return Ok(DataPaths::rooted_at(PathBuf::from(custom_dir), PathSource::EnvVar));
        }
    }

    if let Some(data_dir) = dirs::data_local_dir() {
        let data_dir = data_dir.join(DASHBOARD_APP_DIR);
        debug!("Platform data dir: {:?}", data_dir);
        return Ok(DataPaths::rooted_at(data_dir, PathSource::PlatformDefault));
    }

    if let Some(home) = dirs::home_dir() {
        let data_dir = home.join(format!(".{DASHBOARD_APP_DIR}"));
        warn!("Using home fallback path: {:?}", data_dir);
        return Ok(DataPaths::rooted_at(data_dir, PathSource::HomeFallback));
    }

    Err(SessionError::path_detection(format!(
        "Cannot determine data directory. Set {DATA_DIR_ENV_VAR} environment variable."
    )))
}
