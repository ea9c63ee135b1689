use client_core::CoreError;
use client_core::error::{ConfigError, SessionError, ShortenerClientError};

use common::ErrorLocation;

use std::panic::Location;

use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by CLI commands and the terminal dashboard.
///
/// Serializable so `--json` can print them as structured output; the
/// location of the conversion site is kept for the log.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum DashboardError {
    /// Error from this app
    #[error("Dashboard Error: {message} {location}")]
    Dashboard {
        message: String,
        location: ErrorLocation,
    },

    /// Error from client-core (config, credential store, HTTP)
    #[error("Core Error: {message} {location}")]
    Core {
        message: String,
        location: ErrorLocation,
    },

    /// No stored token, or the backend rejected it
    #[error("Not Logged In: {message} {location}")]
    NotLoggedIn {
        message: String,
        location: ErrorLocation,
    },

    /// Terminal setup, drawing or input failed
    #[error("Terminal Error: {message} {location}")]
    Terminal {
        message: String,
        location: ErrorLocation,
    },
}

impl DashboardError {
    #[track_caller]
    pub fn dashboard(message: impl Into<String>) -> Self {
        DashboardError::Dashboard {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_logged_in(message: impl Into<String>) -> Self {
        DashboardError::NotLoggedIn {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn terminal(message: impl Into<String>) -> Self {
        DashboardError::Terminal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ShortenerClientError> for DashboardError {
    #[track_caller]
    fn from(error: ShortenerClientError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match error {
            ShortenerClientError::MissingToken { .. } => DashboardError::NotLoggedIn {
                message: String::from("No stored token, run `login` first"),
                location,
            },
            ShortenerClientError::Unauthorized { .. } => DashboardError::NotLoggedIn {
                message: String::from("Token rejected by server, run `login` again"),
                location,
            },
            other => DashboardError::Core {
                message: other.to_string(),
                location,
            },
        }
    }
}

impl From<CoreError> for DashboardError {
    #[track_caller]
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Client(client_error) => DashboardError::from(client_error),
            other => DashboardError::Core {
                message: other.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

impl From<ConfigError> for DashboardError {
    #[track_caller]
    fn from(error: ConfigError) -> Self {
        DashboardError::Core {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<SessionError> for DashboardError {
    #[track_caller]
    fn from(error: SessionError) -> Self {
        DashboardError::Core {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<std::io::Error> for DashboardError {
    #[track_caller]
    fn from(error: std::io::Error) -> Self {
        DashboardError::Terminal {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
