//! Errors raised while locating, reading or writing the stored credential.

use common::ErrorLocation;

use std::panic::Location;
use std::path::PathBuf;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum SessionError {
    #[error("Data path detection failed: {message} {location}")]
    PathDetection {
        message: String,
        location: ErrorLocation,
    },

    #[error("Credential Read Error: {path}: {source} {location}")]
    CredentialRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Credential Write Error: {path}: {source} {location}")]
    CredentialWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Credential Parse Error: {path}: {reason} {location}")]
    CredentialParse {
        path: PathBuf,
        reason: String,
        location: ErrorLocation,
    },
}

impl SessionError {
    #[track_caller]
    pub fn path_detection(message: impl Into<String>) -> Self {
        SessionError::PathDetection {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn credential_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SessionError::CredentialRead {
            path: path.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn credential_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SessionError::CredentialWrite {
            path: path.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn credential_parse(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        SessionError::CredentialParse {
            path: path.into(),
            reason: reason.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
