use crate::error::session::SessionError;

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ShortenerClientError {
    #[error("No stored token, log in first {location}")]
    MissingToken { location: ErrorLocation },

    #[error("Unauthorized: token rejected by server {location}")]
    Unauthorized { location: ErrorLocation },

    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        is_timeout: bool,
        is_connection: bool,
        location: ErrorLocation,
    },

    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Server Error: HTTP {status} - {message} {location}")]
    Server {
        status: HttpStatusCode,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid Response: {message} {location}")]
    InvalidResponse {
        message: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Credential(#[from] SessionError),
}

impl ShortenerClientError {
    #[track_caller]
    pub fn missing_token() -> Self {
        ShortenerClientError::MissingToken {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_response(message: impl Into<String>) -> Self {
        ShortenerClientError::InvalidResponse {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn url_parse(message: impl Into<String>) -> Self {
        ShortenerClientError::UrlParse {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Status code for server-side rejections, if any.
    pub fn status(&self) -> Option<HttpStatusCode> {
        match self {
            ShortenerClientError::Server { status, .. } => Some(*status),
            ShortenerClientError::Unauthorized { .. } => Some(HttpStatusCode(401)),
            _ => None,
        }
    }
}

impl From<url::ParseError> for ShortenerClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        ShortenerClientError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for ShortenerClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        // Categorize before the error is flattened into a string
        ShortenerClientError::Http {
            is_timeout: error.is_timeout(),
            is_connection: error.is_connect(),
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for ShortenerClientError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        ShortenerClientError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
