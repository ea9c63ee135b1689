use crate::error::model_error::ModelError;
use crate::{ErrorLocation, ShortenRequest};

use std::panic::Location;

/// Builder for a validated [`ShortenRequest`].
///
/// Only the long URL is required; alias and topic are trimmed and default
/// to empty.
#[derive(Debug, Default)]
pub struct ShortenRequestBuilder {
    long_url: Option<String>,
    custom_alias: Option<String>,
    topic: Option<String>,
}

impl ShortenRequestBuilder {
    pub fn with_long_url(mut self, url: impl Into<String>) -> Self {
        self.long_url = Some(url.into());
        self
    }

    pub fn with_custom_alias(mut self, alias: impl Into<String>) -> Self {
        self.custom_alias = Some(alias.into());
        self
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    /// Build the request with validation.
    #[track_caller]
    pub fn build(self) -> Result<ShortenRequest, ModelError> {
        let long_url = self.long_url.ok_or_else(|| ModelError::Validation {
            message: String::from("Long URL is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let long_url = long_url.trim();
        if long_url.is_empty() {
            return Err(ModelError::Validation {
                message: String::from("Long URL cannot be empty"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(ShortenRequest {
            long_url: long_url.to_string(),
            custom_alias: self.custom_alias.unwrap_or_default().trim().to_string(),
            topic: self.topic.unwrap_or_default().trim().to_string(),
        })
    }
}
