pub mod builder;

use serde::{Deserialize, Serialize};

/// Body of `POST /api/shorten`.
///
/// Optional fields travel as empty strings, the way the web form posts them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    pub long_url: String,
    pub custom_alias: String,
    pub topic: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_url: Option<String>,
    pub created_at: Option<String>,
}

/// Body of `GET /api/shorten/:alias`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RedirectResponse {
    pub long_url: Option<String>,
}
