use serde::{Deserialize, Serialize};

const EMPTY_CELL: &str = "-";

/// One shortened URL owned by the signed-in user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UrlRecord {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub long_url: String,
    pub short_url: String,
    pub custom_alias: Option<String>,
    pub topic: Option<String>,
    pub clicks: u64,
    pub total_clicks: Option<u64>,
    pub created_at: Option<String>,
}

impl UrlRecord {
    /// Identifier accepted by `DELETE /api/url/:id`.
    ///
    /// The backend keys deletions on `_id`; `id` is only a fallback.
    pub fn record_id(&self) -> Option<&str> {
        self.object_id
            .as_deref()
            .or(self.id.as_deref())
            .filter(|id| !id.is_empty())
    }

    pub fn alias_or_dash(&self) -> &str {
        non_empty_or_dash(self.custom_alias.as_deref())
    }

    pub fn topic_or_dash(&self) -> &str {
        non_empty_or_dash(self.topic.as_deref())
    }
}

fn non_empty_or_dash(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or(EMPTY_CELL)
}

/// Envelope of `GET /api/getUrls`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UrlListResponse {
    pub data: Vec<UrlRecord>,
}
