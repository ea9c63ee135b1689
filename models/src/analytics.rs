use serde::{Deserialize, Serialize};

/// Aggregates returned by the three analytics endpoints.
///
/// `overall` fills the url/os/device sections, `topic` fills `urls`, and
/// the per-alias endpoint fills os/device. Sections the endpoint does not
/// send stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_urls: u64,
    pub total_clicks: u64,
    pub unique_users: u64,
    pub clicks_by_date: Vec<ClicksByDate>,
    pub os_type: Vec<OsTypeStat>,
    pub device_type: Vec<DeviceTypeStat>,
    pub urls: Vec<UrlClicks>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClicksByDate {
    pub date: String,
    pub click_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OsTypeStat {
    pub os_name: String,
    pub unique_clicks: u64,
    pub unique_users: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeviceTypeStat {
    pub device_name: String,
    pub unique_clicks: u64,
    pub unique_users: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UrlClicks {
    pub short_url: String,
    pub total_clicks: u64,
    pub unique_users: u64,
}
