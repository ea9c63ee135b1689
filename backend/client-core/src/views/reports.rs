//! Reports page: pick a topic or a URL alias and chart its clicks.
//!
//! The two selectors are mutually exclusive. Choosing one clears the other,
//! and each is disabled while the other holds a value.

use crate::shortener_client::ShortenerClient;
use crate::views::ChartPoint;
use crate::views::analytics::clicks_by_date;

use models::{AnalyticsSummary, UrlRecord};

use log::error;

const SHORT_URL_LABEL_CHARS: usize = 30;

#[derive(Debug, Default)]
pub struct ReportsView {
    pub(crate) urls: Vec<UrlRecord>,
    pub(crate) selected_topic: Option<String>,
    pub(crate) selected_alias: Option<String>,
    pub(crate) topic_data: Option<AnalyticsSummary>,
    pub(crate) alias_data: Option<AnalyticsSummary>,
}

impl ReportsView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already fetched URL list.
    pub fn with_urls(urls: Vec<UrlRecord>) -> Self {
        Self {
            urls,
            ..Self::default()
        }
    }

    /// Load the URL list that feeds both selectors. On failure it is empty.
    pub async fn load(&mut self, client: &ShortenerClient) {
        self.urls = match client.list_urls().await {
            Ok(urls) => urls,
            Err(e) => {
                error!("Error fetching data: {}", e);
                Vec::new()
            }
        };
    }

    pub fn urls(&self) -> &[UrlRecord] {
        &self.urls
    }

    /// Distinct topics in first-seen order.
    pub fn topics(&self) -> Vec<&str> {
        distinct(self.urls.iter().filter_map(|url| url.topic.as_deref()))
    }

    /// Distinct custom aliases in first-seen order.
    pub fn aliases(&self) -> Vec<&str> {
        distinct(self.urls.iter().filter_map(|url| url.custom_alias.as_deref()))
    }

    pub fn selected_topic(&self) -> Option<&str> {
        self.selected_topic.as_deref()
    }

    pub fn selected_alias(&self) -> Option<&str> {
        self.selected_alias.as_deref()
    }

    pub fn topic_menu_enabled(&self) -> bool {
        self.selected_alias.is_none()
    }

    pub fn alias_menu_enabled(&self) -> bool {
        self.selected_topic.is_none()
    }

    /// Choose a topic (`None` means "All Topics"). Clears the alias selection.
    pub fn select_topic(&mut self, topic: Option<String>) {
        self.selected_topic = topic.filter(|t| !t.is_empty());
        self.selected_alias = None;
        self.topic_data = None;
        self.alias_data = None;
    }

    /// Choose an alias (`None` means "All URLs"). Clears the topic selection.
    pub fn select_alias(&mut self, alias: Option<String>) {
        self.selected_alias = alias.filter(|a| !a.is_empty());
        self.selected_topic = None;
        self.topic_data = None;
        self.alias_data = None;
    }

    /// Fetch analytics for whatever is currently selected.
    pub async fn load_selection(&mut self, client: &ShortenerClient) {
        if let Some(topic) = self.selected_topic.clone() {
            self.topic_data = match client.topic_analytics(&topic).await {
                Ok(summary) => Some(summary),
                Err(e) => {
                    error!("Error fetching topic analytics: {}", e);
                    None
                }
            };
        } else if let Some(alias) = self.selected_alias.clone() {
            self.alias_data = match client.alias_analytics(&alias).await {
                Ok(summary) => Some(summary),
                Err(e) => {
                    error!("Error fetching URL analytics: {}", e);
                    None
                }
            };
        }
    }

    /// Attach analytics fetched elsewhere to the current selection.
    ///
    /// Ignored when nothing is selected.
    pub fn set_selection_data(&mut self, summary: AnalyticsSummary) {
        if self.selected_topic.is_some() {
            self.topic_data = Some(summary);
        } else if self.selected_alias.is_some() {
            self.alias_data = Some(summary);
        }
    }

    pub fn title(&self) -> String {
        match (&self.selected_topic, &self.selected_alias) {
            (Some(topic), _) => format!("Data for Topic: {topic}"),
            (None, Some(alias)) => format!("Data for URL: {alias}"),
            (None, None) => String::from("Overall Data Distribution"),
        }
    }

    /// Series for the bar chart.
    ///
    /// A selection whose analytics have not arrived falls back to the
    /// per-URL distribution.
    pub fn chart_data(&self, date_format: &str) -> Vec<ChartPoint> {
        if let (Some(_), Some(summary)) = (&self.selected_topic, &self.topic_data) {
            return clicks_by_date(summary, date_format);
        }

        if let (Some(_), Some(summary)) = (&self.selected_alias, &self.alias_data) {
            return clicks_by_date(summary, date_format);
        }

        self.urls
            .iter()
            .map(|url| {
                let label = match url.topic.as_deref().filter(|t| !t.is_empty()) {
                    Some(topic) => topic.to_string(),
                    None => short_url_label(&url.short_url),
                };
                ChartPoint::new(label, url.total_clicks.unwrap_or(0))
            })
            .collect()
    }
}

/// First characters of the short URL, always followed by `...`.
fn short_url_label(short_url: &str) -> String {
    let head: String = short_url.chars().take(SHORT_URL_LABEL_CHARS).collect();
    format!("{head}...")
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen: Vec<&str> = Vec::new();
    for value in values.filter(|v| !v.is_empty()) {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}
