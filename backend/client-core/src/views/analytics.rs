//! Overall analytics page: stat cards plus three charts.

use crate::shortener_client::ShortenerClient;
use crate::views::ChartPoint;
use crate::views::format::format_date;

use models::AnalyticsSummary;

use log::error;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub title: &'static str,
    pub value: u64,
}

#[derive(Debug, Default)]
pub struct AnalyticsView {
    summary: AnalyticsSummary,
}

impl AnalyticsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_summary(summary: AnalyticsSummary) -> Self {
        Self { summary }
    }

    pub fn summary(&self) -> &AnalyticsSummary {
        &self.summary
    }

    /// Replace the summary; a failed fetch resets every figure to zero.
    pub async fn load(&mut self, client: &ShortenerClient) {
        self.summary = match client.overall_analytics().await {
            Ok(summary) => summary,
            Err(e) => {
                error!("Error fetching analytics data: {}", e);
                AnalyticsSummary::default()
            }
        };
    }

    pub fn stat_cards(&self) -> [StatCard; 4] {
        [
            StatCard {
                title: "Total URLs",
                value: self.summary.total_urls,
            },
            StatCard {
                title: "Total Clicks",
                value: self.summary.total_clicks,
            },
            StatCard {
                title: "Unique Users",
                value: self.summary.unique_users,
            },
            StatCard {
                title: "Device Types",
                value: self.summary.device_type.len() as u64,
            },
        ]
    }

    pub fn clicks_over_time(&self, date_format: &str) -> Vec<ChartPoint> {
        clicks_by_date(&self.summary, date_format)
    }

    pub fn os_distribution(&self) -> Vec<ChartPoint> {
        self.summary
            .os_type
            .iter()
            .map(|os| ChartPoint::new(os.os_name.as_str(), os.unique_clicks))
            .collect()
    }

    pub fn device_distribution(&self) -> Vec<ChartPoint> {
        self.summary
            .device_type
            .iter()
            .map(|device| ChartPoint::new(device.device_name.as_str(), device.unique_clicks))
            .collect()
    }
}

/// Date buckets of any analytics summary, labels formatted for display.
pub fn clicks_by_date(summary: &AnalyticsSummary, date_format: &str) -> Vec<ChartPoint> {
    summary
        .clicks_by_date
        .iter()
        .map(|bucket| ChartPoint::new(format_date(&bucket.date, date_format), bucket.click_count))
        .collect()
}
