//! Page state shared by the terminal dashboard and the CLI.
//!
//! Views fetch through [`ShortenerClient`](crate::ShortenerClient), keep the
//! latest result, and degrade to empty/zero on failure: errors are logged,
//! never surfaced as a separate view state.

pub mod analytics;
pub mod format;
pub mod navigation;
pub mod overview;
pub mod profile;
pub mod reports;

pub use analytics::{AnalyticsView, StatCard};
pub use navigation::{Page, Route};
pub use overview::{LinkForm, OverviewView, SubmitOutcome};
pub use profile::ProfileView;
pub use reports::ReportsView;

use serde::Serialize;

/// One bar or point of a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: u64,
}

impl ChartPoint {
    pub fn new(label: impl Into<String>, value: u64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}
