use crate::cli::AnalyticsScope;
use crate::commands::Context;
use crate::error::DashboardError;

use client_core::views::{AnalyticsView, ReportsView};

pub async fn summary(
    ctx: &Context,
    scope: &AnalyticsScope,
) -> Result<AnalyticsView, DashboardError> {
    let client = ctx.client();

    let summary = match scope {
        AnalyticsScope::Overall => client.overall_analytics().await?,
        AnalyticsScope::Topic { topic } => client.topic_analytics(topic).await?,
        AnalyticsScope::Alias { alias } => client.alias_analytics(alias).await?,
    };

    Ok(AnalyticsView::from_summary(summary))
}

/// Reports page in one shot: the URL list, then analytics for at most one
/// of `topic` / `alias`.
pub async fn report(
    ctx: &Context,
    topic: Option<String>,
    alias: Option<String>,
) -> Result<ReportsView, DashboardError> {
    let client = ctx.client();
    let mut view = ReportsView::with_urls(client.list_urls().await?);

    if let Some(topic) = topic {
        view.select_topic(Some(topic));
    } else if let Some(alias) = alias {
        view.select_alias(Some(alias));
    }

    if let Some(topic) = view.selected_topic() {
        let summary = client.topic_analytics(topic).await?;
        view.set_selection_data(summary);
    } else if let Some(alias) = view.selected_alias() {
        let summary = client.alias_analytics(alias).await?;
        view.set_selection_data(summary);
    }

    Ok(view)
}
