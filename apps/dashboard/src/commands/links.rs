use crate::commands::Context;
use crate::error::DashboardError;

use client_core::CoreError;

use models::{ShortenRequestBuilder, ShortenResponse, UrlRecord};

use log::info;

pub async fn shorten(
    ctx: &Context,
    long_url: &str,
    alias: Option<String>,
    topic: Option<String>,
) -> Result<ShortenResponse, DashboardError> {
    let request = ShortenRequestBuilder::default()
        .with_long_url(long_url)
        .with_custom_alias(alias.unwrap_or_default())
        .with_topic(topic.unwrap_or_default())
        .build()
        .map_err(CoreError::from)?;

    let created = ctx.client().create_url(&request).await?;
    info!("Created short URL for {}", request.long_url);

    Ok(created)
}

pub async fn list(ctx: &Context) -> Result<Vec<UrlRecord>, DashboardError> {
    Ok(ctx.client().list_urls().await?)
}

pub async fn delete(ctx: &Context, id: &str) -> Result<(), DashboardError> {
    ctx.client().delete_url(id).await?;
    info!("Deleted URL {id}");
    Ok(())
}

pub async fn resolve(ctx: &Context, alias: &str) -> Result<String, DashboardError> {
    Ok(ctx.client().resolve_alias(alias).await?)
}
