//! Link creation form and the table of the user's short URLs.

use crate::shortener_client::ShortenerClient;

use models::{ShortenRequestBuilder, UrlRecord};

use chrono::{DateTime, Utc};
use log::{error, info};

/// Text fields of the "Shorten Your URL" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkForm {
    pub long_url: String,
    pub custom_alias: String,
    pub topic: String,
}

impl LinkForm {
    pub fn clear(&mut self) {
        self.long_url.clear();
        self.custom_alias.clear();
        self.topic.clear();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Long URL was blank; nothing was sent.
    Skipped,
    Created { short_url: Option<String> },
    Failed,
}

#[derive(Debug, Default)]
pub struct OverviewView {
    pub form: LinkForm,
    urls: Vec<UrlRecord>,
    last_update: Option<DateTime<Utc>>,
}

impl OverviewView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn urls(&self) -> &[UrlRecord] {
        &self.urls
    }

    /// Number shown next to "Your Shortened URLs".
    pub fn total(&self) -> usize {
        self.urls.len()
    }

    /// When the last successful mutation triggered a refresh.
    pub fn last_update(&self) -> Option<DateTime<Utc>> {
        self.last_update
    }

    /// Reload the table. On failure the rows already shown stay.
    pub async fn refresh(&mut self, client: &ShortenerClient) {
        match client.list_urls().await {
            Ok(urls) => self.urls = urls,
            Err(e) => error!("Error fetching URLs: {}", e),
        }
    }

    /// Submit the form.
    ///
    /// The form is cleared on every non-blank submit, whether the backend
    /// accepted it or not.
    pub async fn submit(&mut self, client: &ShortenerClient) -> SubmitOutcome {
        if self.form.long_url.trim().is_empty() {
            return SubmitOutcome::Skipped;
        }

        let request = ShortenRequestBuilder::default()
            .with_long_url(self.form.long_url.as_str())
            .with_custom_alias(self.form.custom_alias.as_str())
            .with_topic(self.form.topic.as_str())
            .build();
        self.form.clear();

        let request = match request {
            Ok(request) => request,
            Err(e) => {
                error!("Error creating URL: {}", e);
                return SubmitOutcome::Failed;
            }
        };

        match client.create_url(&request).await {
            Ok(created) => {
                info!("Created short URL for {}", request.long_url);
                self.mark_updated(client).await;
                SubmitOutcome::Created {
                    short_url: created.short_url,
                }
            }
            Err(e) => {
                error!("Error creating URL: {}", e);
                SubmitOutcome::Failed
            }
        }
    }

    /// Delete one row by its record id. Returns whether the backend accepted it.
    pub async fn delete(&mut self, client: &ShortenerClient, id: &str) -> bool {
        match client.delete_url(id).await {
            Ok(()) => {
                info!("Deleted URL {id}");
                self.mark_updated(client).await;
                true
            }
            Err(e) => {
                error!("Error deleting URL: {}", e);
                false
            }
        }
    }

    async fn mark_updated(&mut self, client: &ShortenerClient) {
        self.last_update = Some(Utc::now());
        self.refresh(client).await;
    }
}
