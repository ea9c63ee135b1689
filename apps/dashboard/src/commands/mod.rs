//! Command layer shared by the CLI subcommands and the TUI.
//!
//! Each command returns data; printing lives in [`output`] so the same
//! command serves both human and `--json` output.

pub mod analytics;
pub mod auth;
pub mod links;
pub mod output;

use crate::cli::{AnalyticsScope, Command};
use crate::error::DashboardError;
use crate::state::AppState;

use client_core::ShortenerClient;
use client_core::config::AppConfig;
use client_core::session::{CredentialStore, SessionManager};

use std::sync::Arc;

use log::debug;

/// Everything a command needs: configuration, the API client (through the
/// session manager) and the shared session state.
pub struct Context {
    pub config: AppConfig,
    pub sessions: SessionManager,
    pub state: AppState,
    pub json: bool,
}

impl Context {
    pub fn new(
        config: AppConfig,
        credentials: Arc<dyn CredentialStore>,
        json: bool,
    ) -> Result<Self, DashboardError> {
        let client = ShortenerClient::new(&config.api.base_url, config.api.timeout(), credentials)?;

        Ok(Self {
            config,
            sessions: SessionManager::new(client),
            state: AppState::new(),
            json,
        })
    }

    pub fn client(&self) -> &ShortenerClient {
        self.sessions.client()
    }

    pub fn date_format(&self) -> &str {
        &self.config.ui.date_format
    }
}

/// Run one CLI command to completion.
pub async fn run(ctx: &Context, command: Command) -> Result<(), DashboardError> {
    debug!("Running command: {command:?}");

    match command {
        Command::Tui { path } => crate::tui::run_tui(ctx, path.as_deref()).await,
        Command::Login { callback } => {
            let session = auth::login(ctx, callback).await?;
            output::session(ctx, &session)
        }
        Command::Logout => {
            auth::logout(ctx).await?;
            output::message(ctx, "Logged out")
        }
        Command::Whoami => {
            let session = auth::whoami(ctx).await?;
            output::profile(ctx, &session)
        }
        Command::Shorten {
            long_url,
            alias,
            topic,
        } => {
            let created = links::shorten(ctx, &long_url, alias, topic).await?;
            output::created(ctx, &created)
        }
        Command::List => {
            let urls = links::list(ctx).await?;
            output::url_list(ctx, &urls)
        }
        Command::Delete { id } => {
            links::delete(ctx, &id).await?;
            output::message(ctx, &format!("Deleted short URL {id}"))
        }
        Command::Resolve { alias } => {
            let long_url = links::resolve(ctx, &alias).await?;
            output::resolved(ctx, &alias, &long_url)
        }
        Command::Analytics { scope } => {
            let title = match &scope {
                AnalyticsScope::Overall => String::from("Overall Analytics"),
                AnalyticsScope::Topic { topic } => format!("Analytics for Topic: {topic}"),
                AnalyticsScope::Alias { alias } => format!("Analytics for URL: {alias}"),
            };
            let view = analytics::summary(ctx, &scope).await?;
            output::analytics(ctx, &title, &view)
        }
        Command::Report { topic, alias } => {
            let view = analytics::report(ctx, topic, alias).await?;
            output::report(ctx, &view)
        }
    }
}
