//! TUI application state and the page operations behind each key.

use crate::commands::Context;
use crate::state::StateCommand;

use client_core::session::Session;
use client_core::views::navigation::guard;
use client_core::views::{
    AnalyticsView, OverviewView, Page, ReportsView, Route, SubmitOutcome,
};

use models::UrlRecord;

use log::{error, info};
use ratatui::widgets::TableState;

/// Which widget on the Dashboard page receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    LongUrl,
    CustomAlias,
    Topic,
    Table,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::LongUrl => Focus::CustomAlias,
            Focus::CustomAlias => Focus::Topic,
            Focus::Topic => Focus::Table,
            Focus::Table => Focus::LongUrl,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::LongUrl => Focus::Table,
            Focus::CustomAlias => Focus::LongUrl,
            Focus::Topic => Focus::CustomAlias,
            Focus::Table => Focus::Topic,
        }
    }

    pub fn is_text_field(self) -> bool {
        self != Focus::Table
    }
}

pub struct App<'a> {
    pub ctx: &'a Context,
    pub route: Route,
    pub page: Page,

    /// Redirect URL or token typed on the sign-in screen
    pub login_input: String,

    pub overview: OverviewView,
    pub analytics: AnalyticsView,
    pub reports: ReportsView,

    pub focus: Focus,
    pub table_state: TableState,
    /// Record id awaiting delete confirmation
    pub pending_delete: Option<String>,

    pub status_message: String,
    pub error_message: String,
}

impl<'a> App<'a> {
    /// Build the app, restoring a stored session if there is one.
    ///
    /// `start_path` is a route path such as `/analytics`; without one the
    /// configured start page is used.
    pub async fn new(ctx: &'a Context, start_path: Option<&str>) -> Self {
        let mut app = Self {
            ctx,
            route: Route::Home,
            page: ctx.config.ui.start_page,
            login_input: String::new(),
            overview: OverviewView::new(),
            analytics: AnalyticsView::new(),
            reports: ReportsView::new(),
            focus: Focus::LongUrl,
            table_state: TableState::default(),
            pending_delete: None,
            status_message: String::new(),
            error_message: String::new(),
        };

        if let Some(session) = ctx.sessions.restore().await {
            app.set_session(session).await;
        }

        let requested = start_path.map_or(Route::Home, Route::from_path);
        app.navigate(requested).await;

        app
    }

    /// Current session, read from the shared state.
    pub async fn session(&self) -> Option<Session> {
        self.ctx.state.get_session().await
    }

    pub async fn is_signed_in(&self) -> bool {
        self.ctx.state.is_signed_in().await
    }

    pub fn date_format(&self) -> &str {
        self.ctx.date_format()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message.clear();
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = message.into();
        self.status_message.clear();
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Go to `route`, subject to the session guard.
    ///
    /// A signed-in user sent home lands on the configured start page.
    pub async fn navigate(&mut self, route: Route) {
        let landed = guard(route, self.is_signed_in().await);
        self.route = landed;

        let page = if route == Route::Home && landed == Route::Dashboard {
            Some(self.ctx.config.ui.start_page)
        } else {
            landed.page()
        };

        if let Some(page) = page {
            self.open_page(page).await;
        }
    }

    /// Switch sidebar page and load its data.
    pub async fn open_page(&mut self, page: Page) {
        self.page = page;
        self.pending_delete = None;
        self.reload_page().await;
    }

    pub async fn reload_page(&mut self) {
        let client = self.ctx.client();

        match self.page {
            Page::Dashboard => {
                self.overview.refresh(client).await;
                self.clamp_selection();
            }
            Page::Analytics => self.analytics.load(client).await,
            Page::Reports => {
                self.reports.load(client).await;
                self.reports.load_selection(client).await;
            }
            Page::Profile => {}
        }
    }

    // ------------------------------------------------------------------
    // Session
    // ------------------------------------------------------------------

    /// Record `session` in the shared state. Returns whether it took.
    async fn set_session(&mut self, session: Session) -> bool {
        match self.ctx.state.update(StateCommand::SetSession(session)).await {
            Ok(()) => true,
            Err(e) => {
                error!("Failed to record session: {}", e);
                self.set_error("Signed in, but the session could not be recorded");
                false
            }
        }
    }

    /// Complete sign-in with whatever was typed on the home screen.
    pub async fn login(&mut self) {
        let input = std::mem::take(&mut self.login_input);
        if input.trim().is_empty() {
            return;
        }

        match self.ctx.sessions.login_with_callback(&input).await {
            Ok(Some(session)) => {
                let greeting = format!("Welcome, {}!", session.user.greeting_name());
                if self.set_session(session).await {
                    self.navigate(Route::Home).await;
                    self.set_status(greeting);
                }
            }
            Ok(None) => self.set_error("Login failed: no valid token found"),
            Err(e) => {
                error!("Failed to store token: {}", e);
                self.set_error("Login failed: could not store the token");
            }
        }
    }

    pub async fn logout(&mut self) {
        if let Err(e) = self.ctx.sessions.logout() {
            error!("Failed to clear stored token: {}", e);
        }
        if let Err(e) = self.ctx.state.update(StateCommand::ClearSession).await {
            error!("Failed to clear session: {}", e);
        }

        self.overview = OverviewView::new();
        self.analytics = AnalyticsView::new();
        self.reports = ReportsView::new();
        self.table_state = TableState::default();
        self.navigate(Route::Home).await;
        self.set_status("Logged out");
        info!("Signed out from the TUI");
    }

    // ------------------------------------------------------------------
    // Dashboard page
    // ------------------------------------------------------------------

    pub fn focused_input(&mut self) -> Option<&mut String> {
        let form = &mut self.overview.form;
        match self.focus {
            Focus::LongUrl => Some(&mut form.long_url),
            Focus::CustomAlias => Some(&mut form.custom_alias),
            Focus::Topic => Some(&mut form.topic),
            Focus::Table => None,
        }
    }

    pub async fn submit_form(&mut self) {
        match self.overview.submit(self.ctx.client()).await {
            SubmitOutcome::Skipped => self.set_error("Long URL is required"),
            SubmitOutcome::Created { short_url } => {
                self.focus = Focus::LongUrl;
                self.clamp_selection();
                match short_url {
                    Some(short_url) => self.set_status(format!("Short URL created: {short_url}")),
                    None => self.set_status("Short URL created"),
                }
            }
            SubmitOutcome::Failed => self.set_error("Failed to create short URL"),
        }
    }

    pub fn selected_url(&self) -> Option<&UrlRecord> {
        self.table_state
            .selected()
            .and_then(|index| self.overview.urls().get(index))
    }

    pub fn move_selection_up(&mut self) {
        if self.overview.total() == 0 {
            return;
        }
        let index = self.table_state.selected().unwrap_or(0);
        self.table_state.select(Some(index.saturating_sub(1)));
    }

    pub fn move_selection_down(&mut self) {
        let total = self.overview.total();
        if total == 0 {
            return;
        }
        let index = self.table_state.selected().map_or(0, |i| i + 1);
        self.table_state.select(Some(index.min(total - 1)));
    }

    fn clamp_selection(&mut self) {
        let total = self.overview.total();
        let selected = match (total, self.table_state.selected()) {
            (0, _) => None,
            (_, None) => Some(0),
            (_, Some(index)) => Some(index.min(total - 1)),
        };
        self.table_state.select(selected);
    }

    /// Ask for confirmation before deleting the selected row.
    pub fn request_delete(&mut self) {
        let Some(url) = self.selected_url() else {
            return;
        };

        match url.record_id().map(str::to_string) {
            Some(id) => {
                let short_url = url.short_url.clone();
                self.pending_delete = Some(id);
                self.set_status(format!("Delete {short_url}? [y] yes / [n] no"));
            }
            None => self.set_error("This URL has no id and cannot be deleted"),
        }
    }

    pub async fn confirm_delete(&mut self) {
        let Some(id) = self.pending_delete.take() else {
            return;
        };

        if self.overview.delete(self.ctx.client(), &id).await {
            self.clamp_selection();
            self.set_status("Short URL deleted");
        } else {
            self.set_error("Failed to delete short URL");
        }
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
        self.set_status("Delete cancelled");
    }

    /// Copy the selected short URL to the system clipboard.
    pub fn copy_selected(&mut self) {
        let Some(short_url) = self.selected_url().map(|url| url.short_url.clone()) else {
            return;
        };

        let copied = arboard::Clipboard::new().and_then(|mut clipboard| {
            clipboard.set_text(short_url.as_str())
        });
        self.report_copy(&short_url, copied);
    }

    /// Status line after a copy attempt. Without a clipboard the URL itself
    /// is shown so it can still be selected from the terminal.
    pub fn report_copy(&mut self, short_url: &str, copied: Result<(), arboard::Error>) {
        match copied {
            Ok(()) => self.set_status(format!("Copied: {short_url}")),
            Err(e) => {
                error!("Clipboard unavailable: {}", e);
                self.set_error(format!("Clipboard unavailable, short URL: {short_url}"));
            }
        }
    }

    // ------------------------------------------------------------------
    // Reports page
    // ------------------------------------------------------------------

    /// Step the topic selector: All Topics, each topic, back to All Topics.
    pub async fn cycle_topic(&mut self) {
        if !self.reports.topic_menu_enabled() {
            self.set_error("Clear the URL selection first [c]");
            return;
        }

        let topics: Vec<String> = self.reports.topics().iter().map(|t| t.to_string()).collect();
        let next = next_option(&topics, self.reports.selected_topic());
        self.reports.select_topic(next);
        self.reports.load_selection(self.ctx.client()).await;
    }

    /// Step the alias selector: All URLs, each alias, back to All URLs.
    pub async fn cycle_alias(&mut self) {
        if !self.reports.alias_menu_enabled() {
            self.set_error("Clear the topic selection first [c]");
            return;
        }

        let aliases: Vec<String> = self
            .reports
            .aliases()
            .iter()
            .map(|a| a.to_string())
            .collect();
        let next = next_option(&aliases, self.reports.selected_alias());
        self.reports.select_alias(next);
        self.reports.load_selection(self.ctx.client()).await;
    }

    pub fn clear_report_selection(&mut self) {
        self.reports.select_topic(None);
        self.set_status("Showing overall distribution");
    }
}

/// Option after `current` in `options`; `None` stands for "All".
pub fn next_option(options: &[String], current: Option<&str>) -> Option<String> {
    match current {
        None => options.first().cloned(),
        Some(current) => options
            .iter()
            .position(|option| option == current)
            .and_then(|index| options.get(index + 1))
            .cloned(),
    }
}
