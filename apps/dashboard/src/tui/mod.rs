//! Terminal dashboard.
//!
//! Same pages as the web dashboard: sign-in, the link form and table,
//! analytics charts, reports and the profile card.

use crate::commands::Context;
use crate::error::DashboardError;

use std::io::{self, Stderr};

use log::{error, info};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};

pub mod app;
mod event_handler;
mod ui;

use app::App;
use ui::ui;

type DashboardTerminal = Terminal<CrosstermBackend<Stderr>>;

/// Run the TUI until the user quits.
pub async fn run_tui(ctx: &Context, start_path: Option<&str>) -> Result<(), DashboardError> {
    // Session restore and first page load happen before the screen switches
    let mut app = App::new(ctx, start_path).await;

    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    info!("TUI started");
    let res = run_app(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    info!("TUI stopped");

    if let Err(ref e) = res {
        error!("TUI failed: {}", e);
    }

    res
}

async fn run_app(terminal: &mut DashboardTerminal, app: &mut App<'_>) -> Result<(), DashboardError> {
    loop {
        let session = app.session().await;
        terminal
            .draw(|f| ui(f, app, session.as_ref()))
            .map_err(|e| DashboardError::terminal(format!("Failed to draw: {e}")))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && event_handler::handle_key_event(app, key).await
        {
            return Ok(());
        }
    }
}
