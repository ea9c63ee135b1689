mod analytics;
mod common;
mod dashboard;
mod home;
mod profile;
mod reports;

use common::{draw_footer, draw_sidebar, draw_status_bar, draw_title_bar};

use crate::tui::app::App;

use client_core::session::Session;
use client_core::views::{Page, Route};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

const SIDEBAR_WIDTH: u16 = 20;

/// Main UI rendering entry point.
///
/// `session` is the shared state's session, read once per frame.
pub fn ui(frame: &mut Frame, app: &mut App, session: Option<&Session>) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    draw_title_bar(frame, session, main_chunks[0]);

    match app.route {
        Route::Home => home::draw_login_screen(frame, app, main_chunks[1]),
        Route::NotFound => home::draw_not_found_screen(frame, main_chunks[1]),
        Route::Dashboard | Route::Overall | Route::Analytics => {
            let body = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(40)])
                .split(main_chunks[1]);

            draw_sidebar(frame, app, body[0]);

            match app.page {
                Page::Dashboard => dashboard::draw_dashboard_page(frame, app, body[1]),
                Page::Analytics => analytics::draw_analytics_page(frame, app, body[1]),
                Page::Reports => reports::draw_reports_page(frame, app, body[1]),
                Page::Profile => profile::draw_profile_page(frame, app, session, body[1]),
            }
        }
    }

    draw_status_bar(frame, app, main_chunks[2]);
    draw_footer(frame, app, main_chunks[3]);
}
