//! Keyboard handling, dispatched on the current route and page.

use crate::tui::app::{App, Focus};

use client_core::views::{Page, Route};

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle one key press. Returns `true` when the app should exit.
pub async fn handle_key_event(app: &mut App<'_>, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match app.route {
        Route::Home => handle_home(app, key.code).await,
        Route::NotFound => handle_not_found(app, key.code).await,
        Route::Dashboard | Route::Overall | Route::Analytics => {
            handle_dashboard_routes(app, key.code).await
        }
    }
}

async fn handle_home(app: &mut App<'_>, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Esc => return true,
        KeyCode::Enter => app.login().await,
        KeyCode::Backspace => {
            app.login_input.pop();
        }
        KeyCode::Char(value) => app.login_input.push(value),
        _ => {}
    }
    false
}

async fn handle_not_found(app: &mut App<'_>, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Enter => app.navigate(Route::Home).await,
        _ => {}
    }
    false
}

async fn handle_dashboard_routes(app: &mut App<'_>, key_code: KeyCode) -> bool {
    if app.pending_delete.is_some() {
        match key_code {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_delete().await,
            _ => app.cancel_delete(),
        }
        return false;
    }

    if app.page == Page::Dashboard && app.focus.is_text_field() {
        handle_form(app, key_code).await;
        return false;
    }

    match key_code {
        KeyCode::Char('q') => return true,
        KeyCode::Char(digit @ '1'..='4') => {
            let index = digit as usize - '1' as usize;
            app.open_page(Page::ALL[index]).await;
        }
        KeyCode::Right | KeyCode::Char(']') => app.open_page(app.page.next()).await,
        KeyCode::Left | KeyCode::Char('[') => app.open_page(app.page.previous()).await,
        KeyCode::Char('r') => {
            app.reload_page().await;
            app.set_status(format!("{} reloaded", app.page.title()));
        }
        _ => match app.page {
            Page::Dashboard => handle_table(app, key_code),
            Page::Reports => handle_reports(app, key_code).await,
            Page::Profile => handle_profile(app, key_code).await,
            Page::Analytics => {}
        },
    }
    false
}

async fn handle_form(app: &mut App<'_>, key_code: KeyCode) {
    match key_code {
        KeyCode::Enter => app.submit_form().await,
        KeyCode::Tab | KeyCode::Down => app.focus = app.focus.next(),
        KeyCode::BackTab | KeyCode::Up => app.focus = app.focus.previous(),
        KeyCode::Esc => app.focus = Focus::Table,
        KeyCode::Backspace => {
            if let Some(input) = app.focused_input() {
                input.pop();
            }
        }
        KeyCode::Char(value) => {
            if let Some(input) = app.focused_input() {
                input.push(value);
            }
        }
        _ => {}
    }
}

fn handle_table(app: &mut App<'_>, key_code: KeyCode) {
    match key_code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),
        KeyCode::Tab | KeyCode::Char('n') => app.focus = Focus::LongUrl,
        KeyCode::BackTab => app.focus = Focus::Topic,
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete(),
        KeyCode::Char('y') => app.copy_selected(),
        _ => {}
    }
}

async fn handle_reports(app: &mut App<'_>, key_code: KeyCode) {
    match key_code {
        KeyCode::Char('t') => app.cycle_topic().await,
        KeyCode::Char('a') => app.cycle_alias().await,
        KeyCode::Char('c') | KeyCode::Esc => app.clear_report_selection(),
        _ => {}
    }
}

async fn handle_profile(app: &mut App<'_>, key_code: KeyCode) {
    if key_code == KeyCode::Char('l') {
        app.logout().await;
    }
}
