use crate::tui::app::{App, Focus};

use client_core::session::Session;
use client_core::views::{Page, Route};

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
};

pub fn panel(title: impl Into<String>) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(title.into())
        .title_style(Style::default().fg(Color::Cyan))
}

/// Draw title bar with version and the signed-in user
pub fn draw_title_bar(frame: &mut Frame, session: Option<&Session>, area: Rect) {
    let user = match session {
        Some(session) => Span::styled(
            format!("Welcome, {}", session.user.greeting_name()),
            Style::default().fg(Color::Yellow),
        ),
        None => Span::styled("Not signed in", Style::default().fg(Color::DarkGray)),
    };

    let title_text = vec![Line::from(vec![
        Span::styled(
            "Shortener Dashboard",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled("| ", Style::default().fg(Color::DarkGray)),
        user,
    ])];

    let title = Paragraph::new(title_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(title, area);
}

pub fn draw_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = Page::ALL
        .iter()
        .map(|page| ListItem::new(format!(" {} {}", page.index() + 1, page.title())))
        .collect();

    let list = List::new(items)
        .block(panel("Menu"))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default().with_selected(Some(app.page.index()));
    frame.render_stateful_widget(list, area, &mut state);
}

/// Draw status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (status_text, status_style) = if !app.error_message.is_empty() {
        (
            format!("[ERROR] {}", app.error_message),
            Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )
    } else if !app.status_message.is_empty() {
        (
            app.status_message.clone(),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("Ready".to_string(), Style::default().fg(Color::Cyan))
    };

    let status = Paragraph::new(status_text)
        .style(status_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .alignment(Alignment::Center);

    frame.render_widget(status, area);
}

/// Draw footer with keyboard shortcuts
pub fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let shortcuts: Vec<(&str, &str, Color)> = match (app.route, app.page) {
        (Route::Home, _) => vec![
            ("Enter", "Sign in", Color::Green),
            ("Esc", "Quit", Color::Magenta),
        ],
        (Route::NotFound, _) => vec![
            ("Enter", "Home", Color::Green),
            ("q", "Quit", Color::Magenta),
        ],
        _ if app.pending_delete.is_some() => vec![
            ("y", "Confirm delete", Color::Red),
            ("any key", "Cancel", Color::Cyan),
        ],
        (_, Page::Dashboard) if app.focus != Focus::Table => vec![
            ("Tab", "Next field", Color::Cyan),
            ("Enter", "Shorten", Color::Green),
            ("Esc", "Table", Color::Yellow),
        ],
        (_, Page::Dashboard) => vec![
            ("Up/Down", "Navigate", Color::Cyan),
            ("Tab", "Form", Color::Cyan),
            ("y", "Copy", Color::Green),
            ("d", "Delete", Color::Red),
            ("r", "Reload", Color::Yellow),
            ("1-4", "Pages", Color::Blue),
            ("q", "Quit", Color::Magenta),
        ],
        (_, Page::Reports) => vec![
            ("t", "Topic", Color::Cyan),
            ("a", "URL", Color::Cyan),
            ("c", "Clear", Color::Yellow),
            ("r", "Reload", Color::Yellow),
            ("1-4", "Pages", Color::Blue),
            ("q", "Quit", Color::Magenta),
        ],
        (_, Page::Profile) => vec![
            ("l", "Logout", Color::Red),
            ("1-4", "Pages", Color::Blue),
            ("q", "Quit", Color::Magenta),
        ],
        (_, Page::Analytics) => vec![
            ("r", "Reload", Color::Yellow),
            ("1-4", "Pages", Color::Blue),
            ("q", "Quit", Color::Magenta),
        ],
    };

    let mut spans = Vec::new();
    for (index, (key, label, color)) in shortcuts.into_iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{key}]"),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(" {label}")));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
