use crate::tui::app::App;
use crate::tui::ui::common::panel;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

pub fn draw_login_screen(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(3)])
        .split(area);

    let login_url = match app.ctx.client().login_url() {
        Ok(url) => url.to_string(),
        Err(e) => format!("(invalid API URL: {e})"),
    };

    let intro = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Shorten links, track clicks, and see who visits",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("1. Open this URL in your browser and sign in with Google:"),
        Line::from(Span::styled(
            login_url,
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
        )),
        Line::from(""),
        Line::from("2. Paste the URL you were redirected to (or just the token) below."),
    ];

    let intro = Paragraph::new(intro)
        .block(panel("Sign in"))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(intro, chunks[0]);

    let input = Paragraph::new(app.login_input.as_str())
        .style(Style::default().fg(Color::Yellow))
        .block(panel("Redirect URL or token"));
    frame.render_widget(input, chunks[1]);
}

pub fn draw_not_found_screen(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "404",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from("Page not found"),
        Line::from(""),
        Line::from(Span::styled(
            "Press [Enter] to go home",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .block(panel("Not Found"))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
