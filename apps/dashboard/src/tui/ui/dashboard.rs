use crate::tui::app::{App, Focus};
use crate::tui::ui::common::panel;

use client_core::views::format::{ellipsize, format_date};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Row, Table},
};

const URL_TRUNCATE_LENGTH: usize = 40;

pub fn draw_dashboard_page(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    draw_link_form(frame, app, chunks[0]);
    draw_url_table(frame, app, chunks[1]);
}

fn draw_link_form(frame: &mut Frame, app: &App, area: Rect) {
    let fields = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let form = &app.overview.form;
    let inputs = [
        (Focus::LongUrl, "Long URL *", form.long_url.as_str()),
        (Focus::CustomAlias, "Custom Alias", form.custom_alias.as_str()),
        (Focus::Topic, "Topic", form.topic.as_str()),
    ];

    for ((focus, title, value), field_area) in inputs.into_iter().zip(fields.iter()) {
        let focused = app.focus == focus;
        let border = if focused { Color::Yellow } else { Color::DarkGray };

        let mut text = value.to_string();
        if focused {
            text.push('▏');
        }

        let input = Paragraph::new(text).block(panel(title).border_style(Style::default().fg(border)));
        frame.render_widget(input, *field_area);
    }
}

fn draw_url_table(frame: &mut Frame, app: &mut App, area: Rect) {
    let date_format = app.date_format().to_string();
    let title = match app.overview.last_update() {
        Some(at) => format!(
            "Your URLs ({}) - updated {}",
            app.overview.total(),
            at.format("%H:%M:%S")
        ),
        None => format!("Your URLs ({})", app.overview.total()),
    };

    if app.overview.total() == 0 {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No URLs found",
                Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Fill in the form above and press [Enter]",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(panel(title))
        .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    let header_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        "Short URL",
        "Original URL",
        "Alias",
        "Topic",
        "Clicks",
        "Created",
    ])
    .style(header_style);

    let rows: Vec<Row> = app
        .overview
        .urls()
        .iter()
        .map(|url| {
            let created = url
                .created_at
                .as_deref()
                .map(|raw| format_date(raw, &date_format))
                .unwrap_or_else(|| String::from("-"));

            Row::new(vec![
                url.short_url.clone(),
                ellipsize(&url.long_url, URL_TRUNCATE_LENGTH),
                url.alias_or_dash().to_string(),
                url.topic_or_dash().to_string(),
                url.clicks.to_string(),
                created,
            ])
        })
        .collect();

    let highlight = if app.focus == Focus::Table {
        Style::default().fg(Color::Black).bg(Color::Yellow)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(24),
            Constraint::Percentage(34),
            Constraint::Percentage(12),
            Constraint::Percentage(12),
            Constraint::Length(7),
            Constraint::Length(12),
        ],
    )
    .header(header)
    .block(panel(title))
    .row_highlight_style(highlight)
    .highlight_symbol("> ");

    frame.render_stateful_widget(table, area, &mut app.table_state);
}
