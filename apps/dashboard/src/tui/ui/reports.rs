use crate::tui::app::App;
use crate::tui::ui::analytics::draw_bar_chart;
use crate::tui::ui::common::panel;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

pub fn draw_reports_page(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(8)])
        .split(area);

    let selectors = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);

    let reports = &app.reports;
    draw_selector(
        frame,
        "Topic [t]",
        reports.selected_topic().unwrap_or("All Topics"),
        reports.topics().len(),
        reports.topic_menu_enabled(),
        selectors[0],
    );
    draw_selector(
        frame,
        "URL [a]",
        reports.selected_alias().unwrap_or("All URLs"),
        reports.aliases().len(),
        reports.alias_menu_enabled(),
        selectors[1],
    );

    draw_bar_chart(
        frame,
        &reports.title(),
        &reports.chart_data(app.date_format()),
        Color::Cyan,
        chunks[1],
    );
}

fn draw_selector(
    frame: &mut Frame,
    title: &str,
    value: &str,
    option_count: usize,
    enabled: bool,
    area: Rect,
) {
    let value_style = if enabled {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let line = Line::from(vec![
        Span::styled(value.to_string(), value_style),
        Span::styled(
            format!("  ({option_count} options)"),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(panel(title)), area);
}
