use crate::tui::app::App;
use crate::tui::ui::common::panel;

use client_core::views::ChartPoint;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Line,
    widgets::{Axis, Bar, BarChart, BarGroup, Chart, Dataset, GraphType, Paragraph},
};

const BAR_WIDTH: u16 = 9;

pub fn draw_analytics_page(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Percentage(50),
            Constraint::Min(8),
        ])
        .split(area);

    draw_stat_cards(frame, app, chunks[0]);
    draw_line_chart(
        frame,
        "Clicks Over Time",
        &app.analytics.clicks_over_time(app.date_format()),
        chunks[1],
    );

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);

    draw_bar_chart(
        frame,
        "OS Distribution",
        &app.analytics.os_distribution(),
        Color::Magenta,
        bottom[0],
    );
    draw_bar_chart(
        frame,
        "Device Distribution",
        &app.analytics.device_distribution(),
        Color::Green,
        bottom[1],
    );
}

fn draw_stat_cards(frame: &mut Frame, app: &App, area: Rect) {
    let cards = app.analytics.stat_cards();
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for (card, slot) in cards.iter().zip(slots.iter()) {
        let value = Paragraph::new(Line::styled(
            card.value.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
        .block(panel(card.title))
        .alignment(Alignment::Center);
        frame.render_widget(value, *slot);
    }
}

/// Line chart over the points' order; the x axis shows the first and last label.
fn draw_line_chart(frame: &mut Frame, title: &str, points: &[ChartPoint], area: Rect) {
    if points.is_empty() {
        draw_no_data(frame, title, area);
        return;
    }

    let data: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .map(|(index, point)| (index as f64, point.value as f64))
        .collect();

    let x_max = (points.len().saturating_sub(1)).max(1) as f64;
    let y_max = points.iter().map(|point| point.value).max().unwrap_or(0).max(1) as f64;

    let first = points.first().map(|p| p.label.clone()).unwrap_or_default();
    let last = points.last().map(|p| p.label.clone()).unwrap_or_default();

    let dataset = Dataset::default()
        .name("Clicks")
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&data);

    let chart = Chart::new(vec![dataset])
        .block(panel(title))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, x_max])
                .labels(vec![first, last]),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, y_max])
                .labels(vec![String::from("0"), format!("{}", y_max as u64)]),
        );

    frame.render_widget(chart, area);
}

pub fn draw_bar_chart(
    frame: &mut Frame,
    title: &str,
    points: &[ChartPoint],
    color: Color,
    area: Rect,
) {
    if points.is_empty() {
        draw_no_data(frame, title, area);
        return;
    }

    let bars: Vec<Bar> = points
        .iter()
        .map(|point| {
            Bar::default()
                .value(point.value)
                .label(Line::from(point.label.clone()))
                .style(Style::default().fg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(panel(title))
        .bar_width(BAR_WIDTH)
        .bar_gap(1)
        .value_style(
            Style::default()
                .fg(Color::Black)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        )
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

fn draw_no_data(frame: &mut Frame, title: &str, area: Rect) {
    let empty = Paragraph::new(Line::styled("No data", Style::default().fg(Color::DarkGray)))
        .block(panel(title))
        .alignment(Alignment::Center);
    frame.render_widget(empty, area);
}
