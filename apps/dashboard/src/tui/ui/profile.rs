use crate::tui::app::App;
use crate::tui::ui::common::panel;

use client_core::session::Session;
use client_core::views::ProfileView;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

pub fn draw_profile_page(frame: &mut Frame, app: &App, session: Option<&Session>, area: Rect) {
    let Some(session) = session else {
        return;
    };
    let profile = ProfileView::new(&session.user, app.date_format());

    let label = Style::default().fg(Color::DarkGray);
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            profile.display_name,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(profile.email.unwrap_or_default()),
        Line::from(""),
        Line::from(vec![
            Span::styled("Picture: ", label),
            Span::raw(profile.picture),
        ]),
        Line::from(vec![
            Span::styled("Account Created: ", label),
            Span::raw(profile.created_at),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "[l]",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Logout"),
        ]),
    ];

    let card = Paragraph::new(text)
        .block(panel("Profile"))
        .alignment(Alignment::Center);
    frame.render_widget(card, area);
}
