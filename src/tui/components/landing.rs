//! # Landing Page Component
//!
//! Entry screen: title, a short description and the "Get Started" action.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::tui::component::Component;

pub const LANDING_TITLE: &str = "HawkAdvisor";
pub const LANDING_DESCRIPTION: &str = "Explore majors, see where they lead, and find the electives \
    and professors that fit the career you want.";
pub const GET_STARTED: &str = "Get Started";

pub struct LandingPage {
    highlighted: bool,
}

impl LandingPage {
    pub fn new(highlighted: bool) -> Self {
        Self { highlighted }
    }
}

impl Component for LandingPage {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = area.width.min(60);

        let title = Paragraph::new(Line::from(Span::styled(
            LANDING_TITLE,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);

        let description = Paragraph::new(LANDING_DESCRIPTION)
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        let description_height = description.line_count(width) as u16;

        let button_style = if self.highlighted {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };
        let button = Paragraph::new(Line::from(Span::styled(
            format!("[ {GET_STARTED} ]"),
            button_style,
        )))
        .alignment(Alignment::Center);

        let version = Paragraph::new(Line::from(Span::styled(
            format!("v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Center);

        // Whole group centered vertically and horizontally.
        let [column] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(area);
        let [title_area, _, description_area, _, button_area, version_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(description_height),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(column);

        frame.render_widget(title, title_area);
        frame.render_widget(description, description_area);
        frame.render_widget(button, button_area);
        frame.render_widget(version, version_area);
    }
}
