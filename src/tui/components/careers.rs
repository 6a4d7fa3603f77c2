//! # Careers Page Component
//!
//! Heading with the major the user came from, then a card per career.
//! The major name is context only: every career is listed.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};

use crate::data::Career;
use crate::tui::component::Component;

pub const CAREERS_SUBTITLE: &str = "Compare careers related to this major";
const SEE_MORE: &str = "See more ›";

pub struct CareersPage<'a> {
    heading: &'a str,
    careers: &'a [Career],
    list_state: &'a mut ListState,
}

impl<'a> CareersPage<'a> {
    pub fn new(heading: &'a str, careers: &'a [Career], list_state: &'a mut ListState) -> Self {
        Self {
            heading,
            careers,
            list_state,
        }
    }
}

fn career_card(career: &Career, width: usize) -> ListItem<'_> {
    let mut lines = vec![Line::from(vec![
        Span::styled(
            career.name.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(SEE_MORE, Style::default().fg(Color::DarkGray)),
    ])];
    for wrapped in textwrap::wrap(&career.description, width.max(1)) {
        lines.push(Line::from(Span::styled(
            format!("  {wrapped}"),
            Style::default().fg(Color::Gray),
        )));
    }
    lines.push(Line::default());
    ListItem::new(lines)
}

impl Component for CareersPage<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [heading_area, list_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

        let heading = Paragraph::new(vec![
            Line::from(Span::styled(
                self.heading,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                CAREERS_SUBTITLE,
                Style::default().fg(Color::Gray),
            )),
        ])
        .block(Block::default().padding(Padding::horizontal(1)));
        frame.render_widget(heading, heading_area);

        if self.careers.is_empty() {
            let empty = Paragraph::new("No careers available.")
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::default().padding(Padding::horizontal(1)));
            frame.render_widget(empty, list_area);
            return;
        }

        let text_width = list_area.width.saturating_sub(8) as usize;
        let items: Vec<ListItem> = self
            .careers
            .iter()
            .map(|c| career_card(c, text_width))
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .padding(Padding::horizontal(1)),
            )
            .highlight_style(Style::default().fg(Color::Cyan))
            .highlight_symbol("▶ ");

        frame.render_stateful_widget(list, list_area, self.list_state);
    }
}
