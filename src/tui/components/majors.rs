//! # Majors Page Component
//!
//! One card per major: the name, then the free-text list of careers it
//! leads to. Enter on a card opens `career/{name}`.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - the `ListState` lives in `TuiState`
//! - `MajorsPage` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};

use crate::data::Major;
use crate::tui::component::Component;

pub const MAJORS_TITLE: &str = "Choose your major";

pub struct MajorsPage<'a> {
    majors: &'a [Major],
    list_state: &'a mut ListState,
}

impl<'a> MajorsPage<'a> {
    pub fn new(majors: &'a [Major], list_state: &'a mut ListState) -> Self {
        Self { majors, list_state }
    }
}

fn major_card(major: &Major, width: usize) -> ListItem<'_> {
    let mut lines = vec![Line::from(Span::styled(
        major.name.as_str(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    for wrapped in textwrap::wrap(&major.careers, width.max(1)) {
        lines.push(Line::from(Span::styled(
            format!("  {wrapped}"),
            Style::default().fg(Color::Gray),
        )));
    }
    lines.push(Line::default());
    ListItem::new(lines)
}

impl Component for MajorsPage<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [heading_area, list_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);

        let heading = Paragraph::new(Line::from(Span::styled(
            MAJORS_TITLE,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )))
        .block(Block::default().padding(Padding::horizontal(1)));
        frame.render_widget(heading, heading_area);

        if self.majors.is_empty() {
            let empty = Paragraph::new("No majors available.")
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::default().padding(Padding::horizontal(1)));
            frame.render_widget(empty, list_area);
            return;
        }

        // borders + padding + highlight symbol + indent
        let text_width = list_area.width.saturating_sub(8) as usize;
        let items: Vec<ListItem> = self
            .majors
            .iter()
            .map(|m| major_card(m, text_width))
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
