//! # Electives Page Component
//!
//! The longest screen, so it lives in a `ScrollView`:
//!
//! ```text
//! ┌ Career header ───────────────┐  name, description, salary, growth
//! Recommended Electives / N courses
//! ┌ elective card ───────────────┐  one per elective
//! Professor Insights
//! ┌ table ───────────────────────┐  professor, course, rating, difficulty
//! Other Careers                      selectable, cursor lives here
//! ```
//!
//! Heights are measured before rendering (`Paragraph::line_count`) so the
//! scroll view knows its content size, the same way the message list does.
//! The content is capped at [`MAX_CONTENT_HEIGHT`] rows; anything below the
//! cap is not drawn.

use ratatui::Frame;
use ratatui::layout::{Constraint, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Cell, Paragraph, Row, Table, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::screen::{ElectiveRow, ElectivesView, InsightRow};
use crate::data::{Difficulty, Workload};
use crate::tui::component::Component;

pub const ELECTIVES_TITLE: &str = "Recommended Electives";
pub const INSIGHTS_TITLE: &str = "Professor Insights";
pub const OTHER_CAREERS_TITLE: &str = "Other Careers";

const BAR_WIDTH: usize = 10;
/// Tags shown per elective card.
const MAX_TAGS: usize = 3;
/// Rows in the scroll buffer. The buffer holds every content row at once.
pub const MAX_CONTENT_HEIGHT: u16 = 4096;

enum Piece<'a> {
    Text(Paragraph<'a>),
    Table(Table<'a>),
}

struct Placed<'a> {
    piece: Piece<'a>,
    height: u16,
}

pub struct ElectivesPage<'a> {
    view: &'a ElectivesView,
    selected: usize,
    scroll_state: &'a mut ScrollViewState,
    /// Scroll so the selected "other career" is on screen.
    follow_selection: bool,
}

impl<'a> ElectivesPage<'a> {
    pub fn new(
        view: &'a ElectivesView,
        selected: usize,
        scroll_state: &'a mut ScrollViewState,
        follow_selection: bool,
    ) -> Self {
        Self {
            view,
            selected,
            scroll_state,
            follow_selection,
        }
    }
}

fn difficulty_style(difficulty: Difficulty) -> Style {
    match difficulty {
        Difficulty::Easy => Style::default().fg(Color::Green),
        Difficulty::Medium => Style::default().fg(Color::Yellow),
        Difficulty::Hard => Style::default().fg(Color::Red),
    }
}

fn workload_color(workload: Workload) -> Color {
    match workload {
        Workload::Light => Color::Green,
        Workload::Moderate => Color::Yellow,
        Workload::Heavy => Color::Red,
    }
}

/// Text bar for a 0..=1 ratio, e.g. `██████░░░░`.
pub fn difficulty_bar(ratio: f64) -> String {
    let filled = (ratio.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

fn rows(count: usize) -> u16 {
    u16::try_from(count).unwrap_or(u16::MAX)
}

fn measure<'a>(paragraph: Paragraph<'a>, width: u16) -> Placed<'a> {
    let height = rows(paragraph.line_count(width));
    Placed {
        piece: Piece::Text(paragraph),
        height,
    }
}

fn header(view: &ElectivesView, width: u16) -> Placed<'_> {
    let career = &view.career;
    let lines = vec![
        Line::from(Span::styled(
            career.description.as_str(),
            Style::default().fg(Color::Gray),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("Avg. Salary ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                career.avg_salary.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Growth ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                career.growth.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    let paragraph = Paragraph::new(lines)
        .block(
            Block::bordered()
                .title(Span::styled(
                    format!(" {} ", career.name),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ))
                .border_style(Style::default().fg(Color::Blue)),
        )
        .wrap(Wrap { trim: true });
    measure(paragraph, width)
}

fn section_title(title: &str, detail: Option<String>) -> Placed<'_> {
    let mut lines = vec![Line::from(Span::styled(
        title,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))];
    if let Some(detail) = detail {
        lines.push(Line::from(Span::styled(
            detail,
            Style::default().fg(Color::DarkGray),
        )));
    }
    let height = rows(lines.len());
    Placed {
        piece: Piece::Text(Paragraph::new(lines)),
        height,
    }
}

fn elective_card(row: &ElectiveRow, width: u16) -> Placed<'_> {
    let e = &row.elective;
    let mut top = vec![
        Span::styled(
            e.course_number.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(format!("[{}]", e.difficulty), difficulty_style(e.difficulty)),
        Span::raw(format!("  {} credits", e.credits)),
    ];
    if let Some(rating) = row.average_rating {
        top.push(Span::styled(
            format!("  ★ {:.1} ({})", rating, row.professor_count),
            Style::default().fg(Color::Yellow),
        ));
    }

    let mut lines = vec![
        Line::from(top),
        Line::from(Span::styled(
            e.course_name.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    if !e.prerequisites.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("Prerequisites: {}", e.prerequisites.join(", ")),
            Style::default().fg(Color::Gray),
        )));
    }
    if !e.tags.is_empty() {
        let tags: Vec<String> = e
            .tags
            .iter()
            .take(MAX_TAGS)
            .map(|t| format!("#{t}"))
            .collect();
        lines.push(Line::from(Span::styled(
            tags.join(" "),
            Style::default().fg(Color::Cyan),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::bordered().border_style(Style::default().fg(Color::DarkGray)))
        .wrap(Wrap { trim: true });
    measure(paragraph, width)
}

fn insights_table(rows: &[InsightRow]) -> Placed<'_> {
    let header = Row::new(vec!["Professor", "Course", "Rating", "Difficulty"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let body: Vec<Row> = rows
        .iter()
        .map(|row| {
            let p = &row.insight;
            let course = match &row.course_name {
                Some(name) => format!("{} {}", p.course_number, name),
                None => p.course_number.clone(),
            };
            Row::new(vec![
                Cell::from(p.professor_name.as_str()),
                Cell::from(course),
                Cell::from(format!("{:.1}", p.rating)),
                Cell::from(Span::styled(
                    format!("{} {:.1}", difficulty_bar(p.difficulty_ratio()), p.difficulty),
                    Style::default().fg(workload_color(p.workload())),
                )),
            ])
        })
        .collect();

    let height = self::rows(body.len().saturating_add(3)); // header + borders
    let table = Table::new(
        body,
        [
            Constraint::Percentage(25),
            Constraint::Percentage(40),
            Constraint::Length(6),
            Constraint::Min(15),
        ],
    )
    .header(header)
    .column_spacing(1)
    .block(Block::bordered().border_style(Style::default().fg(Color::DarkGray)));

    Placed {
        piece: Piece::Table(table),
        height,
    }
}

fn other_careers(view: &ElectivesView, selected: usize) -> Placed<'_> {
    let lines: Vec<Line> = view
        .other_careers
        .iter()
        .enumerate()
        .map(|(i, career)| {
            if i == selected {
                Line::from(Span::styled(
                    format!("▶ {}", career.name),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(format!("  {}", career.name))
            }
        })
        .collect();
    let height = rows(lines.len());
    Placed {
        piece: Piece::Text(Paragraph::new(lines)),
        height,
    }
}

fn stacked_height(placed: &[Placed<'_>]) -> u16 {
    placed
        .iter()
        .fold(0u16, |total, p| total.saturating_add(p.height))
}

impl Component for ElectivesPage<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // scrollbar
        let view = self.view;

        let mut placed = vec![
            header(view, content_width),
            section_title(
                ELECTIVES_TITLE,
                Some(format!("{} courses", view.electives.len())),
            ),
        ];
        placed.extend(view.electives.iter().map(|r| elective_card(r, content_width)));
        placed.push(section_title(INSIGHTS_TITLE, None));
        placed.push(insights_table(&view.insights));
        if !view.other_careers.is_empty() {
            placed.push(section_title(OTHER_CAREERS_TITLE, None));
        }
        let careers_top = stacked_height(&placed);
        placed.push(other_careers(view, self.selected));

        let total_height = stacked_height(&placed).min(MAX_CONTENT_HEIGHT);

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for item in placed {
            if y_offset >= total_height {
                break;
            }
            let height = item.height.min(total_height - y_offset);
            let rect = Rect::new(0, y_offset, content_width, height);
            match item.piece {
                Piece::Text(paragraph) => scroll_view.render_widget(paragraph, rect),
                Piece::Table(table) => scroll_view.render_widget(table, rect),
            }
            y_offset = y_offset.saturating_add(height);
        }

        // Past the cap the list is not drawn, so there is nothing to follow.
        if self.follow_selection && !view.other_careers.is_empty() && careers_top < total_height {
            let target = careers_top
                .saturating_add(rows(self.selected))
                .min(total_height.saturating_sub(1));
            let offset = self.scroll_state.offset();
            if target < offset.y {
                self.scroll_state.set_offset(Position::new(0, target));
            } else if target >= offset.y.saturating_add(area.height) {
                self.scroll_state
                    .set_offset(Position::new(0, (target + 1).saturating_sub(area.height)));
            }
        }

        frame.render_stateful_widget(scroll_view, area, self.scroll_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Career, Elective};
    use crate::test_support::nurse;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn elective(n: usize, tags: &[&str]) -> Elective {
        Elective {
            course_number: format!("COMP.{n:05}"),
            course_name: format!("Course {n}"),
            difficulty: Difficulty::Medium,
            credits: 3,
            prerequisites: Vec::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn view_with(electives: Vec<Elective>) -> ElectivesView {
        let careers: Vec<Career> = vec![nurse(), Career::placeholder("Software Engineer")];
        ElectivesView::build(Some("Nurse"), careers, electives, Vec::new())
    }

    fn render(view: &ElectivesView, selected: usize, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let mut scroll_state = ScrollViewState::default();
        terminal
            .draw(|f| {
                ElectivesPage::new(view, selected, &mut scroll_state, true).render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_long_elective_list_renders_within_cap() {
        let view = view_with((0..14_000).map(|n| elective(n, &[])).collect());
        let screen = render(&view, 0, 20, 10);
        assert!(screen.contains("Nurse"));
    }

    #[test]
    fn test_long_list_scrolls_to_selected_career() {
        let view = view_with((0..500).map(|n| elective(n, &[])).collect());
        let screen = render(&view, 0, 40, 10);
        assert!(screen.contains("▶ Software Engineer"));
    }

    #[test]
    fn test_card_shows_first_three_tags() {
        let view = view_with(vec![elective(1, &["ai", "ml", "python", "theory"])]);
        let screen = render(&view, 0, 80, 20);
        assert!(screen.contains("#ai #ml #python"));
        assert!(!screen.contains("#theory"));
    }

    #[test]
    fn test_difficulty_bar_fills_by_ratio() {
        assert_eq!(difficulty_bar(0.5), "█████░░░░░");
        assert_eq!(difficulty_bar(1.0), "██████████");
        assert_eq!(difficulty_bar(-1.0), "░░░░░░░░░░");
    }
}
