use crate::core::screen::ScreenData;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{CareersPage, ElectivesPage, LandingPage, MajorsPage, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Wrap};

const HELP_TEXT: &str = " ↑↓ Move  Enter Open  Esc Back  PgUp/PgDn Scroll  q Quit ";

/// Draw the whole frame: title bar, the current screen, help line.
///
/// Called after every handled event; there is no retained widget tree.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, help_area] = layout.areas(frame.area());

    TitleBar::new(
        app.current_route().name(),
        &app.status_message,
        app.router.depth(),
    )
    .render(frame, title_area);

    // Main area - show error OR the screen
    if let Some(error) = app.screen.error() {
        draw_error_view(frame, main_area, &error.to_string());
    } else if let Some(data) = app.screen.data() {
        draw_screen(frame, main_area, data, app.screen.selected, tui);
    }

    let help = Line::from(HELP_TEXT).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, help_area);
}

fn draw_screen(
    frame: &mut Frame,
    area: Rect,
    data: &ScreenData,
    selected: usize,
    tui: &mut TuiState,
) {
    tui.list_state.select(Some(selected));
    match data {
        ScreenData::Landing => LandingPage::new(selected == 0).render(frame, area),
        ScreenData::Majors { majors } => {
            MajorsPage::new(majors, &mut tui.list_state).render(frame, area)
        }
        ScreenData::Careers { heading, careers } => {
            CareersPage::new(heading, careers, &mut tui.list_state).render(frame, area)
        }
        ScreenData::Electives(view) => {
            ElectivesPage::new(view, selected, &mut tui.scroll_state, tui.follow_selection)
                .render(frame, area);
            tui.follow_selection = false;
        }
    }
}

fn draw_error_view(frame: &mut Frame, area: Rect, error_msg: &str) {
    let text = vec![
        Line::from(error_msg),
        Line::default(),
        Line::from("Press Esc to go back."),
    ];
    let error_paragraph = Paragraph::new(text)
        .block(Block::bordered().title("ERROR"))
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(error_paragraph, area);
}
