//! # TitleBar Component
//!
//! Top status bar showing where the user is and the last status message.
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(app.current_route().name(), &app.status_message, app.router.depth());
//! title_bar.render(frame, area);
//! ```
//!
//! ## Conditional Formatting
//!
//! 1. **Nested, with status**: `"HawkAdvisor › career (depth 3) | career/Nursing"`
//! 2. **Entry route**: `"HawkAdvisor › landing | Welcome to HawkAdvisor!"`
//! 3. **No status**: `"HawkAdvisor › majors"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar<'a> {
    pub route_name: &'a str,
    pub status_message: &'a str,
    /// Back-stack depth; 1 means the entry route.
    pub depth: usize,
}

impl<'a> TitleBar<'a> {
    pub fn new(route_name: &'a str, status_message: &'a str, depth: usize) -> Self {
        Self {
            route_name,
            status_message,
            depth,
        }
    }

    pub fn title_text(&self) -> String {
        let location = if self.depth > 1 {
            format!("HawkAdvisor › {} (depth {})", self.route_name, self.depth)
        } else {
            format!("HawkAdvisor › {}", self.route_name)
        };
        if self.status_message.is_empty() {
            location
        } else {
            format!("{} | {}", location, self.status_message)
        }
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.title_text(),
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(line, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_route_omits_depth() {
        let bar = TitleBar::new("landing", "Welcome to HawkAdvisor!", 1);
        assert_eq!(bar.title_text(), "HawkAdvisor › landing | Welcome to HawkAdvisor!");
    }

    #[test]
    fn test_nested_route_shows_depth() {
        let bar = TitleBar::new("career", "career/Nursing", 3);
        assert_eq!(bar.title_text(), "HawkAdvisor › career (depth 3) | career/Nursing");
    }

    #[test]
    fn test_empty_status() {
        let bar = TitleBar::new("majors", "", 2);
        assert_eq!(bar.title_text(), "HawkAdvisor › majors (depth 2)");
    }
}
