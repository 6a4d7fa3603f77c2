//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms waiting for input and
//! only redraws after an event (including a terminal resize). Every redraw
//! rebuilds the widgets from `App`; there is no retained view tree.

mod component;
mod components;
mod event;
mod ui;

use log::info;
use std::io::stdout;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;
use ratatui::widgets::ListState;
use tui_scrollview::ScrollViewState;

use crate::core::action::{Action, Effect, update};
use crate::core::screen::ScreenData;
use crate::core::state::App;
use crate::data::ResourceSource;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    /// Highlight for list screens; re-synced from `App.screen.selected` each frame.
    pub list_state: ListState,
    /// Scroll position of the electives screen.
    pub scroll_state: ScrollViewState,
    /// Set when the cursor moved and the view should scroll to it.
    pub follow_selection: bool,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            list_state: ListState::default(),
            scroll_state: ScrollViewState::default(),
            follow_selection: false,
        }
    }

    /// Forget per-screen presentation state after a navigation.
    fn reset_for_new_screen(&mut self) {
        self.list_state = ListState::default();
        self.scroll_state = ScrollViewState::default();
        self.follow_selection = false;
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

fn to_action(event: TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Quit | TuiEvent::ForceQuit => Some(Action::Quit),
        TuiEvent::Back => Some(Action::Back),
        TuiEvent::Submit => Some(Action::Select),
        TuiEvent::CursorUp => Some(Action::Up),
        TuiEvent::CursorDown => Some(Action::Down),
        _ => None,
    }
}

/// Apply one event. Returns `true` when the app should exit.
fn handle_event(
    event: TuiEvent,
    app: &mut App,
    tui: &mut TuiState,
    source: &dyn ResourceSource,
) -> bool {
    // Scroll events only move the view, never the cursor.
    match event {
        TuiEvent::ScrollUp => tui.scroll_state.scroll_up(),
        TuiEvent::ScrollDown => tui.scroll_state.scroll_down(),
        TuiEvent::ScrollPageUp => tui.scroll_state.scroll_page_up(),
        TuiEvent::ScrollPageDown => tui.scroll_state.scroll_page_down(),
        TuiEvent::ScrollToTop => tui.scroll_state.scroll_to_top(),
        _ => {}
    }

    let Some(action) = to_action(event) else {
        return false;
    };

    if matches!(action, Action::Up | Action::Down)
        && matches!(app.screen.data(), Some(ScreenData::Electives(_)))
    {
        tui.follow_selection = true;
    }

    let depth_before = app.router.depth();
    let effect = update(app, action, source);
    if app.router.depth() != depth_before {
        tui.reset_for_new_screen();
    }
    effect == Effect::Quit
}

pub fn run(app: App, source: &dyn ResourceSource) -> std::io::Result<()> {
    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new()
        .and_then(|_guard| event_loop(&mut terminal, app, source));
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    mut app: App,
    source: &dyn ResourceSource,
) -> std::io::Result<()> {
    info!("Starting at {}", app.current_route());
    let mut tui = TuiState::new();
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(IDLE_POLL);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if handle_event(event, &mut app, &mut tui, source) {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }
    }

    info!("Exiting from {}", app.current_route());
    Ok(())
}
