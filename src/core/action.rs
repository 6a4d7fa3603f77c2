//! # Actions
//!
//! Everything that can happen in HawkAdvisor becomes an `Action`.
//! User presses Enter on a career? That's `Action::Select`.
//! User presses Backspace? That's `Action::Back`.
//!
//! The `update()` function applies an action to the current state and
//! reports any effect the adapter must carry out. Loading happens through
//! the `ResourceSource` passed in; nothing else leaves this function.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```

use log::{debug, info};

use crate::core::route::Route;
use crate::core::state::App;
use crate::data::ResourceSource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Up,
    Down,
    /// Follow the entry under the cursor.
    Select,
    Back,
    Navigate(Route),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action, source: &dyn ResourceSource) -> Effect {
    debug!("update: {:?} on {}", action, app.current_route());
    match action {
        Action::Up => {
            app.screen.select_previous();
            Effect::None
        }
        Action::Down => {
            app.screen.select_next();
            Effect::None
        }
        Action::Select => match app.screen.selected_target() {
            Some(route) => navigate(app, route, source),
            None => {
                app.status_message = String::from("Nothing to open here");
                Effect::None
            }
        },
        Action::Navigate(route) => navigate(app, route, source),
        Action::Back => {
            if app.router.back() {
                app.remount(source);
                app.status_message = status_for(app);
            } else {
                app.status_message = String::from("Already at the start");
            }
            Effect::None
        }
        Action::Quit => {
            info!("Quit requested");
            app.should_quit = true;
            Effect::Quit
        }
    }
}

fn navigate(app: &mut App, route: Route, source: &dyn ResourceSource) -> Effect {
    app.router.navigate(route);
    app.remount(source);
    app.status_message = status_for(app);
    Effect::None
}

fn status_for(app: &App) -> String {
    match app.screen.error() {
        Some(e) => format!("Could not load {}", e.resource()),
        None => app.current_route().to_string(),
    }
}
