//! # Application State
//!
//! Core state for HawkAdvisor. Domain only, no TUI types. Presentation
//! state (scroll offsets and the like) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── router: Router          // back-stack of visited routes
//! ├── screen: Screen          // mounted screen for router.current()
//! ├── status_message: String  // status bar text
//! └── should_quit: bool       // set by Action::Quit
//! ```
//!
//! State changes only happen through `update(state, action, source)` in
//! action.rs.

use crate::core::route::Route;
use crate::core::router::Router;
use crate::core::screen::Screen;
use crate::data::ResourceSource;

pub struct App {
    pub router: Router,
    pub screen: Screen,
    pub status_message: String,
    pub should_quit: bool,
}

impl App {
    /// Start at the landing route.
    pub fn new(source: &dyn ResourceSource) -> Self {
        Self::starting_at(Route::Landing, source)
    }

    /// Start at `root`, which becomes the bottom of the back-stack.
    pub fn starting_at(root: Route, source: &dyn ResourceSource) -> Self {
        let router = Router::with_root(root);
        let screen = Screen::mount(router.current().clone(), source);
        Self {
            router,
            screen,
            status_message: String::from("Welcome to HawkAdvisor!"),
            should_quit: false,
        }
    }

    pub fn current_route(&self) -> &Route {
        self.router.current()
    }

    /// Mount the screen for whatever route is on top of the stack.
    pub(crate) fn remount(&mut self, source: &dyn ResourceSource) {
        self.screen = Screen::mount(self.router.current().clone(), source);
    }
}
