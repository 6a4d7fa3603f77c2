//! # TUI Components
//!
//! One component per screen plus the title bar.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: top status line
//! - `LandingPage`: entry screen
//!
//! ### Borrowed-State Components
//!
//! Created each frame around presentation state that lives in `TuiState`:
//! - `MajorsPage`, `CareersPage`: list with a `ListState`
//! - `ElectivesPage`: scroll view with a `ScrollViewState`
//!
//! Components receive data as props and never reach into `App` themselves:
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! MajorsPage::new(&majors, &mut tui.list_state).render(frame, area);
//!
//! // Bad: hidden dependency on global state
//! MajorsPage::render(frame, area); // reads from global App
//! ```

pub mod careers;
pub mod electives;
pub mod landing;
pub mod majors;
mod title_bar;

pub use careers::CareersPage;
pub use electives::ElectivesPage;
pub use landing::LandingPage;
pub use majors::MajorsPage;
pub use title_bar::TitleBar;
