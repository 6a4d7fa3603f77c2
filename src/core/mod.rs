//! # Core Application Logic
//!
//! This module contains HawkAdvisor's navigation and screen logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Route / Router       │
//!                    │  • Screen (loaded data) │
//!                    │  • Action + update()    │
//!                    │                         │
//!                    │  No UI. Sync loads only │
//!                    └───────────┬─────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │            │   --dump   │
//!            │  Adapter   │            │ plain text │
//!            │ (ratatui)  │            │            │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`route`]: the `Route` enum and its path encoding
//! - [`router`]: the back-stack
//! - [`screen`]: what each route loads and which entries it can select
//! - [`state`]: the `App` struct, all application state in one place
//! - [`action`]: the `Action` enum and `update()`
//! - [`config`]: layered configuration
//! - [`dump`]: plain-text screen output

pub mod action;
pub mod config;
pub mod dump;
pub mod route;
pub mod router;
pub mod screen;
pub mod state;

pub use action::{Action, Effect, update};
pub use route::{Route, RouteError};
pub use router::Router;
pub use screen::{Screen, ScreenData};
pub use state::App;
