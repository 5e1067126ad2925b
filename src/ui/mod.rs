//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, keyboard event loop, input prompts and the
//!   [`StatusFeed`] observer fed by the run controller
//! - **[`panes`]** — stateless render functions for each visible pane (algorithm
//!   menu, bar chart, code listing, prompt line, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it from
//! [`Settings`](crate::config::Settings) and call [`App::run`] to start the
//! event loop.
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::{App, StatusFeed};
