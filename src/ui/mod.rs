//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, keyboard event loop, operation prompt
//! - **[`panes`]** — stateless render functions for each visible pane (list,
//!   trace, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The UI is a pure consumer of the engine: it requests operations, loads the
//! resulting trace into the [`PlaybackController`], and renders from
//! [`PlaybackController::current_step`] and the list's traversal. It never
//! rewires nodes itself.
//!
//! [`PlaybackController`]: crate::playback::PlaybackController
//! [`PlaybackController::current_step`]: crate::playback::PlaybackController::current_step

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
