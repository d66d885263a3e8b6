//! TUI pane rendering
//!
//! Stateless render functions, one per visible pane:
//!
//! - [`list`]: the chain of nodes with step-driven highlighting
//! - [`trace`]: the step log with the cursor emphasized
//! - [`status`]: the bottom status bar with keybindings and playback state
//!
//! Every function takes a `Frame` and the `Rect` to draw into and reads the
//! engine state it is given; none of them mutate anything.

pub mod list;
pub mod status;
pub mod trace;

pub use list::render_list_pane;
pub use status::render_status_bar;
pub use trace::render_trace_pane;
