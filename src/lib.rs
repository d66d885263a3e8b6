//! # Introduction
//!
//! listty animates pointer-manipulation algorithms on a doubly linked list.
//! Every mutation is executed by the engine and, in lock-step with each
//! pointer write, recorded as a trace of discrete steps. The trace is then
//! replayed forward and backward through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Operation request → Mutation Engine → Step Trace → Playback Controller → TUI
//! ```
//!
//! 1. [`list`] — the arena-backed [`list::DoublyLinkedList`]: nodes keyed by
//!    stable ids, `prev`/`next` stored as ids, deletions tombstoned.
//! 2. [`engine`] — the four operations (insert at beginning/end/position,
//!    delete by value), each appending [`engine::Step`] records as it works.
//!    Expected failures are reported through steps, never as errors.
//! 3. [`playback`] — the Idle/Playing/Paused/Finished state machine with a
//!    cursor, a cancellable tick timer, and variable speed.
//! 4. [`ui`] — ratatui-based TUI; not part of the stable library API.

pub mod engine;
pub mod list;
pub mod playback;
pub mod ui;
