//! Trace playback
//!
//! - [`controller`]: the Idle/Playing/Paused/Finished state machine
//! - [`timer`]: the cancellable tick timer auto-play runs on
//!
//! Single-threaded and cooperative: the event loop polls the controller with
//! the current instant, and the controller advances at most one step per
//! poll. Nothing here spawns threads or touches the list.

pub mod controller;
pub mod timer;

pub use controller::{PlaybackController, PlaybackMode, BASE_PERIOD_MS, MIN_PERIOD_MS};
pub use timer::TickTimer;
