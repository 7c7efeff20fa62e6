//! Platform abstraction layer
//!
//! Handles the shell-facing side of a session:
//! - Input held-state and repeatability per action
//! - Fixed-rate tick pacing from wall-clock time

pub mod input;
pub mod time;

pub use input::{Action, InputState, KeyEdge};
pub use time::FixedStep;
