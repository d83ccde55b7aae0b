//! Widget logic module
//!
//! This module contains the pure, I/O-free logic of both widgets: the
//! activity classifier, the timer state machine, the position lookup and
//! the text formatting. Background tasks drive these against live samples.

pub mod activity;
pub mod controller;
pub mod position;
pub mod render;

// Re-export main types
pub use activity::ActivityClassifier;
pub use controller::{StepOutcome, TimerCommand, TimerController};
pub use position::Position;
