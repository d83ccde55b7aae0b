//! State management module
//!
//! This module contains all state-related structures and their management logic.

pub mod app_state;
pub mod surfaces;
pub mod timer_state;

// Re-export main types
pub use app_state::AppState;
pub use surfaces::{PositionSurfaces, TimerSurfaces};
pub use timer_state::TimerState;
