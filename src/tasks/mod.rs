//! Background tasks module
//!
//! This module contains the background tasks that run alongside the HTTP
//! server: one poll loop per widget and the one-second tick of the timer.

pub mod device_timer;
pub mod position_poller;
pub mod tick;

// Re-export main functions
pub use device_timer::device_timer_task;
pub use position_poller::position_poller_task;
pub use tick::tick_task;
