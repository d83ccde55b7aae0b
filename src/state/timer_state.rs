//! Timer state structure and management

use serde::{Deserialize, Serialize};

/// Elapsed-time counter of the device-activity widget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerState {
    pub elapsed_seconds: u64,
    pub running: bool,
}

impl TimerState {
    /// Create a new stopped timer at zero
    pub fn new() -> Self {
        Self {
            elapsed_seconds: 0,
            running: false,
        }
    }

    /// Check if the timer is running
    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}
