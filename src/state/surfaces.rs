//! Display surface structures
//!
//! Each widget owns a handful of text surfaces, the equivalent of the DOM
//! nodes a browser widget would write into; the status endpoint serves
//! them back out.

use serde::{Deserialize, Serialize};

use crate::widgets::render;

/// Display surfaces of the device-activity timer widget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerSurfaces {
    /// Latest variable value as text
    pub value_text: String,
    /// Context seconds of the latest dot, as text
    pub seconds_text: String,
    /// Elapsed time, zero-padded `HH:MM:SS`
    pub timer_text: String,
    /// Device-state message
    pub device_text: String,
}

impl TimerSurfaces {
    /// Create surfaces with nothing rendered yet
    pub fn new() -> Self {
        Self {
            value_text: String::new(),
            seconds_text: String::new(),
            timer_text: render::format_hms(0),
            device_text: String::new(),
        }
    }
}

impl Default for TimerSurfaces {
    fn default() -> Self {
        Self::new()
    }
}

/// Display surfaces of the patient-position widget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionSurfaces {
    /// Latest position code as text
    pub value_text: String,
    /// URL of the positioning-guide background image
    pub background_image: String,
}

impl PositionSurfaces {
    /// Create surfaces with nothing rendered yet
    pub fn new() -> Self {
        Self {
            value_text: String::new(),
            background_image: String::new(),
        }
    }
}

impl Default for PositionSurfaces {
    fn default() -> Self {
        Self::new()
    }
}
