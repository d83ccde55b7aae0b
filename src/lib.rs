//! Dotboard - A state-managed service that mirrors IoT telemetry widgets
//!
//! This library polls the last recorded value of telemetry variables and
//! maintains the display surfaces of two widgets: a device-activity elapsed
//! timer and a patient-position background image. The surfaces are served
//! back out over a small HTTP status API.

pub mod api;
pub mod client;
pub mod config;
pub mod state;
pub mod tasks;
pub mod utils;
pub mod widgets;

// Re-export commonly used types
pub use api::create_router;
pub use client::UbidotsClient;
pub use config::Config;
pub use state::AppState;
pub use utils::signals::shutdown_signal;
