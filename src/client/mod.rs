//! Telemetry API client module
//!
//! This module contains the HTTP client for the variable "last value" endpoint
//! and the typed payload it returns.

pub mod ubidots;

// Re-export main types
pub use ubidots::{Sample, UbidotsClient};
