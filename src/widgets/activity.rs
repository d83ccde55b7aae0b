//! Device activity classification from sample staleness

use crate::client::Sample;

/// Classifies a device as active or inactive from the age of its last dot
#[derive(Debug, Clone, Copy)]
pub struct ActivityClassifier {
    stale_threshold_ms: i64,
}

impl ActivityClassifier {
    /// Create a classifier with the given staleness threshold in milliseconds
    pub fn new(stale_threshold_ms: u64) -> Self {
        Self {
            stale_threshold_ms: stale_threshold_ms as i64,
        }
    }

    /// A device is active iff its last dot is no older than the threshold
    pub fn is_active(&self, sample: &Sample, now_ms: i64) -> bool {
        now_ms - sample.timestamp_ms <= self.stale_threshold_ms
    }
}
