//! Text formatting for the display surfaces

/// Device-state text shown while the device is active
pub const DEVICE_ACTIVE_TEXT: &str = "El device está activo";

/// Device-state text shown while the device is inactive
pub const DEVICE_INACTIVE_TEXT: &str = "El device está inactivo";

/// Format a total-seconds count as zero-padded `HH:MM:SS`.
///
/// Hours are displayed with two digits and roll over silently past 99.
pub fn format_hms(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds / 60) % 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Pick the device-state text for an activity flag
pub fn device_state_text(active: bool) -> &'static str {
    if active {
        DEVICE_ACTIVE_TEXT
    } else {
        DEVICE_INACTIVE_TEXT
    }
}

/// Format a dot value for display: integral values without a trailing
/// `.0`, everything else as-is.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_hms(65), "00:01:05");
    }

    #[test]
    fn formats_hours() {
        assert_eq!(format_hms(3661), "01:01:01");
    }

    #[test]
    fn pads_single_digits() {
        assert_eq!(format_hms(9), "00:00:09");
    }

    #[test]
    fn zero_is_all_zeros() {
        assert_eq!(format_hms(0), "00:00:00");
    }

    #[test]
    fn hours_roll_over_past_two_digits() {
        // 100 hours: out-of-scope to guard, the field just widens.
        assert_eq!(format_hms(360_000), "100:00:00");
    }

    #[test]
    fn device_state_strings() {
        assert_eq!(device_state_text(true), DEVICE_ACTIVE_TEXT);
        assert_eq!(device_state_text(false), DEVICE_INACTIVE_TEXT);
    }

    #[test]
    fn integral_values_drop_the_fraction() {
        assert_eq!(format_value(2.0), "2");
        assert_eq!(format_value(2.5), "2.5");
    }
}
