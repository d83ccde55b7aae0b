//! Patient-position lookup for the background-image widget

/// Positioning guide images keyed by position
const SUPINE_IMAGE: &str = "https://nurseslabs.com/wp-content/uploads/2022/06/SUPINE-DORSAL-RECUMBENT-PATIENT-POSITIONING-GUIDE-AND-CHEAT-SHEET.jpg";
const PRONE_IMAGE: &str = "https://nurseslabs.com/wp-content/uploads/2022/06/PRONE-PATIENT-POSITIONING-GUIDE-AND-CHEAT-SHEET.jpg";
const LATERAL_IMAGE: &str = "https://nurseslabs.com/wp-content/uploads/2022/06/LATERAL-PATIENT-POSITIONING-GUIDE-AND-CHEAT-SHEET.jpg";

/// Patient position reported by the sensor as an integer code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Supine,
    Prone,
    Lateral,
}

impl Position {
    /// Decode a sensor code. Codes 3 and 4 are both lateral (left/right);
    /// unknown codes fall back to supine.
    pub fn from_code(code: f64) -> Self {
        if code == 2.0 {
            Position::Prone
        } else if code == 3.0 || code == 4.0 {
            Position::Lateral
        } else {
            Position::Supine
        }
    }

    /// URL of the positioning-guide image for this position
    pub fn image_url(&self) -> &'static str {
        match self {
            Position::Supine => SUPINE_IMAGE,
            Position::Prone => PRONE_IMAGE,
            Position::Lateral => LATERAL_IMAGE,
        }
    }
}
