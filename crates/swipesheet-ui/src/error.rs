use std::fmt;

/// Failures surfaced by the overlay and its collaborators.
///
/// None of these are fatal: collaborator failures are logged and dropped at
/// the call site, and catalog/config errors are reported before mount.
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayError {
    /// The host cannot produce haptic feedback.
    HapticsUnavailable { reason: String },
    /// The ancestor scale consumer rejected a value.
    ScaleRejected { value: f32, reason: String },
    /// The status bar refused a contrast change.
    StatusBarRejected { reason: String },
    InvalidConfig { field: &'static str, reason: &'static str },
    EmptyCatalog,
    CatalogParse { reason: String },
}

impl fmt::Display for OverlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverlayError::HapticsUnavailable { reason } => {
                write!(f, "haptics unavailable: {reason}")
            }
            OverlayError::ScaleRejected { value, reason } => {
                write!(f, "scale {value} rejected: {reason}")
            }
            OverlayError::StatusBarRejected { reason } => {
                write!(f, "status bar update rejected: {reason}")
            }
            OverlayError::InvalidConfig { field, reason } => {
                write!(f, "invalid overlay config `{field}`: {reason}")
            }
            OverlayError::EmptyCatalog => write!(f, "catalog has no entries"),
            OverlayError::CatalogParse { reason } => {
                write!(f, "catalog could not be parsed: {reason}")
            }
        }
    }
}

impl std::error::Error for OverlayError {}

impl From<serde_json::Error> for OverlayError {
    fn from(err: serde_json::Error) -> Self {
        OverlayError::CatalogParse {
            reason: err.to_string(),
        }
    }
}
