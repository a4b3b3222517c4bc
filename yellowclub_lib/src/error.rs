//! Error types for the library layer.

use std::fmt;

use crate::wizard::WizardStep;

/// Errors produced by the library layer, wrapping upstream API errors and
/// adding validation and business-rule failures.
#[derive(Debug)]
pub enum YellowClubError {
    /// An error from the underlying API client.
    Api(yellowclub_api::Error),
    /// User-provided input failed validation.
    InvalidInput(String),
    /// The user's balance does not cover a redemption.
    InsufficientPoints { required: f64, available: f64 },
    /// A quick-create step failed. Records created by earlier steps are kept.
    Wizard {
        step: WizardStep,
        source: Box<YellowClubError>,
    },
}

impl YellowClubError {
    /// The upstream API error, looking through wizard wrapping.
    pub fn api_error(&self) -> Option<&yellowclub_api::Error> {
        match self {
            Self::Api(e) => Some(e),
            Self::Wizard { source, .. } => source.api_error(),
            _ => None,
        }
    }
}

impl fmt::Display for YellowClubError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::InsufficientPoints {
                required,
                available,
            } => write!(
                f,
                "Insufficient points: {} required, {} available",
                required, available
            ),
            Self::Wizard { step, source } => write!(f, "Failed at {} step: {}", step, source),
        }
    }
}

impl std::error::Error for YellowClubError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Wizard { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<yellowclub_api::Error> for YellowClubError {
    fn from(e: yellowclub_api::Error) -> Self {
        Self::Api(e)
    }
}
