use std::fmt;

use tinct_color::ColorError;

/// Errors from token generation and rendering.
#[derive(Debug)]
pub enum TokenError {
    /// An input color failed to parse or convert.
    Color(ColorError),
    /// A gradient needs at least two stops and two output steps.
    InvalidGradientInput { reason: &'static str },
    /// A scale parameter was non-finite or out of range.
    InvalidScaleInput { field: &'static str, value: f64 },
    /// JSON rendering failed.
    Json(serde_json::Error),
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(err) => write!(f, "{err}"),
            Self::InvalidGradientInput { reason } => write!(f, "invalid gradient: {reason}"),
            Self::InvalidScaleInput { field, value } => {
                write!(f, "invalid scale {field}: {value}")
            }
            Self::Json(err) => write!(f, "failed to render JSON: {err}"),
        }
    }
}

impl std::error::Error for TokenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Color(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::InvalidGradientInput { .. } | Self::InvalidScaleInput { .. } => None,
        }
    }
}

impl From<ColorError> for TokenError {
    fn from(err: ColorError) -> Self {
        Self::Color(err)
    }
}

impl From<serde_json::Error> for TokenError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}
