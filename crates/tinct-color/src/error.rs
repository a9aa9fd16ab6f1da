//! Error type shared by every fallible color operation.

use std::fmt;

/// Validation failure at a public conversion boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorError {
    /// The input is not a 3- or 6-digit hex color.
    InvalidColorFormat { input: String },
    /// An OKLCH component is outside its declared range.
    InvalidOklchValue { field: &'static str, value: f64 },
}

impl ColorError {
    pub(crate) fn invalid_color(input: &str) -> Self {
        Self::InvalidColorFormat {
            input: input.to_string(),
        }
    }

    pub(crate) const fn invalid_oklch(field: &'static str, value: f64) -> Self {
        Self::InvalidOklchValue { field, value }
    }
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColorFormat { input } => {
                write!(f, "invalid color format: {input:?} (expected #RGB or #RRGGBB)")
            }
            Self::InvalidOklchValue { field, value } => {
                let range = match *field {
                    "l" => "0..=1",
                    "c" => ">= 0",
                    _ => "0..=360",
                };
                write!(f, "invalid OKLCH {field}: {value} (expected {range})")
            }
        }
    }
}

impl std::error::Error for ColorError {}
