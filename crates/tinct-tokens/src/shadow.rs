//! Elevation shadows.

use serde::{Deserialize, Serialize};
use tinct_color::{Rgb, hex_to_rgb};
use tracing::debug;

use crate::error::TokenError;
use crate::number::{format_number, round_to};

pub const MAX_LEVELS: u8 = 8;

const BASE_ALPHA: f64 = 0.08;
const ALPHA_STEP: f64 = 0.04;
const MAX_ALPHA: f64 = 0.4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    pub name: String,
    pub offset_y: f64,
    pub blur: f64,
    pub spread: f64,
    pub color: Rgb,
    pub alpha: f64,
}

impl Shadow {
    /// `0 {y}px {blur}px {spread}px rgba(r, g, b, alpha)`.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "0 {}px {}px {}px rgba({}, {}, {}, {})",
            format_number(self.offset_y, 2),
            format_number(self.blur, 2),
            format_number(self.spread, 2),
            self.color.r,
            self.color.g,
            self.color.b,
            format_number(self.alpha, 2),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadowScale {
    pub shadows: Vec<Shadow>,
}

fn level_name(level: u8) -> String {
    match level {
        1 => "sm".to_string(),
        2 => "md".to_string(),
        3 => "lg".to_string(),
        4 => "xl".to_string(),
        n => format!("{}xl", n - 3),
    }
}

impl ShadowScale {
    /// Level `i` (1-based) gets `offset_y = 2^(i-1)`, `blur = 3 * offset_y`
    /// and `alpha = 0.08 + 0.04 * i`, capped at 0.4.
    ///
    /// # Errors
    ///
    /// [`TokenError::Color`] for a malformed color;
    /// [`TokenError::InvalidScaleInput`] unless `1 <= levels <= MAX_LEVELS`.
    pub fn elevations(color: &str, levels: u8) -> Result<Self, TokenError> {
        let rgb = hex_to_rgb(color)?;
        if levels == 0 || levels > MAX_LEVELS {
            return Err(TokenError::InvalidScaleInput {
                field: "levels",
                value: f64::from(levels),
            });
        }

        let shadows: Vec<Shadow> = (1..=levels)
            .map(|level| {
                let offset_y = f64::from(1u16 << (level - 1));
                Shadow {
                    name: level_name(level),
                    offset_y,
                    blur: offset_y * 3.0,
                    spread: 0.0,
                    color: rgb,
                    alpha: round_to(
                        (BASE_ALPHA + ALPHA_STEP * f64::from(level)).min(MAX_ALPHA),
                        2,
                    ),
                }
            })
            .collect();

        debug!(levels, "built shadow scale");
        Ok(Self { shadows })
    }

    #[must_use]
    pub fn shadow(&self, name: &str) -> Option<&Shadow> {
        self.shadows.iter().find(|shadow| shadow.name == name)
    }
}
