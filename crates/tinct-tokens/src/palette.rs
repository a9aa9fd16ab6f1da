//! Tonal palettes in OKLCH.
//!
//! Every shade keeps the base hue, sits at a fixed OKLCH lightness, and
//! scales the base chroma by a taper that peaks at 500–600. Shades that fall
//! outside sRGB are clamped per channel.

use serde::{Deserialize, Serialize};
use tinct_color::{Oklch, hex_to_oklch, hex_to_rgb, oklch_to_hex, rgb_to_hex};
use tracing::debug;

use crate::error::TokenError;

/// `(shade, OKLCH lightness, chroma factor)`, lightest first.
pub const SHADE_STEPS: [(u16, f64, f64); 11] = [
    (50, 0.97, 0.25),
    (100, 0.93, 0.4),
    (200, 0.87, 0.6),
    (300, 0.78, 0.8),
    (400, 0.68, 0.95),
    (500, 0.58, 1.0),
    (600, 0.49, 1.0),
    (700, 0.40, 0.9),
    (800, 0.32, 0.8),
    (900, 0.25, 0.7),
    (950, 0.18, 0.6),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shade {
    pub name: String,
    pub hex: String,
}

/// A base color and its eleven tonal shades.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// The base color, normalized to lowercase `#rrggbb`.
    pub base: String,
    pub shades: Vec<Shade>,
}

impl Palette {
    /// Look up a shade by name (`"50"`, `"500"`, ...).
    #[must_use]
    pub fn shade(&self, name: &str) -> Option<&str> {
        self.shades
            .iter()
            .find(|shade| shade.name == name)
            .map(|shade| shade.hex.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shade> {
        self.shades.iter()
    }
}

/// Build the `50`–`950` palette for `base`.
///
/// # Errors
///
/// Returns [`TokenError::Color`] when `base` is not a valid hex color.
pub fn generate_palette(base: &str) -> Result<Palette, TokenError> {
    let normalized = rgb_to_hex(hex_to_rgb(base)?);
    let origin = hex_to_oklch(&normalized)?;

    let shades = SHADE_STEPS
        .iter()
        .map(|&(step, lightness, taper)| {
            let hex = oklch_to_hex(Oklch::new(lightness, origin.c * taper, origin.h))?;
            Ok(Shade {
                name: step.to_string(),
                hex,
            })
        })
        .collect::<Result<Vec<_>, TokenError>>()?;

    debug!(
        base = %normalized,
        chroma = origin.c,
        hue = origin.h,
        shades = shades.len(),
        "generated palette"
    );

    Ok(Palette {
        base: normalized,
        shades,
    })
}
