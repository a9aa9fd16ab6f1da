//! Light, dark, and text companions for a base color.

use crate::adjust::adjust_color_for_contrast_with;
use crate::contrast::{LuminanceCache, TextSize, WcagLevel, black_or_white};
use crate::convert::{Hsl, hex_to_hsl, hsl_to_hex, rgb_to_hex};
use crate::error::ColorError;

const LIGHTNESS_STEP: f64 = 30.0;
const SATURATION_STEP: f64 = 10.0;

/// Light/dark/text companions of an accessible base color.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorVariations {
    /// The input adjusted to WCAG AA (normal text) against the background.
    pub base: String,
    pub light: String,
    pub dark: String,
    /// Black or white, whichever reads better on `base`.
    pub text: String,
}

/// Derive variations using the process-wide luminance cache.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] if either color is malformed.
pub fn generate_accessible_variations(
    base: &str,
    background: &str,
) -> Result<ColorVariations, ColorError> {
    generate_accessible_variations_with(LuminanceCache::global(), base, background)
}

/// Derive variations with a caller-owned cache.
///
/// Only `base` is checked against WCAG; `light` and `dark` are plain
/// lightness/saturation offsets of it.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] if either color is malformed.
pub fn generate_accessible_variations_with(
    cache: &LuminanceCache,
    base: &str,
    background: &str,
) -> Result<ColorVariations, ColorError> {
    let adjusted =
        adjust_color_for_contrast_with(cache, base, background, WcagLevel::Aa, TextSize::Normal)?
            .adjusted;
    let hsl = hex_to_hsl(&adjusted)?;

    let light = hsl_to_hex(Hsl::new(
        hsl.h,
        (hsl.s - SATURATION_STEP).max(0.0),
        (hsl.l + LIGHTNESS_STEP).min(100.0),
    ));
    let dark = hsl_to_hex(Hsl::new(
        hsl.h,
        (hsl.s + SATURATION_STEP).min(100.0),
        (hsl.l - LIGHTNESS_STEP).max(0.0),
    ));
    let (text, _) = black_or_white(cache.relative_luminance(&adjusted)?);

    Ok(ColorVariations {
        base: adjusted,
        light,
        dark,
        text: rgb_to_hex(text),
    })
}

/// `#000000` or `#ffffff`, whichever contrasts more with `background`.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] for malformed input.
pub fn best_text_color(background: &str) -> Result<String, ColorError> {
    let luminance = LuminanceCache::global().relative_luminance(background)?;
    Ok(rgb_to_hex(black_or_white(luminance).0))
}
