#![forbid(unsafe_code)]

//! Color math for the tinct design-token toolkit.
//!
//! This crate provides:
//! - hex, RGB, and HSL conversions ([`hex_to_rgb`], [`hsl_to_hex`], ...)
//! - OKLCH conversion and perceptual interpolation ([`Oklch`])
//! - WCAG luminance, contrast ratio, and compliance checks, backed by a
//!   thread-safe [`LuminanceCache`]
//! - contrast-driven adjustment that keeps hue where it can
//!   ([`adjust_color_for_contrast`])
//! - accessible light/dark/text variations ([`generate_accessible_variations`])
//!
//! Colors cross the public API as `#RGB`/`#RRGGBB` strings; generated hex is
//! always lowercase `#rrggbb`.

/// Contrast-driven color adjustment.
pub mod adjust;
/// WCAG luminance, contrast, and the luminance cache.
pub mod contrast;
/// Hex, RGB, and HSL conversions.
pub mod convert;
/// Error type shared by every fallible operation.
pub mod error;
/// OKLCH conversion and interpolation.
pub mod oklch;
/// Accessible color variations.
pub mod variations;

pub use adjust::{
    AdjustmentResult, Strategy, adjust_color_for_contrast, adjust_color_for_contrast_with,
};
pub use contrast::{
    CacheStats, ComplianceLevel, LuminanceCache, TextSize, WcagCompliance, WcagLevel,
    black_or_white, calculate_contrast, clear_luminance_cache, contrast_ratio, meets_wcag,
    relative_luminance, relative_luminance_rgb, wcag_compliance,
};
pub use convert::{
    Hsl, Rgb, hex_to_hsl, hex_to_rgb, hsl_to_hex, hsl_to_rgb, rgb_to_hex, rgb_to_hsl,
};
pub use error::ColorError;
pub use oklch::{
    ACHROMATIC_CHROMA, Oklch, hex_to_oklch, interpolate_oklch, oklch_to_hex, oklch_to_rgb,
    rgb_to_oklch,
};
pub use variations::{
    ColorVariations, best_text_color, generate_accessible_variations,
    generate_accessible_variations_with,
};
