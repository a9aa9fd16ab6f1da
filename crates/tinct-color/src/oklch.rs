//! OKLCH conversion and interpolation.
//!
//! hex → sRGB → linear RGB → LMS → OKLab → OKLCH, and back. Matrix constants
//! are Björn Ottosson's reference values
//! (<https://bottosson.github.io/posts/oklab/>).

use crate::convert::{Rgb, hex_to_rgb, normalize_hue, rgb_to_hex};
use crate::error::ColorError;

/// Below this chroma the hue angle is noise and is pinned to 0.
pub const ACHROMATIC_CHROMA: f64 = 1e-4;

/// Color in the perceptually uniform OKLCH space.
///
/// `l` in `[0, 1]`, `c >= 0` (about 0.4 at most inside sRGB), `h` in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Oklch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl Oklch {
    #[must_use]
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Check every component against its range.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidOklchValue`] naming the first offending
    /// field.
    pub fn validate(&self) -> Result<(), ColorError> {
        if !self.l.is_finite() || !(0.0..=1.0).contains(&self.l) {
            return Err(ColorError::invalid_oklch("l", self.l));
        }
        if !self.c.is_finite() || self.c < 0.0 {
            return Err(ColorError::invalid_oklch("c", self.c));
        }
        if !self.h.is_finite() || !(0.0..=360.0).contains(&self.h) {
            return Err(ColorError::invalid_oklch("h", self.h));
        }
        Ok(())
    }

    #[must_use]
    pub fn is_achromatic(&self) -> bool {
        self.c < ACHROMATIC_CHROMA
    }
}

// OKLab linearization (IEC 61966-2-1). The WCAG luminance path uses its own
// 0.03928 threshold; the two are kept separate.
fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

#[allow(clippy::excessive_precision, clippy::many_single_char_names)]
fn linear_srgb_to_oklab(r: f64, g: f64, b: f64) -> [f64; 3] {
    let l = 0.412_221_470_8 * r + 0.536_332_536_3 * g + 0.051_445_992_9 * b;
    let m = 0.211_903_498_2 * r + 0.680_699_545_1 * g + 0.107_396_956_6 * b;
    let s = 0.088_302_461_9 * r + 0.281_718_837_6 * g + 0.629_978_700_5 * b;

    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    [
        0.210_454_255_3 * l_ + 0.793_617_785_0 * m_ - 0.004_072_046_8 * s_,
        1.977_998_495_1 * l_ - 2.428_592_205_0 * m_ + 0.450_593_709_9 * s_,
        0.025_904_037_1 * l_ + 0.782_771_766_2 * m_ - 0.808_675_766_0 * s_,
    ]
}

#[allow(clippy::excessive_precision, clippy::many_single_char_names)]
fn oklab_to_linear_srgb(lightness: f64, a: f64, b: f64) -> [f64; 3] {
    let l_ = lightness + 0.396_337_777_4 * a + 0.215_803_757_3 * b;
    let m_ = lightness - 0.105_561_345_8 * a - 0.063_854_172_8 * b;
    let s_ = lightness - 0.089_484_177_5 * a - 1.291_485_548_0 * b;

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    [
        4.076_741_662_1 * l - 3.307_711_591_3 * m + 0.230_969_929_2 * s,
        -1.268_438_004_6 * l + 2.609_757_401_1 * m - 0.341_319_396_5 * s,
        -0.004_196_086_3 * l - 0.703_418_614_7 * m + 1.707_614_701_0 * s,
    ]
}

fn encode_channel(linear: f64) -> f64 {
    linear_to_srgb(linear).clamp(0.0, 1.0) * 255.0
}

/// Convert an 8-bit color to OKLCH.
#[must_use]
pub fn rgb_to_oklch(rgb: Rgb) -> Oklch {
    let [lightness, a, b] = linear_srgb_to_oklab(
        srgb_to_linear(f64::from(rgb.r) / 255.0),
        srgb_to_linear(f64::from(rgb.g) / 255.0),
        srgb_to_linear(f64::from(rgb.b) / 255.0),
    );

    let chroma = (a * a + b * b).sqrt();
    let hue = if chroma < ACHROMATIC_CHROMA {
        0.0
    } else {
        normalize_hue(b.atan2(a).to_degrees())
    };

    Oklch::new(lightness, chroma, hue)
}

/// Convert OKLCH to an 8-bit color, clamping out-of-gamut channels.
///
/// No range validation happens here; see [`oklch_to_hex`] for the checked
/// entry point.
#[must_use]
pub fn oklch_to_rgb(oklch: Oklch) -> Rgb {
    let (sin_h, cos_h) = oklch.h.to_radians().sin_cos();
    let [r, g, b] = oklab_to_linear_srgb(oklch.l, oklch.c * cos_h, oklch.c * sin_h);
    Rgb::from_f64(encode_channel(r), encode_channel(g), encode_channel(b))
}

/// Parse a hex color and convert it to OKLCH.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] for malformed hex input.
pub fn hex_to_oklch(hex: &str) -> Result<Oklch, ColorError> {
    hex_to_rgb(hex).map(rgb_to_oklch)
}

/// Convert a validated OKLCH color to lowercase `#rrggbb`.
///
/// # Errors
///
/// Returns [`ColorError::InvalidOklchValue`] when `l` is outside `[0, 1]`,
/// `c` is negative, or `h` is outside `[0, 360]`.
pub fn oklch_to_hex(oklch: Oklch) -> Result<String, ColorError> {
    oklch.validate()?;
    Ok(rgb_to_hex(oklch_to_rgb(oklch)))
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Interpolate two OKLCH colors.
///
/// Lightness and chroma are linear; hue travels the shorter way around the
/// circle. `t` is clamped to `[0, 1]` (NaN counts as 0) and never errors.
#[must_use]
pub fn interpolate_oklch(from: Oklch, to: Oklch, t: f64) -> Oklch {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

    let mut delta = to.h - from.h;
    if delta > 180.0 {
        delta -= 360.0;
    } else if delta < -180.0 {
        delta += 360.0;
    }

    Oklch::new(
        lerp(from.l, to.l, t),
        lerp(from.c, to.c, t),
        normalize_hue(from.h + delta * t),
    )
}
