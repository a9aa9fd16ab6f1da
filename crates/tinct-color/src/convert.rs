use crate::error::ColorError;

/// RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from fractional channels on the 0-255 scale.
    ///
    /// Each channel is rounded and clamped; NaN maps to 0.
    #[must_use]
    pub fn from_f64(r: f64, g: f64, b: f64) -> Self {
        Self::new(channel(r), channel(g), channel(b))
    }

    /// Pack into `0xRRGGBB`.
    #[must_use]
    pub const fn as_key(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }
}

/// HSL color: hue in degrees, saturation and lightness in percent.
///
/// Components are `f64` because the contrast search probes fractional
/// lightness and saturation. Values produced by [`rgb_to_hsl`] are whole
/// numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }
}

fn channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 255.0) as u8
}

const fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        b'A'..=b'F' => digit - b'A' + 10,
        _ => 0,
    }
}

const fn hex_byte(digits: &[u8], i: usize) -> u8 {
    (hex_value(digits[i]) << 4) | hex_value(digits[i + 1])
}

/// Wrap a hue angle into `[0, 360)`.
pub(crate) fn normalize_hue(hue: f64) -> f64 {
    let wrapped = hue.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Parse `#RRGGBB` / `#RGB` (the `#` is optional, case and surrounding
/// whitespace are ignored).
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] for any other length or for
/// non-hex characters.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    let trimmed = hex.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed).as_bytes();
    if !digits.iter().all(u8::is_ascii_hexdigit) {
        return Err(ColorError::invalid_color(hex));
    }

    match digits.len() {
        3 => Ok(Rgb::new(
            hex_value(digits[0]) * 17,
            hex_value(digits[1]) * 17,
            hex_value(digits[2]) * 17,
        )),
        6 => Ok(Rgb::new(
            hex_byte(digits, 0),
            hex_byte(digits, 2),
            hex_byte(digits, 4),
        )),
        _ => Err(ColorError::invalid_color(hex)),
    }
}

/// Format as lowercase `#rrggbb`.
#[must_use]
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

/// Convert to HSL with each component rounded to the nearest integer.
#[must_use]
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0.0, 0.0, (l * 100.0).round());
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    } / 6.0;

    Hsl::new(
        (h * 360.0).round() % 360.0,
        (s * 100.0).round(),
        (l * 100.0).round(),
    )
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Convert HSL to RGB. Hue wraps modulo 360; saturation and lightness are
/// clamped to `[0, 100]`.
#[must_use]
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = normalize_hue(hsl.h) / 360.0;
    let s = hsl.s.clamp(0.0, 100.0) / 100.0;
    let l = hsl.l.clamp(0.0, 100.0) / 100.0;

    if s == 0.0 {
        let v = l * 255.0;
        return Rgb::from_f64(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb::from_f64(
        hue_to_channel(p, q, h + 1.0 / 3.0) * 255.0,
        hue_to_channel(p, q, h) * 255.0,
        hue_to_channel(p, q, h - 1.0 / 3.0) * 255.0,
    )
}

/// Parse a hex color and convert it to (rounded) HSL.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] for malformed hex input.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl, ColorError> {
    hex_to_rgb(hex).map(rgb_to_hsl)
}

/// Convert HSL to lowercase `#rrggbb`.
#[must_use]
pub fn hsl_to_hex(hsl: Hsl) -> String {
    rgb_to_hex(hsl_to_rgb(hsl))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel_distance(a: Rgb, b: Rgb) -> u8 {
        a.r.abs_diff(b.r).max(a.g.abs_diff(b.g)).max(a.b.abs_diff(b.b))
    }

    // --- hex parsing ---

    #[test]
    fn parses_six_digit_hex() {
        assert_eq!(hex_to_rgb("#FF6B6B"), Ok(Rgb::new(255, 107, 107)));
        assert_eq!(hex_to_rgb("#1a2b3c"), Ok(Rgb::new(0x1a, 0x2b, 0x3c)));
    }

    #[test]
    fn parses_shorthand_and_missing_hash() {
        assert_eq!(hex_to_rgb("#F00"), Ok(Rgb::new(255, 0, 0)));
        assert_eq!(hex_to_rgb("abc"), Ok(Rgb::new(0xaa, 0xbb, 0xcc)));
        assert_eq!(hex_to_rgb("00ff00"), Ok(Rgb::new(0, 255, 0)));
    }

    #[test]
    fn ignores_surrounding_whitespace() {
        assert_eq!(hex_to_rgb("  #000000\n"), Ok(Rgb::BLACK));
    }

    #[test]
    fn rejects_malformed_hex() {
        for bad in ["", "#", "#12", "#1234", "#12345", "#1234567", "#GGGGGG", "#12345G", "##FFF"] {
            assert!(
                matches!(hex_to_rgb(bad), Err(ColorError::InvalidColorFormat { .. })),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn error_keeps_the_raw_input() {
        let err = hex_to_rgb(" #zz ").unwrap_err();
        assert_eq!(
            err,
            ColorError::InvalidColorFormat {
                input: " #zz ".to_string()
            }
        );
    }

    // --- hex formatting ---

    #[test]
    fn formats_lowercase_six_digits() {
        assert_eq!(rgb_to_hex(Rgb::new(255, 107, 107)), "#ff6b6b");
        assert_eq!(rgb_to_hex(Rgb::new(0, 1, 15)), "#00010f");
    }

    #[test]
    fn from_f64_clamps_and_rounds() {
        assert_eq!(Rgb::from_f64(-12.0, 300.0, 127.5), Rgb::new(0, 255, 128));
        assert_eq!(Rgb::from_f64(f64::NAN, 0.49, 254.6), Rgb::new(0, 0, 255));
    }

    #[test]
    fn as_key_packs_channels() {
        assert_eq!(Rgb::new(0x12, 0x34, 0x56).as_key(), 0x12_3456);
    }

    #[test]
    fn rgb_hex_rgb_is_stable() {
        for hex in ["#000000", "#ffffff", "#767676", "#87ceeb", "#f0a", "#3366CC"] {
            let rgb = hex_to_rgb(hex).unwrap();
            assert_eq!(hex_to_rgb(&rgb_to_hex(rgb)).unwrap(), rgb);
        }
    }

    // --- HSL ---

    #[test]
    fn primaries_to_hsl() {
        assert_eq!(rgb_to_hsl(Rgb::new(255, 0, 0)), Hsl::new(0.0, 100.0, 50.0));
        assert_eq!(rgb_to_hsl(Rgb::new(0, 255, 0)), Hsl::new(120.0, 100.0, 50.0));
        assert_eq!(rgb_to_hsl(Rgb::new(0, 0, 255)), Hsl::new(240.0, 100.0, 50.0));
    }

    #[test]
    fn achromatic_to_hsl() {
        assert_eq!(rgb_to_hsl(Rgb::WHITE), Hsl::new(0.0, 0.0, 100.0));
        assert_eq!(rgb_to_hsl(Rgb::BLACK), Hsl::new(0.0, 0.0, 0.0));
        assert_eq!(rgb_to_hsl(Rgb::new(128, 128, 128)), Hsl::new(0.0, 0.0, 50.0));
    }

    #[test]
    fn hsl_components_are_rounded() {
        assert_eq!(hex_to_hsl("#87CEEB").unwrap(), Hsl::new(197.0, 71.0, 73.0));
    }

    #[test]
    fn hsl_to_rgb_primaries() {
        assert_eq!(hsl_to_rgb(Hsl::new(0.0, 100.0, 50.0)), Rgb::new(255, 0, 0));
        assert_eq!(hsl_to_rgb(Hsl::new(120.0, 100.0, 50.0)), Rgb::new(0, 255, 0));
        assert_eq!(hsl_to_rgb(Hsl::new(240.0, 100.0, 50.0)), Rgb::new(0, 0, 255));
    }

    #[test]
    fn hue_wraps_modulo_360() {
        let red = hsl_to_rgb(Hsl::new(0.0, 100.0, 50.0));
        assert_eq!(hsl_to_rgb(Hsl::new(360.0, 100.0, 50.0)), red);
        assert_eq!(hsl_to_rgb(Hsl::new(720.0, 100.0, 50.0)), red);
        assert_eq!(
            hsl_to_rgb(Hsl::new(-120.0, 100.0, 50.0)),
            hsl_to_rgb(Hsl::new(240.0, 100.0, 50.0))
        );
    }

    #[test]
    fn saturation_and_lightness_are_clamped() {
        assert_eq!(hsl_to_rgb(Hsl::new(0.0, 0.0, 150.0)), Rgb::WHITE);
        assert_eq!(hsl_to_rgb(Hsl::new(0.0, 250.0, -5.0)), Rgb::BLACK);
    }

    #[test]
    fn fractional_lightness_is_accepted() {
        assert_eq!(hsl_to_hex(Hsl::new(0.0, 0.0, 37.5)), "#606060");
    }

    #[test]
    fn hsl_round_trip_exact_for_simple_colors() {
        for hex in ["#ff6b6b", "#3366cc", "#ff0000", "#ffffff", "#000000"] {
            assert_eq!(hsl_to_hex(hex_to_hsl(hex).unwrap()), hex);
        }
    }

    #[test]
    fn hsl_round_trip_is_lossy_by_at_most_two_units() {
        for hex in ["#87ceeb", "#767676", "#ff6b6b", "#3366cc"] {
            let original = hex_to_rgb(hex).unwrap();
            let back = hsl_to_rgb(hex_to_hsl(hex).unwrap());
            let distance = channel_distance(original, back);
            assert!(distance <= 2, "{hex} drifted by {distance}");
        }
    }

    #[test]
    fn normalize_hue_range() {
        assert_eq!(normalize_hue(360.0), 0.0);
        assert_eq!(normalize_hue(-30.0), 330.0);
        assert_eq!(normalize_hue(725.0), 5.0);
        assert!(normalize_hue(-1e-17) < 360.0);
    }
}
