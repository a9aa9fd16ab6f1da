//! WCAG relative luminance, contrast ratio, and compliance levels.

use std::fmt;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use rustc_hash::FxHashMap;

use crate::convert::{Rgb, hex_to_rgb};
use crate::error::ColorError;

/// WCAG conformance level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WcagLevel {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "AA"))]
    Aa,
    #[cfg_attr(feature = "serde", serde(rename = "AAA"))]
    Aaa,
}

impl WcagLevel {
    /// Minimum contrast ratio for this level at the given text size.
    #[must_use]
    pub const fn min_ratio(self, size: TextSize) -> f64 {
        match (self, size) {
            (Self::Aa, TextSize::Normal) => 4.5,
            (Self::Aa, TextSize::Large) => 3.0,
            (Self::Aaa, TextSize::Normal) => 7.0,
            (Self::Aaa, TextSize::Large) => 4.5,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Aa => "AA",
            Self::Aaa => "AAA",
        }
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text size class. WCAG "large" is 18pt regular or 14pt bold and up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum TextSize {
    #[default]
    Normal,
    Large,
}

impl TextSize {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Large => "large",
        }
    }
}

impl fmt::Display for TextSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Highest level a ratio satisfies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ComplianceLevel {
    #[cfg_attr(feature = "serde", serde(rename = "AAA"))]
    Aaa,
    #[cfg_attr(feature = "serde", serde(rename = "AA"))]
    Aa,
    #[cfg_attr(feature = "serde", serde(rename = "fail"))]
    Fail,
}

impl ComplianceLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Aaa => "AAA",
            Self::Aa => "AA",
            Self::Fail => "fail",
        }
    }
}

impl fmt::Display for ComplianceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pass/fail report for one contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WcagCompliance {
    pub ratio: f64,
    #[cfg_attr(feature = "serde", serde(rename = "AA"))]
    pub aa: bool,
    #[cfg_attr(feature = "serde", serde(rename = "AAA"))]
    pub aaa: bool,
    pub level: ComplianceLevel,
}

/// `ratio >= threshold`; a ratio exactly on the threshold passes.
#[must_use]
pub fn meets_wcag(ratio: f64, level: WcagLevel, size: TextSize) -> bool {
    ratio >= level.min_ratio(size)
}

#[must_use]
pub fn wcag_compliance(ratio: f64, size: TextSize) -> WcagCompliance {
    let aa = meets_wcag(ratio, WcagLevel::Aa, size);
    let aaa = meets_wcag(ratio, WcagLevel::Aaa, size);
    let level = if aaa {
        ComplianceLevel::Aaa
    } else if aa {
        ComplianceLevel::Aa
    } else {
        ComplianceLevel::Fail
    };
    WcagCompliance {
        ratio,
        aa,
        aaa,
        level,
    }
}

// WCAG 2.x linearization (threshold 0.03928; the OKLab path uses 0.04045).
fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Uncached WCAG relative luminance of an 8-bit color, in `[0, 1]`.
#[must_use]
pub fn relative_luminance_rgb(rgb: Rgb) -> f64 {
    0.2126 * linearize(rgb.r) + 0.7152 * linearize(rgb.g) + 0.0722 * linearize(rgb.b)
}

/// Contrast ratio of two luminances, in `[1, 21]`. Symmetric.
#[must_use]
pub fn contrast_ratio(l1: f64, l2: f64) -> f64 {
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Black or white, whichever contrasts more with `luminance`, and that ratio.
///
/// Ties go to black.
#[must_use]
pub fn black_or_white(luminance: f64) -> (Rgb, f64) {
    let on_black = contrast_ratio(0.0, luminance);
    let on_white = contrast_ratio(1.0, luminance);
    if on_black >= on_white {
        (Rgb::BLACK, on_black)
    } else {
        (Rgb::WHITE, on_white)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
}

#[derive(Debug, Default)]
struct CacheState {
    map: FxHashMap<String, f64>,
    hits: u64,
    misses: u64,
}

/// Memo of relative luminance keyed by the trimmed, uppercased hex string.
///
/// Shorthand is not expanded before keying, so `#F00` and `#FF0000` occupy
/// separate entries holding the same value. Entries never expire; only
/// [`LuminanceCache::clear`] drops them. Safe to share across threads.
#[derive(Debug, Default)]
pub struct LuminanceCache {
    state: Mutex<CacheState>,
}

impl LuminanceCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide cache used by the free functions of this crate.
    #[must_use]
    pub fn global() -> &'static Self {
        static GLOBAL: OnceLock<LuminanceCache> = OnceLock::new();
        GLOBAL.get_or_init(Self::new)
    }

    // The map holds only derived values, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// WCAG relative luminance of `hex`, computed once per key.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`] for malformed hex input;
    /// nothing is cached in that case.
    pub fn relative_luminance(&self, hex: &str) -> Result<f64, ColorError> {
        let key = hex.trim().to_ascii_uppercase();
        {
            let mut state = self.lock();
            if let Some(&cached) = state.map.get(&key) {
                state.hits += 1;
                return Ok(cached);
            }
        }

        let luminance = relative_luminance_rgb(hex_to_rgb(hex)?);
        let mut state = self.lock();
        state.misses += 1;
        state.map.insert(key, luminance);
        Ok(luminance)
    }

    /// Contrast ratio between two hex colors.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`] if either color is
    /// malformed.
    pub fn contrast(&self, foreground: &str, background: &str) -> Result<f64, ColorError> {
        let l1 = self.relative_luminance(foreground)?;
        let l2 = self.relative_luminance(background)?;
        Ok(contrast_ratio(l1, l2))
    }

    /// Drop every entry and reset the hit/miss counters.
    pub fn clear(&self) {
        let mut state = self.lock();
        state.map.clear();
        state.hits = 0;
        state.misses = 0;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().map.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        let state = self.lock();
        CacheStats {
            hits: state.hits,
            misses: state.misses,
            size: state.map.len(),
        }
    }
}

/// Relative luminance through the process-wide cache.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] for malformed hex input.
pub fn relative_luminance(hex: &str) -> Result<f64, ColorError> {
    LuminanceCache::global().relative_luminance(hex)
}

/// Clear the process-wide luminance cache.
pub fn clear_luminance_cache() {
    LuminanceCache::global().clear();
}

/// Contrast ratio through the process-wide cache.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] if either color is malformed.
pub fn calculate_contrast(foreground: &str, background: &str) -> Result<f64, ColorError> {
    LuminanceCache::global().contrast(foreground, background)
}
