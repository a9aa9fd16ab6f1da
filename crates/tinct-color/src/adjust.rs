//! Contrast-driven color adjustment.
//!
//! Given a foreground/background pair and a WCAG target, find a foreground
//! that meets the target while keeping its hue:
//!
//! 1. **Lightness**: binary-search HSL lightness (hue and saturation fixed)
//!    between the current value and the extreme the search moves toward.
//! 2. **Chroma**: if no lightness works, pin lightness near the extreme and
//!    binary-search for the highest saturation that still passes.
//! 3. **Fallback**: black or white, whichever contrasts more.
//!
//! Each search is capped (20 lightness steps, 40 steps in total) so every
//! call does a small, bounded amount of work.

use std::fmt;

use tracing::{debug, instrument, trace};

use crate::contrast::{LuminanceCache, TextSize, WcagLevel, black_or_white, contrast_ratio};
use crate::convert::{Hsl, hex_to_hsl, hsl_to_hex, rgb_to_hex};
use crate::error::ColorError;

/// Iteration cap for the lightness search.
pub const LIGHTNESS_MAX_ITERATIONS: u32 = 20;
/// Cumulative iteration cap across both searches.
pub const TOTAL_MAX_ITERATIONS: u32 = 40;
/// The lightness search stops once its interval is this narrow (percent).
pub const LIGHTNESS_PRECISION: f64 = 0.5;
/// The saturation search stops once its interval is this narrow (percent).
pub const SATURATION_PRECISION: f64 = 1.0;

const LIGHTEN_PIN: f64 = 98.0;
const DARKEN_PIN: f64 = 2.0;

/// Which phase produced the adjusted color.
///
/// An input that already meets the target is reported as `Lightness` with
/// zero iterations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Strategy {
    Lightness,
    Chroma,
    Fallback,
}

impl Strategy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lightness => "lightness",
            Self::Chroma => "chroma",
            Self::Fallback => "fallback",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Report of one adjustment run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdjustmentResult {
    /// The foreground exactly as supplied.
    pub original: String,
    /// The chosen foreground; equal to `original` when no change was needed.
    pub adjusted: String,
    /// Contrast of `adjusted` against the background.
    pub ratio: f64,
    /// Binary-search steps performed across all phases.
    pub iterations: u32,
    pub strategy: Strategy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Lighten,
    Darken,
}

impl Direction {
    /// Move the foreground's luminance away from the background's. When the
    /// two are equal, head for whichever extreme contrasts more.
    fn away_from(fg_luminance: f64, bg_luminance: f64) -> Self {
        if fg_luminance > bg_luminance {
            Self::Lighten
        } else if fg_luminance < bg_luminance {
            Self::Darken
        } else if contrast_ratio(1.0, bg_luminance) > contrast_ratio(0.0, bg_luminance) {
            Self::Lighten
        } else {
            Self::Darken
        }
    }
}

#[derive(Debug, Clone)]
struct Candidate {
    hex: String,
    ratio: f64,
}

struct Search<'a> {
    cache: &'a LuminanceCache,
    bg_luminance: f64,
    target: f64,
    iterations: u32,
}

impl Search<'_> {
    fn evaluate(&self, hsl: Hsl) -> Result<Candidate, ColorError> {
        let hex = hsl_to_hex(hsl);
        let ratio = contrast_ratio(self.cache.relative_luminance(&hex)?, self.bg_luminance);
        Ok(Candidate { hex, ratio })
    }

    /// Phase 1: the passing lightness closest to the original.
    fn lightness(&mut self, hsl: Hsl, direction: Direction) -> Result<Option<Candidate>, ColorError> {
        let (mut low, mut high) = match direction {
            Direction::Lighten => (hsl.l, 100.0),
            Direction::Darken => (0.0, hsl.l),
        };
        let mut best_lightness = None;

        while self.iterations < LIGHTNESS_MAX_ITERATIONS && high - low > LIGHTNESS_PRECISION {
            self.iterations += 1;
            let mid = (low + high) / 2.0;
            let candidate = self.evaluate(Hsl::new(hsl.h, hsl.s, mid))?;
            let passes = candidate.ratio >= self.target;
            trace!(
                iteration = self.iterations,
                lightness = mid,
                ratio = candidate.ratio,
                passes,
                "lightness probe"
            );

            match (direction, passes) {
                (Direction::Lighten, true) | (Direction::Darken, false) => high = mid,
                (Direction::Lighten, false) | (Direction::Darken, true) => low = mid,
            }
            if passes {
                best_lightness = Some(candidate);
            }
        }

        Ok(best_lightness)
    }

    /// Phase 2: lightness pinned near the extreme, the highest passing
    /// saturation up to the original.
    fn saturation(&mut self, hsl: Hsl, direction: Direction) -> Result<Option<Candidate>, ColorError> {
        let pinned = match direction {
            Direction::Lighten => LIGHTEN_PIN,
            Direction::Darken => DARKEN_PIN,
        };
        let (mut low, mut high) = (0.0, hsl.s);
        let mut best_saturation = None;

        while self.iterations < TOTAL_MAX_ITERATIONS && high - low > SATURATION_PRECISION {
            self.iterations += 1;
            let mid = (low + high) / 2.0;
            let candidate = self.evaluate(Hsl::new(hsl.h, mid, pinned))?;
            let passes = candidate.ratio >= self.target;
            trace!(
                iteration = self.iterations,
                saturation = mid,
                ratio = candidate.ratio,
                passes,
                "saturation probe"
            );

            if passes {
                low = mid;
                best_saturation = Some(candidate);
            } else {
                high = mid;
            }
        }

        Ok(best_saturation)
    }
}

/// Adjust `foreground` until it meets `level`/`size` against `background`,
/// using the process-wide luminance cache.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] if either color is malformed.
/// A valid pair always yields a result, possibly plain black or white.
pub fn adjust_color_for_contrast(
    foreground: &str,
    background: &str,
    level: WcagLevel,
    size: TextSize,
) -> Result<AdjustmentResult, ColorError> {
    adjust_color_for_contrast_with(LuminanceCache::global(), foreground, background, level, size)
}

/// [`adjust_color_for_contrast`] with a caller-owned luminance cache.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] if either color is malformed.
#[instrument(level = "debug", skip(cache), fields(min_ratio = level.min_ratio(size)))]
pub fn adjust_color_for_contrast_with(
    cache: &LuminanceCache,
    foreground: &str,
    background: &str,
    level: WcagLevel,
    size: TextSize,
) -> Result<AdjustmentResult, ColorError> {
    let target = level.min_ratio(size);

    let fg_luminance = cache.relative_luminance(foreground)?;
    let bg_luminance = cache.relative_luminance(background)?;
    let initial = contrast_ratio(fg_luminance, bg_luminance);

    if initial >= target {
        debug!(ratio = initial, "already compliant");
        return Ok(AdjustmentResult {
            original: foreground.to_string(),
            adjusted: foreground.to_string(),
            ratio: initial,
            iterations: 0,
            strategy: Strategy::Lightness,
        });
    }

    let hsl = hex_to_hsl(foreground)?;
    let direction = Direction::away_from(fg_luminance, bg_luminance);
    let mut search = Search {
        cache,
        bg_luminance,
        target,
        iterations: 0,
    };

    let resolved = if let Some(found) = search.lightness(hsl, direction)? {
        Some((found, Strategy::Lightness))
    } else {
        search
            .saturation(hsl, direction)?
            .map(|found| (found, Strategy::Chroma))
    };

    let (adjusted, ratio, strategy) = match resolved {
        Some((found, strategy)) => (found.hex, found.ratio, strategy),
        None => {
            let (extreme, ratio) = black_or_white(bg_luminance);
            (rgb_to_hex(extreme), ratio, Strategy::Fallback)
        }
    };

    debug!(
        initial,
        ratio,
        iterations = search.iterations,
        %strategy,
        %adjusted,
        "adjustment resolved"
    );

    Ok(AdjustmentResult {
        original: foreground.to_string(),
        adjusted,
        ratio,
        iterations: search.iterations,
        strategy,
    })
}
