//! Multi-stop gradients sampled in OKLCH.

use serde::{Deserialize, Serialize};
use tinct_color::{Oklch, hex_to_oklch, hex_to_rgb, interpolate_oklch, oklch_to_hex, rgb_to_hex};
use tracing::debug;

use crate::error::TokenError;
use crate::number::format_number;

/// Evenly spaced colors between two or more stops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gradient {
    /// Input stops, normalized to lowercase `#rrggbb`.
    pub stops: Vec<String>,
    /// Sampled colors; the first and last equal the outer stops.
    pub colors: Vec<String>,
}

impl Gradient {
    /// `linear-gradient(<angle>deg, c0 0%, ..., cn 100%)`.
    #[must_use]
    pub fn to_css(&self, angle_deg: f64) -> String {
        let last = self.colors.len().saturating_sub(1).max(1) as f64;
        let stops = self
            .colors
            .iter()
            .enumerate()
            .map(|(i, color)| {
                let position = i as f64 * 100.0 / last;
                format!("{color} {}%", format_number(position, 2))
            })
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "linear-gradient({}deg, {stops})",
            format_number(angle_deg, 2)
        )
    }
}

/// A gray has no meaningful hue; borrow the neighbor's so the blend does not
/// swing through red.
fn carry_hue(from: Oklch, to: Oklch) -> (Oklch, Oklch) {
    match (from.is_achromatic(), to.is_achromatic()) {
        (true, false) => (Oklch { h: to.h, ..from }, to),
        (false, true) => (from, Oklch { h: from.h, ..to }),
        _ => (from, to),
    }
}

/// Sample `steps` colors across `stops`, interpolating each segment in OKLCH.
///
/// # Errors
///
/// [`TokenError::InvalidGradientInput`] for fewer than two stops or steps;
/// [`TokenError::Color`] for a malformed stop.
pub fn generate_gradient(stops: &[&str], steps: usize) -> Result<Gradient, TokenError> {
    if stops.len() < 2 {
        return Err(TokenError::InvalidGradientInput {
            reason: "at least two stops are required",
        });
    }
    if steps < 2 {
        return Err(TokenError::InvalidGradientInput {
            reason: "at least two steps are required",
        });
    }

    let normalized = stops
        .iter()
        .map(|stop| Ok(rgb_to_hex(hex_to_rgb(stop)?)))
        .collect::<Result<Vec<_>, TokenError>>()?;
    let anchors = normalized
        .iter()
        .map(|stop| hex_to_oklch(stop))
        .collect::<Result<Vec<_>, _>>()?;

    let segments = anchors.len() - 1;
    let mut colors = Vec::with_capacity(steps);
    for i in 0..steps {
        let position = i as f64 / (steps - 1) as f64 * segments as f64;
        let segment = (position.floor() as usize).min(segments - 1);
        let t = position - segment as f64;
        let (from, to) = carry_hue(anchors[segment], anchors[segment + 1]);
        colors.push(oklch_to_hex(interpolate_oklch(from, to, t))?);
    }

    // Pin the endpoints to the exact inputs.
    if let (Some(first), Some(last)) = (normalized.first(), normalized.last()) {
        colors[0].clone_from(first);
        colors[steps - 1].clone_from(last);
    }

    debug!(stops = normalized.len(), steps, "generated gradient");

    Ok(Gradient {
        stops: normalized,
        colors,
    })
}
