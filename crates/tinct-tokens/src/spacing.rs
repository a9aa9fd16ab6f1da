//! Linear spacing scales.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::TokenError;
use crate::number::{format_number, round_to};

pub const DEFAULT_MULTIPLIERS: [f64; 10] = [0.0, 0.5, 1.0, 2.0, 3.0, 4.0, 6.0, 8.0, 12.0, 16.0];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceStep {
    /// The multiplier with `.` replaced by `-` (`0-5`, `1`, `12`).
    pub name: String,
    pub px: f64,
}

impl SpaceStep {
    #[must_use]
    pub fn css_value(&self) -> String {
        format!("{}px", format_number(self.px, 2))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpacingScale {
    pub unit_px: f64,
    pub steps: Vec<SpaceStep>,
}

impl Default for SpacingScale {
    /// 4px unit with [`DEFAULT_MULTIPLIERS`].
    fn default() -> Self {
        Self::build(4.0, &DEFAULT_MULTIPLIERS)
    }
}

impl SpacingScale {
    /// `unit_px * m` for each multiplier, in the given order.
    ///
    /// # Errors
    ///
    /// [`TokenError::InvalidScaleInput`] for a non-positive unit or a
    /// negative or non-finite multiplier.
    pub fn linear(unit_px: f64, multipliers: &[f64]) -> Result<Self, TokenError> {
        if !(unit_px.is_finite() && unit_px > 0.0) {
            return Err(TokenError::InvalidScaleInput {
                field: "unit",
                value: unit_px,
            });
        }
        if let Some(&bad) = multipliers.iter().find(|m| !(m.is_finite() && **m >= 0.0)) {
            return Err(TokenError::InvalidScaleInput {
                field: "multiplier",
                value: bad,
            });
        }
        Ok(Self::build(unit_px, multipliers))
    }

    fn build(unit_px: f64, multipliers: &[f64]) -> Self {
        let steps: Vec<SpaceStep> = multipliers
            .iter()
            .map(|&m| SpaceStep {
                name: format_number(m, 2).replace('.', "-"),
                px: round_to(unit_px * m, 2),
            })
            .collect();
        debug!(unit_px, steps = steps.len(), "built spacing scale");
        Self { unit_px, steps }
    }

    #[must_use]
    pub fn step(&self, name: &str) -> Option<&SpaceStep> {
        self.steps.iter().find(|step| step.name == name)
    }
}
