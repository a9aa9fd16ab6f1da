//! Modular type scales.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::TokenError;
use crate::number::{format_number, round_to};

/// Pixels per `rem`.
pub const ROOT_FONT_PX: f64 = 16.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeStep {
    pub name: String,
    /// Rounded to 2 decimals.
    pub px: f64,
    /// `px / 16`, rounded to 4 decimals.
    pub rem: f64,
}

impl TypeStep {
    /// CSS value, e.g. `1.25rem`.
    #[must_use]
    pub fn css_value(&self) -> String {
        format!("{}rem", format_number(self.rem, 4))
    }
}

/// Font sizes `base * ratio^k`, smallest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypographyScale {
    pub base_px: f64,
    pub ratio: f64,
    pub steps: Vec<TypeStep>,
}

impl Default for TypographyScale {
    /// 16px major third, two steps down and five up (`xs` .. `4xl`).
    fn default() -> Self {
        Self::build(ROOT_FONT_PX, 1.25, 2, 5)
    }
}

/// `base`, then `lg, xl, 2xl, 3xl...` upward and `sm, xs, 2xs...` downward.
fn step_name(k: i32) -> String {
    match k {
        0 => "base".to_string(),
        1 => "lg".to_string(),
        2 => "xl".to_string(),
        -1 => "sm".to_string(),
        -2 => "xs".to_string(),
        k if k > 0 => format!("{}xl", k - 1),
        k => format!("{}xs", -k - 1),
    }
}

fn check_positive(field: &'static str, value: f64) -> Result<(), TokenError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TokenError::InvalidScaleInput { field, value })
    }
}

impl TypographyScale {
    /// Build a modular scale.
    ///
    /// # Errors
    ///
    /// [`TokenError::InvalidScaleInput`] when `base_px` or `ratio` is not a
    /// finite positive number.
    pub fn modular(
        base_px: f64,
        ratio: f64,
        steps_below: u8,
        steps_above: u8,
    ) -> Result<Self, TokenError> {
        check_positive("base", base_px)?;
        check_positive("ratio", ratio)?;
        Ok(Self::build(base_px, ratio, steps_below, steps_above))
    }

    fn build(base_px: f64, ratio: f64, steps_below: u8, steps_above: u8) -> Self {
        let steps: Vec<TypeStep> = (-i32::from(steps_below)..=i32::from(steps_above))
            .map(|k| {
                let px = round_to(base_px * ratio.powi(k), 2);
                TypeStep {
                    name: step_name(k),
                    px,
                    rem: round_to(px / ROOT_FONT_PX, 4),
                }
            })
            .collect();
        debug!(base_px, ratio, steps = steps.len(), "built type scale");
        Self {
            base_px,
            ratio,
            steps,
        }
    }

    #[must_use]
    pub fn step(&self, name: &str) -> Option<&TypeStep> {
        self.steps.iter().find(|step| step.name == name)
    }
}
