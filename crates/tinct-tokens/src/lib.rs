#![forbid(unsafe_code)]

//! Design-token generation on top of [`tinct_color`].
//!
//! Generators return plain data ([`Palette`], [`Gradient`],
//! [`TypographyScale`], [`SpacingScale`], [`ShadowScale`]); a [`TokenSet`]
//! collects them under named groups and renders CSS custom properties or a
//! JSON document.

pub mod error;
/// Multi-stop OKLCH gradients.
pub mod gradient;
mod number;
/// Tonal palettes.
pub mod palette;
/// Elevation shadows.
pub mod shadow;
/// Spacing scales.
pub mod spacing;
/// Token sets and rendering.
pub mod tokens;
/// Modular type scales.
pub mod typography;

pub use error::TokenError;
pub use gradient::{Gradient, generate_gradient};
pub use palette::{Palette, SHADE_STEPS, Shade, generate_palette};
pub use shadow::{Shadow, ShadowScale};
pub use spacing::{DEFAULT_MULTIPLIERS, SpaceStep, SpacingScale};
pub use tokens::{DEFAULT_GRADIENT_ANGLE, Token, TokenGroup, TokenSet};
pub use typography::{TypeStep, TypographyScale};
