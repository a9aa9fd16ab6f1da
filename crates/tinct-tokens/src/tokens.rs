//! Token collections and their CSS/JSON renderings.

use std::fmt;
use std::fmt::Write as _;

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::debug;

use crate::error::TokenError;
use crate::gradient::Gradient;
use crate::palette::{Palette, generate_palette};
use crate::shadow::ShadowScale;
use crate::spacing::SpacingScale;
use crate::typography::TypographyScale;

/// Angle used when a gradient token has no explicit direction.
pub const DEFAULT_GRADIENT_ANGLE: f64 = 90.0;

/// Shadow levels in [`TokenSet::from_base`].
const DEFAULT_SHADOW_LEVELS: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenGroup {
    Color,
    FontSize,
    Space,
    Shadow,
    Gradient,
}

impl TokenGroup {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::FontSize => "font-size",
            Self::Space => "space",
            Self::Shadow => "shadow",
            Self::Gradient => "gradient",
        }
    }
}

impl fmt::Display for TokenGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub name: String,
    pub value: String,
}

/// Named tokens grouped by kind. Groups and tokens keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet {
    groups: Vec<(TokenGroup, Vec<Token>)>,
}

impl TokenSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Palette shades for `base` plus the default type, space, and shadow
    /// scales. Shadows are tinted with the palette's darkest shade.
    ///
    /// # Errors
    ///
    /// [`TokenError::Color`] when `base` is malformed.
    pub fn from_base(base: &str) -> Result<Self, TokenError> {
        let palette = generate_palette(base)?;
        let shadow_color = palette
            .shades
            .last()
            .map_or_else(|| palette.base.clone(), |shade| shade.hex.clone());

        let mut set = Self::new();
        set.add_palette("primary", &palette);
        set.add_typography(&TypographyScale::default());
        set.add_spacing(&SpacingScale::default());
        set.add_shadows(&ShadowScale::elevations(&shadow_color, DEFAULT_SHADOW_LEVELS)?);
        debug!(base, tokens = set.len(), "built token set");
        Ok(set)
    }

    /// Add or replace a token. A replaced token keeps its position.
    pub fn insert(&mut self, group: TokenGroup, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        let tokens = match self.groups.iter().position(|(g, _)| *g == group) {
            Some(index) => &mut self.groups[index].1,
            None => {
                self.groups.push((group, Vec::new()));
                let last = self.groups.len() - 1;
                &mut self.groups[last].1
            }
        };
        match tokens.iter_mut().find(|token| token.name == name) {
            Some(existing) => existing.value = value,
            None => tokens.push(Token { name, value }),
        }
    }

    /// `{name}-{shade}` color tokens, plus `{name}` for the base.
    pub fn add_palette(&mut self, name: &str, palette: &Palette) {
        self.insert(TokenGroup::Color, name, palette.base.as_str());
        for shade in palette.iter() {
            self.insert(
                TokenGroup::Color,
                format!("{name}-{}", shade.name),
                shade.hex.as_str(),
            );
        }
    }

    pub fn add_typography(&mut self, scale: &TypographyScale) {
        for step in &scale.steps {
            self.insert(TokenGroup::FontSize, step.name.as_str(), step.css_value());
        }
    }

    pub fn add_spacing(&mut self, scale: &SpacingScale) {
        for step in &scale.steps {
            self.insert(TokenGroup::Space, step.name.as_str(), step.css_value());
        }
    }

    pub fn add_shadows(&mut self, scale: &ShadowScale) {
        for shadow in &scale.shadows {
            self.insert(TokenGroup::Shadow, shadow.name.as_str(), shadow.to_css());
        }
    }

    pub fn add_gradient(&mut self, name: &str, gradient: &Gradient, angle_deg: f64) {
        self.insert(TokenGroup::Gradient, name, gradient.to_css(angle_deg));
    }

    #[must_use]
    pub fn get(&self, group: TokenGroup, name: &str) -> Option<&str> {
        self.tokens(group)
            .iter()
            .find(|token| token.name == name)
            .map(|token| token.value.as_str())
    }

    /// Tokens of one group, empty if the group was never used.
    #[must_use]
    pub fn tokens(&self, group: TokenGroup) -> &[Token] {
        self.groups
            .iter()
            .find(|(g, _)| *g == group)
            .map(|(_, tokens)| tokens.as_slice())
            .unwrap_or(&[])
    }

    pub fn groups(&self) -> impl Iterator<Item = (TokenGroup, &[Token])> {
        self.groups
            .iter()
            .map(|(group, tokens)| (*group, tokens.as_slice()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.iter().map(|(_, tokens)| tokens.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// CSS custom properties on `:root`. An empty prefix is omitted.
    #[must_use]
    pub fn to_css(&self, prefix: &str) -> String {
        let mut out = String::from(":root {\n");
        for (group, tokens) in self.groups() {
            for token in tokens {
                let _ = if prefix.is_empty() {
                    writeln!(out, "  --{group}-{}: {};", token.name, token.value)
                } else {
                    writeln!(out, "  --{prefix}-{group}-{}: {};", token.name, token.value)
                };
            }
        }
        out.push_str("}\n");
        out
    }

    /// Pretty JSON `{ group: { name: value } }` in insertion order.
    ///
    /// # Errors
    ///
    /// [`TokenError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, TokenError> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}

struct GroupTokens<'a>(&'a [Token]);

impl Serialize for GroupTokens<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for token in self.0 {
            map.serialize_entry(&token.name, &token.value)?;
        }
        map.end()
    }
}

impl Serialize for TokenSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (group, tokens) in self.groups() {
            map.serialize_entry(group.as_str(), &GroupTokens(tokens))?;
        }
        map.end()
    }
}
