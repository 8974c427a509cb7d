//! Color references and their resolution against a theme
//!
//! Component props name colors either by semantic token (`"primary"`) or by
//! literal (`"#3366ff"`, `"rgba(0, 0, 0, 0.5)"`, `"tomato"`). Parsing happens
//! once at the prop boundary; resolution against a [`Theme`] is infallible.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tincture_core::{parse_color, Color, ColorError, LUMINANCE_THRESHOLD};
use tincture_theme::{Theme, ThemeColor, TypographyColor};
use tracing::trace;

/// Darkening applied to light backgrounds to derive their text color
pub const CONTRAST_DARKEN: f32 = 0.7;

/// A semantic token or a literal color
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColorRef {
    Theme(ThemeColor),
    Literal(Color),
}

impl ColorRef {
    /// Parse a token name or a CSS color literal
    ///
    /// Token names win over literals. Gradients are rejected with
    /// [`ColorError::NotSolid`], anything else unparseable with
    /// [`ColorError::InvalidColor`].
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        let input = input.trim();
        if let Some(token) = ThemeColor::from_name(input) {
            return Ok(ColorRef::Theme(token));
        }
        parse_color(input).map(ColorRef::Literal)
    }

    pub fn is_token(&self) -> bool {
        matches!(self, ColorRef::Theme(_))
    }
}

impl From<ThemeColor> for ColorRef {
    fn from(token: ThemeColor) -> Self {
        ColorRef::Theme(token)
    }
}

impl From<Color> for ColorRef {
    fn from(color: Color) -> Self {
        ColorRef::Literal(color)
    }
}

impl FromStr for ColorRef {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ColorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorRef::Theme(token) => token.fmt(f),
            ColorRef::Literal(color) => color.fmt(f),
        }
    }
}

impl Serialize for ColorRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ColorRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        ColorRef::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Text color reference: inherited, a typography slot, or any color
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum TextColorRef {
    /// The theme's primary text color
    #[default]
    Inherit,
    Typography(TypographyColor),
    Color(ColorRef),
}

impl TextColorRef {
    /// Parse `inherit`, a typography slot name, or a [`ColorRef`]
    ///
    /// Typography slots win, so `"primary"` is the primary *text* color.
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        let input = input.trim();
        if input == "inherit" {
            return Ok(TextColorRef::Inherit);
        }
        if let Some(slot) = TypographyColor::from_name(input) {
            return Ok(TextColorRef::Typography(slot));
        }
        ColorRef::parse(input).map(TextColorRef::Color)
    }

    /// Like [`parse`](Self::parse), but semantic tokens win over slots
    ///
    /// Used where a prop accepts both palettes and a bare `"primary"`
    /// means the brand color.
    pub fn parse_prefer_theme(input: &str) -> Result<Self, ColorError> {
        let input = input.trim();
        if let Some(token) = ThemeColor::from_name(input) {
            return Ok(TextColorRef::Color(ColorRef::Theme(token)));
        }
        Self::parse(input)
    }
}

impl From<ColorRef> for TextColorRef {
    fn from(color: ColorRef) -> Self {
        TextColorRef::Color(color)
    }
}

impl From<ThemeColor> for TextColorRef {
    fn from(token: ThemeColor) -> Self {
        TextColorRef::Color(ColorRef::Theme(token))
    }
}

impl From<TypographyColor> for TextColorRef {
    fn from(slot: TypographyColor) -> Self {
        TextColorRef::Typography(slot)
    }
}

impl FromStr for TextColorRef {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Resolve a color reference to a concrete color
pub fn resolve_color(color: &ColorRef, theme: &Theme) -> Color {
    let resolved = match color {
        ColorRef::Theme(token) => theme.colors.get(*token),
        ColorRef::Literal(color) => *color,
    };
    trace!(%color, %resolved, theme = %theme.id, "resolve_color");
    resolved
}

/// Parse and resolve in one step
pub fn resolve_color_str(input: &str, theme: &Theme) -> Result<Color, ColorError> {
    ColorRef::parse(input).map(|color| resolve_color(&color, theme))
}

/// Resolve a text color reference
pub fn resolve_typography_color(color: &TextColorRef, theme: &Theme) -> Color {
    match color {
        TextColorRef::Inherit => theme.typography.colors.primary,
        TextColorRef::Typography(slot) => theme.typography.colors.get(*slot),
        TextColorRef::Color(color) => resolve_color(color, theme),
    }
}

/// Legible foreground for `background`
///
/// Dark backgrounds (relative luminance below 0.5) get the theme's absolute
/// white; light ones get the background itself darkened by 70%.
pub fn contrast_text(background: Color, theme: &Theme) -> Color {
    if background.relative_luminance() < LUMINANCE_THRESHOLD {
        theme.colors.common.white
    } else {
        background.darken(CONTRAST_DARKEN)
    }
}
