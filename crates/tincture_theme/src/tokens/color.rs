//! Color tokens for theming

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tincture_core::{Color, Fill};

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeColor {
    Primary,
    Neutral,
    Success,
    Info,
    Warning,
    Danger,
}

impl ThemeColor {
    /// Every semantic slot, in declaration order
    pub const ALL: [ThemeColor; 6] = [
        ThemeColor::Primary,
        ThemeColor::Neutral,
        ThemeColor::Success,
        ThemeColor::Info,
        ThemeColor::Warning,
        ThemeColor::Danger,
    ];

    /// Token name as written in props and theme files
    pub fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Neutral => "neutral",
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }

    /// Look up a token by name (exact, lowercase)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|token| token.name() == name)
    }
}

impl fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string is not a semantic token name
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownToken(pub String);

impl fmt::Display for UnknownToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown color token `{}`", self.0)
    }
}

impl std::error::Error for UnknownToken {}

impl FromStr for ThemeColor {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s.trim()).ok_or_else(|| UnknownToken(s.to_string()))
    }
}

/// Absolute colors every theme carries
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CommonColors {
    pub white: Color,
    pub black: Color,
}

impl Default for CommonColors {
    fn default() -> Self {
        Self {
            white: Color::WHITE,
            black: Color::BLACK,
        }
    }
}

/// Complete set of semantic color tokens
#[derive(Clone, Debug, PartialEq)]
pub struct ColorTokens {
    pub primary: Color,
    pub neutral: Color,
    pub success: Color,
    pub info: Color,
    pub warning: Color,
    pub danger: Color,

    // Page and container fills; either may be a gradient
    pub background: Fill,
    pub surface: Fill,

    pub common: CommonColors,
}

impl ColorTokens {
    /// Get a color by token key
    pub fn get(&self, token: ThemeColor) -> Color {
        match token {
            ThemeColor::Primary => self.primary,
            ThemeColor::Neutral => self.neutral,
            ThemeColor::Success => self.success,
            ThemeColor::Info => self.info,
            ThemeColor::Warning => self.warning,
            ThemeColor::Danger => self.danger,
        }
    }

    /// Mutable slot for a token key
    pub fn get_mut(&mut self, token: ThemeColor) -> &mut Color {
        match token {
            ThemeColor::Primary => &mut self.primary,
            ThemeColor::Neutral => &mut self.neutral,
            ThemeColor::Success => &mut self.success,
            ThemeColor::Info => &mut self.info,
            ThemeColor::Warning => &mut self.warning,
            ThemeColor::Danger => &mut self.danger,
        }
    }

    /// Whether `color` is one of the six semantic slot values
    pub fn contains(&self, color: Color) -> bool {
        ThemeColor::ALL.iter().any(|t| self.get(*t) == color)
    }
}

impl Default for ColorTokens {
    fn default() -> Self {
        // Default to the base dark palette
        Self {
            primary: Color::from_hex(0x3366FF),
            neutral: Color::from_hex(0x8A8F98),
            success: Color::from_hex(0x22C55E),
            info: Color::from_hex(0x0EA5E9),
            warning: Color::from_hex(0xF59E0B),
            danger: Color::from_hex(0xEF4444),
            background: Fill::Solid(Color::from_hex(0x0F1115)),
            surface: Fill::Solid(Color::from_hex(0x1A1D23)),
            common: CommonColors::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_names_round_trip() {
        for token in ThemeColor::ALL {
            assert_eq!(ThemeColor::from_name(token.name()), Some(token));
            assert_eq!(token.to_string().parse::<ThemeColor>(), Ok(token));
        }
        assert_eq!(ThemeColor::from_name("secondary"), None);
        assert!("Primary".parse::<ThemeColor>().is_err());
    }

    #[test]
    fn test_get_mut_targets_the_same_slot() {
        let mut colors = ColorTokens::default();
        *colors.get_mut(ThemeColor::Warning) = Color::RED;
        assert_eq!(colors.get(ThemeColor::Warning), Color::RED);
        assert_eq!(colors.warning, Color::RED);
    }

    #[test]
    fn test_serde_token_names() {
        let json = serde_json::to_string(&ThemeColor::Danger).unwrap();
        assert_eq!(json, "\"danger\"");
        let back: ThemeColor = serde_json::from_str("\"info\"").unwrap();
        assert_eq!(back, ThemeColor::Info);
    }
}
