//! Typography tokens for theming

use std::fmt;

use serde::{Deserialize, Serialize};
use tincture_core::Color;

/// Text color slot keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypographyColor {
    Primary,
    Secondary,
    Accent,
    Disabled,
}

impl TypographyColor {
    pub const ALL: [TypographyColor; 4] = [
        TypographyColor::Primary,
        TypographyColor::Secondary,
        TypographyColor::Accent,
        TypographyColor::Disabled,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Disabled => "disabled",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.name() == name)
    }
}

impl fmt::Display for TypographyColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Text colors
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TypographyColors {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub disabled: Color,
}

impl TypographyColors {
    pub fn get(&self, slot: TypographyColor) -> Color {
        match slot {
            TypographyColor::Primary => self.primary,
            TypographyColor::Secondary => self.secondary,
            TypographyColor::Accent => self.accent,
            TypographyColor::Disabled => self.disabled,
        }
    }

    pub fn get_mut(&mut self, slot: TypographyColor) -> &mut Color {
        match slot {
            TypographyColor::Primary => &mut self.primary,
            TypographyColor::Secondary => &mut self.secondary,
            TypographyColor::Accent => &mut self.accent,
            TypographyColor::Disabled => &mut self.disabled,
        }
    }
}

/// Named text levels
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TypographyLevel {
    DisplayLg,
    DisplayMd,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    TitleLg,
    TitleMd,
    TitleSm,
    BodyLg,
    BodyMd,
    BodySm,
    BodyXs,
}

impl TypographyLevel {
    pub fn name(self) -> &'static str {
        match self {
            Self::DisplayLg => "display-lg",
            Self::DisplayMd => "display-md",
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
            Self::TitleLg => "title-lg",
            Self::TitleMd => "title-md",
            Self::TitleSm => "title-sm",
            Self::BodyLg => "body-lg",
            Self::BodyMd => "body-md",
            Self::BodySm => "body-sm",
            Self::BodyXs => "body-xs",
        }
    }
}

/// Font metrics of a single level
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LevelStyle {
    pub font_size: f32,
    /// Multiplier of `font_size`
    pub line_height: f32,
    pub font_weight: u16,
}

impl LevelStyle {
    pub const fn new(font_size: f32, line_height: f32, font_weight: u16) -> Self {
        Self {
            font_size,
            line_height,
            font_weight,
        }
    }

    /// Line height in pixels
    pub fn line_height_px(&self) -> f32 {
        self.font_size * self.line_height
    }
}

/// Complete set of typography tokens
#[derive(Clone, Debug, PartialEq)]
pub struct TypographyTokens {
    pub font_family: String,
    pub colors: TypographyColors,
}

impl TypographyTokens {
    /// Metrics for a level
    pub fn level(&self, level: TypographyLevel) -> LevelStyle {
        match level {
            TypographyLevel::DisplayLg => LevelStyle::new(48.0, 1.2, 700),
            TypographyLevel::DisplayMd => LevelStyle::new(40.0, 1.2, 700),
            TypographyLevel::H1 => LevelStyle::new(32.0, 1.25, 700),
            TypographyLevel::H2 => LevelStyle::new(28.0, 1.25, 700),
            TypographyLevel::H3 => LevelStyle::new(24.0, 1.3, 600),
            TypographyLevel::H4 => LevelStyle::new(20.0, 1.35, 600),
            TypographyLevel::H5 => LevelStyle::new(18.0, 1.4, 600),
            TypographyLevel::H6 => LevelStyle::new(16.0, 1.4, 600),
            TypographyLevel::TitleLg => LevelStyle::new(18.0, 1.4, 500),
            TypographyLevel::TitleMd => LevelStyle::new(16.0, 1.4, 500),
            TypographyLevel::TitleSm => LevelStyle::new(14.0, 1.4, 500),
            TypographyLevel::BodyLg => LevelStyle::new(18.0, 1.5, 400),
            TypographyLevel::BodyMd => LevelStyle::new(16.0, 1.5, 400),
            TypographyLevel::BodySm => LevelStyle::new(14.0, 1.5, 400),
            TypographyLevel::BodyXs => LevelStyle::new(12.0, 1.5, 400),
        }
    }
}

impl Default for TypographyTokens {
    fn default() -> Self {
        Self {
            font_family: "System".to_string(),
            colors: TypographyColors {
                primary: Color::from_hex(0xF3F4F6),
                secondary: Color::from_hex(0x9CA3AF),
                accent: Color::from_hex(0x3366FF),
                disabled: Color::from_hex(0x6B7280),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_shrink() {
        let tokens = TypographyTokens::default();
        let sizes: Vec<f32> = [
            TypographyLevel::H1,
            TypographyLevel::H2,
            TypographyLevel::H3,
            TypographyLevel::H4,
            TypographyLevel::H5,
        ]
        .iter()
        .map(|l| tokens.level(*l).font_size)
        .collect();
        assert!(sizes.windows(2).all(|w| w[0] > w[1]), "{sizes:?}");
    }

    #[test]
    fn test_body_md_line_height() {
        let body = TypographyTokens::default().level(TypographyLevel::BodyMd);
        assert_eq!(body.font_size, 16.0);
        assert_eq!(body.line_height_px(), 24.0);
    }

    #[test]
    fn test_level_serde_name_matches_name() {
        let json = serde_json::to_string(&TypographyLevel::TitleSm).unwrap();
        assert_eq!(json, format!("\"{}\"", TypographyLevel::TitleSm.name()));
    }
}
