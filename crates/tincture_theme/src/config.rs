//! Theme configuration file handling
//!
//! A theme file is TOML. Every field except `id` is optional; missing values
//! come from the theme named by `extends`, or from the base preset matching
//! `kind`.
//!
//! ```toml
//! id = "ocean"
//! name = "Ocean"
//! kind = "dark"
//! extends = "baseDark"
//! scale = 1.125
//!
//! [colors]
//! primary = "#0077b6"
//! background = "linear-gradient(180deg, #03045e, #023e8a)"
//!
//! [typography]
//! font_family = "Inter"
//!
//! [typography.colors]
//! secondary = "rgba(255, 255, 255, 0.7)"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tincture_core::{Color, Fill};
use tracing::{debug, warn};

use crate::error::{Result, ThemeError};
use crate::presets::{base_dark, base_light, find_theme};
use crate::theme::{ColorScheme, Theme};
use crate::tokens::{ThemeColor, TypographyColor};

/// Top-level theme file
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ThemeConfig {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ColorScheme>,
    /// Id of a built-in theme to start from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f32>,
    #[serde(default)]
    pub colors: ColorsConfig,
    #[serde(default)]
    pub typography: TypographyConfig,
}

/// `[colors]` table; values are CSS color strings
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ColorsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neutral: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub danger: Option<String>,
    /// Color or gradient expression
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// Color or gradient expression
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub white: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub black: Option<String>,
}

impl ColorsConfig {
    fn token(&self, token: ThemeColor) -> Option<&String> {
        match token {
            ThemeColor::Primary => self.primary.as_ref(),
            ThemeColor::Neutral => self.neutral.as_ref(),
            ThemeColor::Success => self.success.as_ref(),
            ThemeColor::Info => self.info.as_ref(),
            ThemeColor::Warning => self.warning.as_ref(),
            ThemeColor::Danger => self.danger.as_ref(),
        }
    }
}

/// `[typography]` table
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct TypographyConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default)]
    pub colors: TextColorsConfig,
}

/// `[typography.colors]` table
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct TextColorsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<String>,
}

impl TextColorsConfig {
    fn slot(&self, slot: TypographyColor) -> Option<&String> {
        match slot {
            TypographyColor::Primary => self.primary.as_ref(),
            TypographyColor::Secondary => self.secondary.as_ref(),
            TypographyColor::Accent => self.accent.as_ref(),
            TypographyColor::Disabled => self.disabled.as_ref(),
        }
    }
}

fn parse_color_field(field: &str, value: &str) -> Result<Color> {
    Color::parse(value).map_err(|source| ThemeError::Color {
        field: field.to_string(),
        source,
    })
}

fn parse_fill_field(field: &str, value: &str) -> Result<Fill> {
    Fill::parse(value).map_err(|source| ThemeError::Color {
        field: field.to_string(),
        source,
    })
}

impl ThemeConfig {
    /// Parse a TOML theme document
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    fn base_theme(&self) -> Theme {
        let fallback = || match self.kind.unwrap_or_default() {
            ColorScheme::Light => base_light(),
            ColorScheme::Dark => base_dark(),
        };

        match self.extends.as_deref() {
            Some(base) => find_theme(base).unwrap_or_else(|| {
                warn!(theme = %self.id, extends = base, "unknown base theme, using base preset");
                fallback()
            }),
            None => fallback(),
        }
    }
}

impl Theme {
    /// Build a theme from a parsed configuration
    pub fn from_config(config: &ThemeConfig) -> Result<Theme> {
        let mut theme = config.base_theme();

        theme.id = config.id.clone();
        if let Some(name) = &config.name {
            theme.name = name.clone();
        }
        if let Some(kind) = config.kind {
            theme.kind = kind;
        }
        if let Some(scale) = config.scale {
            theme = theme.with_scale(scale)?;
        }

        for token in ThemeColor::ALL {
            if let Some(value) = config.colors.token(token) {
                *theme.colors.get_mut(token) = parse_color_field(token.name(), value)?;
            }
        }
        if let Some(value) = &config.colors.background {
            theme.colors.background = parse_fill_field("background", value)?;
        }
        if let Some(value) = &config.colors.surface {
            theme.colors.surface = parse_fill_field("surface", value)?;
        }
        if let Some(value) = &config.colors.white {
            theme.colors.common.white = parse_color_field("white", value)?;
        }
        if let Some(value) = &config.colors.black {
            theme.colors.common.black = parse_color_field("black", value)?;
        }

        if let Some(family) = &config.typography.font_family {
            theme.typography.font_family = family.clone();
        }
        for slot in TypographyColor::ALL {
            if let Some(value) = config.typography.colors.slot(slot) {
                let field = format!("typography.{}", slot.name());
                *theme.typography.colors.get_mut(slot) = parse_color_field(&field, value)?;
            }
        }

        debug!(id = %theme.id, kind = ?theme.kind, "built theme from config");
        Ok(theme)
    }
}

impl From<&Theme> for ThemeConfig {
    /// Full snapshot of a theme; every field is written out
    fn from(theme: &Theme) -> Self {
        let c = &theme.colors;
        let text = &theme.typography.colors;
        Self {
            id: theme.id.clone(),
            name: Some(theme.name.clone()),
            kind: Some(theme.kind),
            extends: None,
            scale: Some(theme.scale),
            colors: ColorsConfig {
                primary: Some(c.primary.to_string()),
                neutral: Some(c.neutral.to_string()),
                success: Some(c.success.to_string()),
                info: Some(c.info.to_string()),
                warning: Some(c.warning.to_string()),
                danger: Some(c.danger.to_string()),
                background: Some(c.background.to_string()),
                surface: Some(c.surface.to_string()),
                white: Some(c.common.white.to_string()),
                black: Some(c.common.black.to_string()),
            },
            typography: TypographyConfig {
                font_family: Some(theme.typography.font_family.clone()),
                colors: TextColorsConfig {
                    primary: Some(text.primary.to_string()),
                    secondary: Some(text.secondary.to_string()),
                    accent: Some(text.accent.to_string()),
                    disabled: Some(text.disabled.to_string()),
                },
            },
        }
    }
}

/// Read and build a theme from a TOML file
pub fn load_theme_file(path: impl AsRef<Path>) -> Result<Theme> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let config = ThemeConfig::from_toml(&content)?;
    debug!(path = %path.display(), id = %config.id, "loaded theme file");
    Theme::from_config(&config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_kind_default() {
        let config = ThemeConfig::from_toml("id = \"mine\"\nkind = \"light\"").unwrap();
        let theme = Theme::from_config(&config).unwrap();
        assert_eq!(theme.id, "mine");
        assert_eq!(theme.kind, ColorScheme::Light);
        assert_eq!(theme.colors, base_light().colors);
    }

    #[test]
    fn test_overrides_apply_on_top_of_extends() {
        let toml = r##"
            id = "ocean"
            extends = "baseDark"
            scale = 1.25

            [colors]
            primary = "#0077b6"
            background = "linear-gradient(180deg, #03045e, #023e8a)"

            [typography]
            font_family = "Inter"

            [typography.colors]
            secondary = "rgba(255, 255, 255, 0.5)"
        "##;
        let theme = Theme::from_config(&ThemeConfig::from_toml(toml).unwrap()).unwrap();

        assert_eq!(theme.kind, ColorScheme::Dark);
        assert_eq!(theme.scale, 1.25);
        assert_eq!(theme.colors.primary, Color::from_hex(0x0077B6));
        assert_eq!(theme.colors.danger, base_dark().colors.danger);
        assert!(theme.colors.background.is_gradient());
        assert_eq!(theme.typography.font_family, "Inter");
        assert_eq!(theme.typography.colors.secondary.to_rgba8(), [255, 255, 255, 128]);
    }

    #[test]
    fn test_unknown_extends_falls_back() {
        let config = ThemeConfig::from_toml("id = \"x\"\nextends = \"missing\"").unwrap();
        let theme = Theme::from_config(&config).unwrap();
        assert_eq!(theme.colors, base_dark().colors);
    }

    #[test]
    fn test_invalid_color_names_field() {
        let config = ThemeConfig::from_toml("id = \"x\"\n[colors]\nwarning = \"#zzz\"").unwrap();
        match Theme::from_config(&config) {
            Err(ThemeError::Color { field, .. }) => assert_eq!(field, "warning"),
            other => panic!("expected color error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_scale() {
        let config = ThemeConfig::from_toml("id = \"x\"\nscale = 0.0").unwrap();
        assert!(matches!(
            Theme::from_config(&config),
            Err(ThemeError::InvalidScale(_))
        ));
    }

    #[test]
    fn test_toml_syntax_error() {
        assert!(matches!(
            ThemeConfig::from_toml("id = "),
            Err(ThemeError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            load_theme_file("/definitely/not/here.toml"),
            Err(ThemeError::Io(_))
        ));
    }
}
