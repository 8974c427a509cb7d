//! Theme record and light/dark bundles

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ThemeError};
use crate::tokens::{ColorTokens, ThemeColor, TypographyColor, TypographyTokens};
use tincture_core::Color;

/// Color scheme (light or dark mode)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    #[default]
    Dark,
}

impl ColorScheme {
    /// Toggle between light and dark
    pub fn toggle(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, ColorScheme::Dark)
    }
}

/// A complete theme
///
/// Themes are immutable once built and are shared behind `Arc`; switching
/// themes replaces the whole record.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub id: String,
    pub name: String,
    pub kind: ColorScheme,
    pub colors: ColorTokens,
    pub typography: TypographyTokens,
    /// Global size multiplier applied by every size lookup
    pub scale: f32,
}

impl Theme {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: ColorScheme) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            colors: ColorTokens::default(),
            typography: TypographyTokens::default(),
            scale: 1.0,
        }
    }

    pub fn with_colors(mut self, colors: ColorTokens) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_typography(mut self, typography: TypographyTokens) -> Self {
        self.typography = typography;
        self
    }

    /// Set the global size multiplier; must be finite and positive
    pub fn with_scale(mut self, scale: f32) -> Result<Self> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(ThemeError::InvalidScale(scale));
        }
        self.scale = scale;
        Ok(self)
    }

    pub fn is_dark(&self) -> bool {
        self.kind.is_dark()
    }

    /// Semantic color by token
    pub fn color(&self, token: ThemeColor) -> Color {
        self.colors.get(token)
    }

    /// Text color by slot
    pub fn text_color(&self, slot: TypographyColor) -> Color {
        self.typography.colors.get(slot)
    }
}

impl Default for Theme {
    fn default() -> Self {
        crate::presets::base_dark()
    }
}

/// A light/dark theme pair
#[derive(Clone, Debug)]
pub struct ThemeBundle {
    pub name: String,
    pub light: Arc<Theme>,
    pub dark: Arc<Theme>,
}

impl ThemeBundle {
    pub fn new(name: impl Into<String>, light: Theme, dark: Theme) -> Self {
        Self {
            name: name.into(),
            light: Arc::new(light),
            dark: Arc::new(dark),
        }
    }

    /// Theme for a color scheme
    pub fn for_scheme(&self, scheme: ColorScheme) -> Arc<Theme> {
        match scheme {
            ColorScheme::Light => Arc::clone(&self.light),
            ColorScheme::Dark => Arc::clone(&self.dark),
        }
    }
}

impl Default for ThemeBundle {
    fn default() -> Self {
        crate::presets::ThemePreset::Base.bundle()
    }
}
