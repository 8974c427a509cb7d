//! Built-in theme presets.

use std::fmt::{Display, Formatter};

use crate::theme::{ColorScheme, Theme, ThemeBundle};
use crate::tokens::*;
use tincture_core::{Color, Fill, GradientKind, GradientSpec, GradientStop};

/// Built-in theme preset catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemePreset {
    /// Flat neutral surfaces with a blue primary.
    Base,
    /// Gradient backgrounds and surfaces.
    Aurora,
}

impl ThemePreset {
    /// Stable preset id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Aurora => "aurora",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Base => "Base",
            Self::Aurora => "Aurora",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [ThemePreset] {
        const PRESETS: [ThemePreset; 2] = [ThemePreset::Base, ThemePreset::Aurora];
        &PRESETS
    }

    /// Build a light/dark theme bundle for this preset.
    pub fn bundle(self) -> ThemeBundle {
        match self {
            Self::Base => ThemeBundle::new("Base", base_light(), base_dark()),
            Self::Aurora => ThemeBundle::new("Aurora", aurora_light(), aurora_dark()),
        }
    }
}

impl Display for ThemePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Convenience free function for ergonomic imports.
pub fn preset_bundle(preset: ThemePreset) -> ThemeBundle {
    preset.bundle()
}

/// Look up a built-in theme by its theme id (e.g. `baseDark`)
pub fn find_theme(id: &str) -> Option<Theme> {
    ThemePreset::all().iter().find_map(|preset| {
        let bundle = preset.bundle();
        [bundle.light, bundle.dark]
            .into_iter()
            .find(|theme| theme.id == id)
            .map(|theme| (*theme).clone())
    })
}

/// Ids of every built-in theme
pub fn theme_ids() -> Vec<String> {
    ThemePreset::all()
        .iter()
        .flat_map(|preset| {
            let bundle = preset.bundle();
            [bundle.light.id.clone(), bundle.dark.id.clone()]
        })
        .collect()
}

#[derive(Clone, Copy)]
struct Palette {
    primary: Color,
    neutral: Color,
    success: Color,
    info: Color,
    warning: Color,
    danger: Color,
    text: Color,
    text_secondary: Color,
    text_disabled: Color,
}

fn light_palette() -> Palette {
    Palette {
        primary: Color::from_hex(0x3366FF),
        neutral: Color::from_hex(0x6B7280),
        success: Color::from_hex(0x16A34A),
        info: Color::from_hex(0x0EA5E9),
        warning: Color::from_hex(0xD97706),
        danger: Color::from_hex(0xDC2626),
        text: Color::from_hex(0x111827),
        text_secondary: Color::from_hex(0x4B5563),
        text_disabled: Color::from_hex(0x9CA3AF),
    }
}

fn dark_palette() -> Palette {
    Palette {
        primary: Color::from_hex(0x3366FF),
        neutral: Color::from_hex(0x8A8F98),
        success: Color::from_hex(0x22C55E),
        info: Color::from_hex(0x38BDF8),
        warning: Color::from_hex(0xF59E0B),
        danger: Color::from_hex(0xEF4444),
        text: Color::from_hex(0xF3F4F6),
        text_secondary: Color::from_hex(0x9CA3AF),
        text_disabled: Color::from_hex(0x6B7280),
    }
}

fn build_colors(palette: Palette, background: Fill, surface: Fill) -> ColorTokens {
    ColorTokens {
        primary: palette.primary,
        neutral: palette.neutral,
        success: palette.success,
        info: palette.info,
        warning: palette.warning,
        danger: palette.danger,
        background,
        surface,
        common: CommonColors::default(),
    }
}

fn build_typography(palette: Palette) -> TypographyTokens {
    TypographyTokens {
        font_family: "System".to_string(),
        colors: TypographyColors {
            primary: palette.text,
            secondary: palette.text_secondary,
            accent: palette.primary,
            disabled: palette.text_disabled,
        },
    }
}

fn linear(angle_deg: f32, stops: &[(f32, u32)]) -> Fill {
    Fill::Gradient(GradientSpec::new(
        GradientKind::Linear { angle_deg },
        stops
            .iter()
            .map(|(offset, hex)| GradientStop::new(*offset, Color::from_hex(*hex))),
    ))
}

pub fn base_light() -> Theme {
    Theme::new("baseLight", "Base Light", ColorScheme::Light)
        .with_colors(build_colors(
            light_palette(),
            Fill::Solid(Color::from_hex(0xF5F7FA)),
            Fill::Solid(Color::WHITE),
        ))
        .with_typography(build_typography(light_palette()))
}

pub fn base_dark() -> Theme {
    Theme::new("baseDark", "Base Dark", ColorScheme::Dark)
        .with_colors(build_colors(
            dark_palette(),
            Fill::Solid(Color::from_hex(0x0F1115)),
            Fill::Solid(Color::from_hex(0x1A1D23)),
        ))
        .with_typography(build_typography(dark_palette()))
}

pub fn aurora_light() -> Theme {
    Theme::new("auroraLight", "Aurora Light", ColorScheme::Light)
        .with_colors(build_colors(
            light_palette(),
            linear(135.0, &[(0.0, 0xE0EAFC), (1.0, 0xCFDEF3)]),
            linear(180.0, &[(0.0, 0xFFFFFF), (1.0, 0xF0F4FF)]),
        ))
        .with_typography(build_typography(light_palette()))
}

pub fn aurora_dark() -> Theme {
    Theme::new("auroraDark", "Aurora Dark", ColorScheme::Dark)
        .with_colors(build_colors(
            dark_palette(),
            linear(135.0, &[(0.0, 0x0F2027), (0.5, 0x203A43), (1.0, 0x2C5364)]),
            linear(180.0, &[(0.0, 0x1E3C72), (1.0, 0x2A5298)]),
        ))
        .with_typography(build_typography(dark_palette()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_theme_by_id() {
        assert_eq!(find_theme("baseDark").map(|t| t.kind), Some(ColorScheme::Dark));
        assert_eq!(find_theme("auroraLight").map(|t| t.kind), Some(ColorScheme::Light));
        assert!(find_theme("nope").is_none());
    }

    #[test]
    fn test_theme_ids_are_unique() {
        let mut ids = theme_ids();
        let len = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), len);
        assert_eq!(len, ThemePreset::all().len() * 2);
    }

    #[test]
    fn test_aurora_surfaces_are_gradients() {
        let bundle = ThemePreset::Aurora.bundle();
        assert!(bundle.dark.colors.background.is_gradient());
        assert!(bundle.light.colors.surface.is_gradient());
    }
}
