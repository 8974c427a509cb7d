//! Text input root styles

use tincture_core::Color;
use tincture_theme::{Theme, ThemeColor};

use crate::color::{resolve_color, resolve_typography_color, ColorRef, TextColorRef, CONTRAST_DARKEN};
use crate::size::{resolve_size, BaseSizeMap, SizeInput};
use crate::variant::{Border, ResolvedStyle, Variant, VariantStyles};
use crate::DISABLED_OPACITY;

/// Background alpha of the `soft` variant
pub const SOFT_ALPHA: f32 = 0.1;

const WIDTH_FACTOR: f32 = 16.0;
const MIN_HEIGHT_FACTOR: f32 = 2.2;
const LINE_HEIGHT: f32 = 1.2;
const GAP: f32 = 6.0;
const BORDER_RADIUS: f32 = 8.0;

/// Variant table for an input
///
/// `error` swaps the color for the theme's danger color. `text_color`
/// applies to `outlined` and `plain`; `solid` uses the primary text color
/// on dark fills and a darkened fill otherwise.
pub fn resolve_input_styles(
    theme: &Theme,
    color: &ColorRef,
    text_color: &TextColorRef,
    error: bool,
) -> VariantStyles<ResolvedStyle> {
    let active = if error {
        theme.colors.danger
    } else {
        resolve_color(color, theme)
    };
    let text = resolve_typography_color(text_color, theme);
    let solid_text = if active.is_dark() {
        theme.typography.colors.primary
    } else {
        active.darken(CONTRAST_DARKEN)
    };

    VariantStyles {
        solid: ResolvedStyle::new(active, solid_text),
        outlined: ResolvedStyle::transparent(text).with_border(Border::hairline(active)),
        plain: ResolvedStyle::transparent(text),
        soft: ResolvedStyle::new(active.with_alpha(SOFT_ALPHA), active),
    }
}

/// Input width
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputWidth {
    Fixed(f32),
    /// Fill and grow into the container
    Full,
}

/// InputRoot props
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputRoot {
    color: ColorRef,
    text_color: TextColorRef,
    variant: Variant,
    size: SizeInput,
    error: bool,
    full_width: bool,
    disabled: bool,
}

impl Default for InputRoot {
    fn default() -> Self {
        Self::new()
    }
}

impl InputRoot {
    pub fn new() -> Self {
        Self {
            color: ThemeColor::Neutral.into(),
            text_color: TextColorRef::Inherit,
            variant: Variant::Outlined,
            size: SizeInput::default(),
            error: false,
            full_width: false,
            disabled: false,
        }
    }

    pub fn color(mut self, color: impl Into<ColorRef>) -> Self {
        self.color = color.into();
        self
    }

    pub fn text_color(mut self, text_color: impl Into<TextColorRef>) -> Self {
        self.text_color = text_color.into();
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Font size token or pixels
    pub fn size(mut self, size: impl Into<SizeInput>) -> Self {
        self.size = size.into();
        self
    }

    pub fn error(mut self, error: bool) -> Self {
        self.error = error;
        self
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn resolve(&self, theme: &Theme) -> InputRootStyle {
        let font_size = resolve_size(theme, self.size, &BaseSizeMap::INPUT_ROOT);
        let colors =
            *resolve_input_styles(theme, &self.color, &self.text_color, self.error).get(self.variant);

        InputRootStyle {
            colors,
            width: if self.full_width {
                InputWidth::Full
            } else {
                InputWidth::Fixed(font_size * WIDTH_FACTOR)
            },
            font_size,
            line_height: LINE_HEIGHT,
            min_height: font_size * MIN_HEIGHT_FACTOR,
            padding_vertical: font_size * 0.4,
            padding_horizontal: font_size * 0.6,
            gap: GAP,
            border_radius: BORDER_RADIUS,
            opacity: if self.disabled { DISABLED_OPACITY } else { 1.0 },
            placeholder_color: theme.typography.colors.secondary,
        }
    }
}

/// Resolved input style
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputRootStyle {
    pub colors: ResolvedStyle,
    pub width: InputWidth,
    pub font_size: f32,
    /// Multiplier of `font_size`
    pub line_height: f32,
    pub min_height: f32,
    pub padding_vertical: f32,
    pub padding_horizontal: f32,
    /// Space between decorators and text
    pub gap: f32,
    pub border_radius: f32,
    pub opacity: f32,
    pub placeholder_color: Color,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::size::Size;
    use tincture_theme::presets::{base_dark, base_light};
    use tincture_theme::TypographyColor;

    #[test]
    fn test_defaults() {
        let theme = base_dark();
        let style = InputRoot::new().resolve(&theme);

        assert_eq!(style.colors.background, Color::TRANSPARENT);
        assert_eq!(style.colors.border, Some(Border::hairline(theme.colors.neutral)));
        assert_eq!(style.colors.text, theme.typography.colors.primary);
        assert_eq!(style.font_size, 14.0);
        assert_eq!(style.width, InputWidth::Fixed(224.0));
        assert!((style.min_height - 30.8).abs() < 1e-4);
        assert_eq!(style.gap, 6.0);
        assert_eq!(style.border_radius, 8.0);
    }

    #[test]
    fn test_error_uses_danger() {
        let theme = base_dark();
        let style = InputRoot::new()
            .color(ThemeColor::Success)
            .error(true)
            .resolve(&theme);
        assert_eq!(style.colors.border, Some(Border::hairline(theme.colors.danger)));

        let soft = InputRoot::new().variant(Variant::Soft).error(true).resolve(&theme);
        assert_eq!(soft.colors.background, theme.colors.danger.with_alpha(0.1));
        assert_eq!(soft.colors.text, theme.colors.danger);
    }

    #[test]
    fn test_solid_text_follows_darkness() {
        let theme = base_light();
        let dark = resolve_input_styles(
            &theme,
            &Color::from_hex(0x1A237E).into(),
            &TextColorRef::Inherit,
            false,
        );
        assert_eq!(dark.solid.text, theme.typography.colors.primary);

        let pale = Color::from_hex(0xFFF59D);
        let light = resolve_input_styles(&theme, &pale.into(), &TextColorRef::Inherit, false);
        assert_eq!(light.solid.text, pale.darken(0.7));
    }

    #[test]
    fn test_text_color_and_size() {
        let theme = base_light();
        let style = InputRoot::new()
            .variant(Variant::Plain)
            .text_color(TypographyColor::Accent)
            .size(Size::Lg)
            .full_width(true)
            .disabled(true)
            .resolve(&theme);

        assert_eq!(style.colors.text, theme.typography.colors.accent);
        assert_eq!(style.width, InputWidth::Full);
        assert_eq!(style.font_size, 16.0);
        assert_eq!(style.opacity, 0.5);
        assert_eq!(style.placeholder_color, theme.typography.colors.secondary);
    }
}
