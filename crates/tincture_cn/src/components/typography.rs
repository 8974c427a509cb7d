//! Typography styles

use tincture_theme::{LevelStyle, Theme, ThemeColor, TypographyColor, TypographyLevel};

use crate::color::{contrast_text, resolve_color, resolve_typography_color, ColorRef, TextColorRef};
use crate::variant::{Border, ResolvedStyle, TypographyVariant, Variant, VariantStyles};

/// Background alpha of the `soft` variant
pub const SOFT_ALPHA: f32 = 0.4;

/// Typography variant table: the core four plus `none`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TypographyStyles {
    pub none: ResolvedStyle,
    pub core: VariantStyles<ResolvedStyle>,
}

impl TypographyStyles {
    pub fn get(&self, variant: TypographyVariant) -> &ResolvedStyle {
        match variant {
            TypographyVariant::None => &self.none,
            TypographyVariant::Solid => self.core.get(Variant::Solid),
            TypographyVariant::Outlined => self.core.get(Variant::Outlined),
            TypographyVariant::Plain => self.core.get(Variant::Plain),
            TypographyVariant::Soft => self.core.get(Variant::Soft),
        }
    }
}

/// Build the typography variant table
///
/// `color` drives the four core variants; `text_color` is used only by
/// `none`.
pub fn resolve_typography_styles(
    theme: &Theme,
    color: &ColorRef,
    text_color: &TextColorRef,
) -> TypographyStyles {
    let resolved = resolve_color(color, theme);

    TypographyStyles {
        none: ResolvedStyle::transparent(resolve_typography_color(text_color, theme)),
        core: VariantStyles {
            solid: ResolvedStyle::new(resolved, contrast_text(resolved, theme)),
            outlined: ResolvedStyle::transparent(resolved).with_border(Border::hairline(resolved)),
            plain: ResolvedStyle::transparent(resolved),
            soft: ResolvedStyle::new(resolved.with_alpha(SOFT_ALPHA), resolved),
        },
    }
}

/// Typography props
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Typography {
    color: ColorRef,
    text_color: TextColorRef,
    variant: TypographyVariant,
    level: Option<TypographyLevel>,
    weight: Option<u16>,
}

impl Default for Typography {
    fn default() -> Self {
        Self::new()
    }
}

impl Typography {
    pub fn new() -> Self {
        Self {
            color: ThemeColor::Primary.into(),
            text_color: TypographyColor::Primary.into(),
            variant: TypographyVariant::None,
            level: None,
            weight: None,
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

    pub fn variant(mut self, variant: impl Into<TypographyVariant>) -> Self {
        self.variant = variant.into();
        self
    }

    /// Apply a level's metrics; unset inherits from the parent text
    pub fn level(mut self, level: TypographyLevel) -> Self {
        self.level = Some(level);
        self
    }

    /// Font weight; takes precedence over the level's weight
    pub fn weight(mut self, weight: u16) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn resolve(&self, theme: &Theme) -> TypographyStyle {
        let metrics = self.level.map(|level| theme.typography.level(level));

        TypographyStyle {
            colors: *resolve_typography_styles(theme, &self.color, &self.text_color)
                .get(self.variant),
            font_size: metrics.map(|m| m.font_size),
            line_height: metrics.as_ref().map(LevelStyle::line_height_px),
            font_weight: self.weight.or(metrics.map(|m| m.font_weight)),
        }
    }
}

/// Resolved typography style; unset metrics inherit
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TypographyStyle {
    pub colors: ResolvedStyle,
    pub font_size: Option<f32>,
    /// Pixels
    pub line_height: Option<f32>,
    pub font_weight: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tincture_core::Color;
    use tincture_theme::presets::{base_dark, base_light};

    #[test]
    fn test_default_is_plain_text() {
        let theme = base_dark();
        let style = Typography::new().resolve(&theme);
        assert_eq!(style.colors.background, Color::TRANSPARENT);
        assert_eq!(style.colors.text, theme.typography.colors.primary);
        assert_eq!(style.font_size, None);
        assert_eq!(style.font_weight, None);
    }

    #[test]
    fn test_none_uses_text_color() {
        let theme = base_dark();
        let secondary = Typography::new()
            .text_color(TypographyColor::Secondary)
            .resolve(&theme);
        assert_eq!(secondary.colors.text, theme.typography.colors.secondary);

        let inherit = Typography::new().text_color(TextColorRef::Inherit).resolve(&theme);
        assert_eq!(inherit.colors.text, theme.typography.colors.primary);

        let literal = Typography::new()
            .text_color(ColorRef::Literal(Color::RED))
            .resolve(&theme);
        assert_eq!(literal.colors.text, Color::RED);
    }

    #[test]
    fn test_core_variants() {
        let theme = base_light();
        let warning = theme.colors.warning;
        let styles =
            resolve_typography_styles(&theme, &ThemeColor::Warning.into(), &TextColorRef::Inherit);

        assert_eq!(styles.core.solid.background, warning);
        assert_eq!(styles.core.solid.text, contrast_text(warning, &theme));
        assert_eq!(styles.core.outlined.border_width(), 1.0);
        assert_eq!(styles.core.outlined.text, warning);
        assert_eq!(styles.core.soft.background, warning.with_alpha(0.4));
        assert_eq!(styles.core.plain.text, warning);
    }

    #[test]
    fn test_level_and_weight() {
        let theme = base_dark();
        let body = Typography::new().level(TypographyLevel::BodyMd).resolve(&theme);
        assert_eq!(body.font_size, Some(16.0));
        assert_eq!(body.line_height, Some(24.0));
        assert_eq!(body.font_weight, Some(400));

        let bold = Typography::new()
            .level(TypographyLevel::BodyMd)
            .weight(700)
            .resolve(&theme);
        assert_eq!(bold.font_weight, Some(700));
    }
}
