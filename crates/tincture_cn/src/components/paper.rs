//! Paper surface styles

use tincture_core::{Color, Fill};
use tincture_theme::{dynamic_elevation, Shadow, Theme, ThemeColor};

use crate::color::{resolve_color, ColorRef};
use crate::variant::{Border, PaperVariant, Variant, VariantStyles};

/// Alpha of a translucent gradient surface and of the `soft` background
pub const TRANSLUCENT_ALPHA: f32 = 0.2;
/// Alpha of the `outlined` border
pub const OUTLINE_ALPHA: f32 = 0.3;

/// Resolved paper style
#[derive(Clone, Debug, PartialEq)]
pub struct PaperStyle {
    pub background: Fill,
    pub border: Option<Border>,
    pub shadow: Option<Shadow>,
}

impl PaperStyle {
    fn flat(background: Color) -> Self {
        Self {
            background: Fill::Solid(background),
            border: None,
            shadow: None,
        }
    }
}

/// Paper variant table: the core four plus `elevation`
#[derive(Clone, Debug, PartialEq)]
pub struct PaperStyles {
    pub elevation: PaperStyle,
    pub core: VariantStyles<PaperStyle>,
}

impl PaperStyles {
    pub fn get(&self, variant: PaperVariant) -> &PaperStyle {
        match variant {
            PaperVariant::Elevation => &self.elevation,
            PaperVariant::Solid => self.core.get(Variant::Solid),
            PaperVariant::Outlined => self.core.get(Variant::Outlined),
            PaperVariant::Plain => self.core.get(Variant::Plain),
            PaperVariant::Soft => self.core.get(Variant::Soft),
        }
    }
}

/// Background of the `elevation` variant
///
/// A gradient theme surface is used as-is when `non_translucent`, otherwise
/// at 20% alpha. A solid surface gets the elevation overlay.
fn elevation_background(surface: &Fill, elevation: u8, non_translucent: bool) -> Fill {
    match surface {
        Fill::Gradient(g) if non_translucent => Fill::Gradient(g.clone()),
        Fill::Gradient(g) => Fill::Gradient(g.with_alpha(TRANSLUCENT_ALPHA)),
        Fill::Solid(c) => Fill::Solid(dynamic_elevation(*c, elevation)),
    }
}

pub fn resolve_paper_styles(
    theme: &Theme,
    color: &ColorRef,
    elevation: u8,
    non_translucent: bool,
) -> PaperStyles {
    let resolved = resolve_color(color, theme);

    PaperStyles {
        elevation: PaperStyle {
            background: elevation_background(&theme.colors.surface, elevation, non_translucent),
            border: None,
            shadow: Some(Shadow::elevation(elevation)),
        },
        core: VariantStyles {
            solid: PaperStyle::flat(resolved),
            outlined: PaperStyle {
                border: Some(Border::hairline(resolved.with_alpha(OUTLINE_ALPHA))),
                ..PaperStyle::flat(Color::TRANSPARENT)
            },
            plain: PaperStyle::flat(Color::TRANSPARENT),
            soft: PaperStyle::flat(resolved.with_alpha(TRANSLUCENT_ALPHA)),
        },
    }
}

/// Paper props
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Paper {
    color: ColorRef,
    variant: PaperVariant,
    elevation: u8,
    non_translucent: bool,
}

impl Default for Paper {
    fn default() -> Self {
        Self::new()
    }
}

impl Paper {
    pub fn new() -> Self {
        Self {
            color: ThemeColor::Neutral.into(),
            variant: PaperVariant::Elevation,
            elevation: 0,
            non_translucent: false,
        }
    }

    pub fn color(mut self, color: impl Into<ColorRef>) -> Self {
        self.color = color.into();
        self
    }

    pub fn variant(mut self, variant: impl Into<PaperVariant>) -> Self {
        self.variant = variant.into();
        self
    }

    pub fn elevation(mut self, elevation: u8) -> Self {
        self.elevation = elevation;
        self
    }

    /// Keep gradient surfaces opaque
    pub fn non_translucent(mut self, non_translucent: bool) -> Self {
        self.non_translucent = non_translucent;
        self
    }

    pub fn resolve(&self, theme: &Theme) -> PaperStyle {
        resolve_paper_styles(theme, &self.color, self.elevation, self.non_translucent)
            .get(self.variant)
            .clone()
    }
}
