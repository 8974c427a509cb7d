//! Variant model and resolved style records
//!
//! Every component family maps each of its variants to a style record. The
//! mapping is a struct with one field per variant and a `get` that matches
//! exhaustively, so an unknown variant cannot reach a resolver.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tincture_core::Color;

use crate::error::StyleError;

macro_rules! named_enum {
    ($ty:ident { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            pub fn name(self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $ty {
            type Err = StyleError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.name() == s)
                    .ok_or_else(|| StyleError::UnknownVariant(s.to_string()))
            }
        }
    };
}

/// Core visual treatment shared by every family
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Solid,
    Outlined,
    Plain,
    Soft,
}

named_enum!(Variant {
    Solid => "solid",
    Outlined => "outlined",
    Plain => "plain",
    Soft => "soft",
});

/// Paper adds a theme-surface `elevation` treatment
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaperVariant {
    Solid,
    Outlined,
    Plain,
    Soft,
    #[default]
    Elevation,
}

named_enum!(PaperVariant {
    Solid => "solid",
    Outlined => "outlined",
    Plain => "plain",
    Soft => "soft",
    Elevation => "elevation",
});

impl From<Variant> for PaperVariant {
    fn from(variant: Variant) -> Self {
        match variant {
            Variant::Solid => PaperVariant::Solid,
            Variant::Outlined => PaperVariant::Outlined,
            Variant::Plain => PaperVariant::Plain,
            Variant::Soft => PaperVariant::Soft,
        }
    }
}

/// Typography adds an unstyled `none` treatment
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypographyVariant {
    Solid,
    Outlined,
    Plain,
    Soft,
    #[default]
    None,
}

named_enum!(TypographyVariant {
    Solid => "solid",
    Outlined => "outlined",
    Plain => "plain",
    Soft => "soft",
    None => "none",
});

impl From<Variant> for TypographyVariant {
    fn from(variant: Variant) -> Self {
        match variant {
            Variant::Solid => TypographyVariant::Solid,
            Variant::Outlined => TypographyVariant::Outlined,
            Variant::Plain => TypographyVariant::Plain,
            Variant::Soft => TypographyVariant::Soft,
        }
    }
}

/// Divider line treatment
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DividerVariant {
    #[default]
    Solid,
    Dashed,
    Dotted,
    Double,
}

named_enum!(DividerVariant {
    Solid => "solid",
    Dashed => "dashed",
    Dotted => "dotted",
    Double => "double",
});

/// Border line style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

/// A border
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
    pub style: LineStyle,
}

impl Border {
    /// 1px solid border
    pub fn hairline(color: Color) -> Self {
        Self {
            width: 1.0,
            color,
            style: LineStyle::Solid,
        }
    }
}

/// Concrete style for one variant
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedStyle {
    pub background: Color,
    pub border: Option<Border>,
    /// Foreground: text, or the icon for checkbox-like controls
    pub text: Color,
}

impl ResolvedStyle {
    pub fn new(background: Color, text: Color) -> Self {
        Self {
            background,
            border: None,
            text,
        }
    }

    /// Transparent background, no border
    pub fn transparent(text: Color) -> Self {
        Self::new(Color::TRANSPARENT, text)
    }

    pub fn with_border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    pub fn border_width(&self) -> f32 {
        self.border.map(|b| b.width).unwrap_or(0.0)
    }
}

/// One style record per core variant
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VariantStyles<T> {
    pub solid: T,
    pub outlined: T,
    pub plain: T,
    pub soft: T,
}

impl<T> VariantStyles<T> {
    /// Style for a variant
    pub fn get(&self, variant: Variant) -> &T {
        match variant {
            Variant::Solid => &self.solid,
            Variant::Outlined => &self.outlined,
            Variant::Plain => &self.plain,
            Variant::Soft => &self.soft,
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> VariantStyles<U> {
        VariantStyles {
            solid: f(self.solid),
            outlined: f(self.outlined),
            plain: f(self.plain),
            soft: f(self.soft),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_names_parse() {
        for v in Variant::ALL {
            assert_eq!(v.name().parse::<Variant>(), Ok(*v));
        }
        assert_eq!("elevation".parse::<PaperVariant>(), Ok(PaperVariant::Elevation));
        assert_eq!("none".parse::<TypographyVariant>(), Ok(TypographyVariant::None));
        assert_eq!(
            "shiny".parse::<Variant>(),
            Err(StyleError::UnknownVariant("shiny".to_string()))
        );
    }

    #[test]
    fn test_family_defaults() {
        assert_eq!(PaperVariant::default(), PaperVariant::Elevation);
        assert_eq!(TypographyVariant::default(), TypographyVariant::None);
        assert_eq!(DividerVariant::default(), DividerVariant::Solid);
    }

    #[test]
    fn test_variant_styles_get_matches_fields() {
        let styles = VariantStyles {
            solid: 1,
            outlined: 2,
            plain: 3,
            soft: 4,
        };
        assert_eq!(*styles.get(Variant::Outlined), 2);
        assert_eq!(*styles.map(|v| v * 10).get(Variant::Soft), 40);
    }

    #[test]
    fn test_border_width() {
        assert_eq!(ResolvedStyle::transparent(Color::RED).border_width(), 0.0);
        let bordered = ResolvedStyle::transparent(Color::RED).with_border(Border::hairline(Color::RED));
        assert_eq!(bordered.border_width(), 1.0);
    }
}
