//! Divider styles
//!
//! A divider is two lines with optional text between them. `inset` stops
//! one of the lines from growing so the text sits at the start or end.

use serde::{Deserialize, Serialize};
use tincture_core::Color;
use tincture_theme::{Theme, ThemeColor, TypographyLevel};

use crate::color::{resolve_typography_color, TextColorRef};
use crate::group::Orientation;
use crate::variant::{Border, DividerVariant, LineStyle};

/// Shortest a line may shrink along its axis
pub const MIN_LINE_LENGTH: f32 = 32.0;

const MARGIN: f32 = 8.0;
const TEXT_PADDING: f32 = 8.0;
const DOUBLE_THICKNESS: f32 = 3.0;

/// Which line stays at its minimum length
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DividerInset {
    #[default]
    None,
    Start,
    End,
}

/// Sides of a line that carry its border
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineEdges {
    None,
    /// Left edge when vertical, top edge when horizontal
    Leading,
    /// Both edges across the line's thickness
    Both,
}

/// One divider line
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DividerLine {
    /// Cross-axis size
    pub thickness: f32,
    pub min_length: f32,
    pub background: Color,
    pub border: Option<Border>,
    pub edges: LineEdges,
    /// Take the free space along the main axis
    pub grow: bool,
}

/// Line style for a variant and orientation
///
/// `solid` is a filled 1px bar; `dashed` and `dotted` draw a 1px border on
/// the leading edge; `double` is a 3px bar with a border on both edges.
pub fn resolve_divider_line(variant: DividerVariant, color: Color) -> DividerLine {
    let base = DividerLine {
        thickness: 1.0,
        min_length: MIN_LINE_LENGTH,
        background: Color::TRANSPARENT,
        border: None,
        edges: LineEdges::None,
        grow: false,
    };
    let bordered = |style: LineStyle| Border {
        width: 1.0,
        color,
        style,
    };

    match variant {
        DividerVariant::Solid => DividerLine {
            background: color,
            ..base
        },
        DividerVariant::Dashed => DividerLine {
            border: Some(bordered(LineStyle::Dashed)),
            edges: LineEdges::Leading,
            ..base
        },
        DividerVariant::Dotted => DividerLine {
            border: Some(bordered(LineStyle::Dotted)),
            edges: LineEdges::Leading,
            ..base
        },
        DividerVariant::Double => DividerLine {
            thickness: DOUBLE_THICKNESS,
            border: Some(bordered(LineStyle::Solid)),
            edges: LineEdges::Both,
            ..base
        },
    }
}

/// Text between the lines
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DividerText {
    pub color: Color,
    /// Padding on both sides along the main axis
    pub padding: f32,
    pub font_size: f32,
}

/// Divider props
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Divider {
    orientation: Orientation,
    inset: DividerInset,
    line_color: TextColorRef,
    text_color: TextColorRef,
    variant: DividerVariant,
    has_text: bool,
}

impl Default for Divider {
    fn default() -> Self {
        Self::new()
    }
}

impl Divider {
    pub fn new() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            inset: DividerInset::None,
            line_color: ThemeColor::Neutral.into(),
            text_color: ThemeColor::Neutral.into(),
            variant: DividerVariant::Solid,
            has_text: false,
        }
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn inset(mut self, inset: DividerInset) -> Self {
        self.inset = inset;
        self
    }

    /// Line color; see [`TextColorRef::parse_prefer_theme`] for strings
    pub fn line_color(mut self, color: impl Into<TextColorRef>) -> Self {
        self.line_color = color.into();
        self
    }

    pub fn text_color(mut self, color: impl Into<TextColorRef>) -> Self {
        self.text_color = color.into();
        self
    }

    pub fn variant(mut self, variant: DividerVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Whether text sits between the lines
    pub fn with_text(mut self, has_text: bool) -> Self {
        self.has_text = has_text;
        self
    }

    pub fn resolve(&self, theme: &Theme) -> DividerStyle {
        let line_color = resolve_typography_color(&self.line_color, theme);
        let line = resolve_divider_line(self.variant, line_color);

        DividerStyle {
            orientation: self.orientation,
            margin: MARGIN,
            leading: DividerLine {
                grow: self.inset != DividerInset::Start,
                ..line
            },
            trailing: DividerLine {
                grow: self.inset != DividerInset::End,
                ..line
            },
            text: self.has_text.then(|| DividerText {
                color: resolve_typography_color(&self.text_color, theme),
                padding: TEXT_PADDING,
                font_size: theme.typography.level(TypographyLevel::BodyMd).font_size,
            }),
        }
    }
}

/// Resolved divider style
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DividerStyle {
    pub orientation: Orientation,
    /// Margin on both sides across the main axis
    pub margin: f32,
    pub leading: DividerLine,
    pub trailing: DividerLine,
    pub text: Option<DividerText>,
}
