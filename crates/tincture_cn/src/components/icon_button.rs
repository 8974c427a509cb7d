//! Icon-only button styles
//!
//! Shares its variant table with [`Button`](super::Button); only the size
//! table, padding and defaults differ.

use tincture_theme::{Theme, ThemeColor};

use super::button::resolve_button_styles;
use crate::color::ColorRef;
use crate::size::{resolve_size, BaseSizeMap, SizeInput};
use crate::variant::{ResolvedStyle, Variant};
use crate::DISABLED_OPACITY;

const PADDING: f32 = 4.0;
const BORDER_RADIUS: f32 = 6.0;

/// IconButton props
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconButton {
    color: ColorRef,
    variant: Variant,
    size: SizeInput,
    disabled: bool,
    loading: bool,
}

impl Default for IconButton {
    fn default() -> Self {
        Self::new()
    }
}

impl IconButton {
    pub fn new() -> Self {
        Self {
            color: ThemeColor::Primary.into(),
            variant: Variant::Plain,
            size: SizeInput::default(),
            disabled: false,
            loading: false,
        }
    }

    pub fn color(mut self, color: impl Into<ColorRef>) -> Self {
        self.color = color.into();
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: impl Into<SizeInput>) -> Self {
        self.size = size.into();
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn resolve(&self, theme: &Theme) -> IconButtonStyle {
        let inactive = self.disabled || self.loading;
        IconButtonStyle {
            colors: *resolve_button_styles(theme, &self.color).get(self.variant),
            icon_size: resolve_size(theme, self.size, &BaseSizeMap::ICON_BUTTON),
            padding: PADDING,
            border_radius: BORDER_RADIUS,
            opacity: if inactive { DISABLED_OPACITY } else { 1.0 },
            content_opacity: if self.loading { 0.0 } else { 1.0 },
            interactive: !inactive,
        }
    }
}

/// Resolved icon button style
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconButtonStyle {
    pub colors: ResolvedStyle,
    pub icon_size: f32,
    pub padding: f32,
    pub border_radius: f32,
    pub opacity: f32,
    pub content_opacity: f32,
    pub interactive: bool,
}
