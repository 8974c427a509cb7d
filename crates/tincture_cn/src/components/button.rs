//! Button styles
//!
//! # Example
//!
//! ```rust
//! use tincture_cn::prelude::*;
//! use tincture_theme::presets::base_dark;
//!
//! let theme = base_dark();
//! let style = Button::new().size(Size::Lg).loading(true).resolve(&theme);
//!
//! assert_eq!(style.font_size, 16.0);
//! assert!(!style.interactive);
//! assert_eq!(style.content_opacity, 0.0);
//! ```

use tincture_theme::{Theme, ThemeColor};

use crate::color::{contrast_text, resolve_color, ColorRef};
use crate::size::{resolve_size, BaseSizeMap, SizeInput};
use crate::variant::{Border, ResolvedStyle, Variant, VariantStyles};
use crate::DISABLED_OPACITY;

/// Background alpha of the `soft` variant
pub const SOFT_ALPHA: f32 = 0.15;

const BORDER_RADIUS: f32 = 6.0;
const PADDING_FACTOR: f32 = 0.6;
const LINE_HEIGHT: f32 = 1.2;

/// Variant table shared by Button and IconButton
pub fn resolve_button_styles(theme: &Theme, color: &ColorRef) -> VariantStyles<ResolvedStyle> {
    let resolved = resolve_color(color, theme);

    VariantStyles {
        solid: ResolvedStyle::new(resolved, contrast_text(resolved, theme)),
        outlined: ResolvedStyle::transparent(resolved).with_border(Border::hairline(resolved)),
        plain: ResolvedStyle::transparent(resolved),
        soft: ResolvedStyle::new(resolved.with_alpha(SOFT_ALPHA), resolved),
    }
}

/// Button props
#[derive(Clone, Debug, PartialEq)]
pub struct Button {
    color: ColorRef,
    variant: Variant,
    size: SizeInput,
    disabled: bool,
    loading: bool,
    loading_label: String,
}

impl Default for Button {
    fn default() -> Self {
        Self::new()
    }
}

impl Button {
    pub fn new() -> Self {
        Self {
            color: ThemeColor::Primary.into(),
            variant: Variant::Solid,
            size: SizeInput::default(),
            disabled: false,
            loading: false,
            loading_label: "Loading...".to_string(),
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

    /// Show the loading indicator; a loading button is also disabled
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Text shown over the button while loading
    pub fn loading_label(mut self, label: impl Into<String>) -> Self {
        self.loading_label = label.into();
        self
    }

    pub fn resolve(&self, theme: &Theme) -> ButtonStyle {
        let font_size = resolve_size(theme, self.size, &BaseSizeMap::BUTTON);
        let inactive = self.disabled || self.loading;

        ButtonStyle {
            colors: *resolve_button_styles(theme, &self.color).get(self.variant),
            font_size,
            line_height: LINE_HEIGHT,
            padding: font_size * PADDING_FACTOR,
            border_radius: BORDER_RADIUS,
            opacity: if inactive { DISABLED_OPACITY } else { 1.0 },
            content_opacity: if self.loading { 0.0 } else { 1.0 },
            interactive: !inactive,
            loading_label: self.loading.then(|| self.loading_label.clone()),
        }
    }
}

/// Resolved button style
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonStyle {
    pub colors: ResolvedStyle,
    pub font_size: f32,
    /// Multiplier of `font_size`
    pub line_height: f32,
    pub padding: f32,
    pub border_radius: f32,
    pub opacity: f32,
    /// Label opacity; hidden while loading so the button keeps its width
    pub content_opacity: f32,
    pub interactive: bool,
    /// Overlay text while loading
    pub loading_label: Option<String>,
}
