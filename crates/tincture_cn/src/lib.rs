//! Tincture Component Library
//!
//! Theme-aware style resolvers for themed components. Each component family
//! turns `{theme, color, variant, size, state}` into a concrete style record
//! that a rendering layer can consume directly.
//!
//! # Quick Start
//!
//! ```rust
//! use tincture_cn::prelude::*;
//! use tincture_theme::presets::base_light;
//!
//! let theme = base_light();
//! let style = Button::new()
//!     .color(ThemeColor::Danger)
//!     .variant(Variant::Soft)
//!     .resolve(&theme);
//!
//! assert_eq!(style.colors.background.a, 0.15);
//! assert_eq!(style.colors.text, theme.colors.danger);
//! ```
//!
//! # Resolution pipeline
//!
//! - [`ColorRef`] and [`TextColorRef`] parse color props once, at the prop
//!   boundary
//! - [`resolve_color`] and [`contrast_text`] turn them into concrete colors
//! - each family's `resolve_*_styles` builds a [`VariantStyles`] table
//! - [`resolve_size`] maps `sm`/`md`/`lg` or pixels through a
//!   [`BaseSizeMap`]
//!
//! Resolvers are pure. Calling one twice with the same inputs gives equal
//! results, and nothing is cached between calls.

pub mod color;
pub mod components;
pub mod error;
pub mod group;
pub mod size;
pub mod variant;

/// Opacity of a disabled control
pub const DISABLED_OPACITY: f32 = 0.5;

pub use color::{
    contrast_text, resolve_color, resolve_color_str, resolve_typography_color, ColorRef,
    TextColorRef,
};
pub use error::{Result, SizeError, StyleError};
pub use group::{effective_props, GroupContext, Orientation};
pub use size::{resolve_size, BaseSizeMap, Size, SizeInput};
pub use variant::{
    Border, DividerVariant, LineStyle, PaperVariant, ResolvedStyle, TypographyVariant, Variant,
    VariantStyles,
};

pub mod prelude {
    pub use crate::color::{contrast_text, resolve_color, ColorRef, TextColorRef};
    pub use crate::components::*;
    pub use crate::group::{GroupContext, Orientation};
    pub use crate::size::{Size, SizeInput};
    pub use crate::variant::{
        DividerVariant, PaperVariant, ResolvedStyle, TypographyVariant, Variant,
    };

    pub use tincture_theme::{Theme, ThemeColor, TypographyColor, TypographyLevel};
}
