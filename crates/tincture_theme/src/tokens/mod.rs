//! Design tokens for theming
//!
//! Tokens are the atomic values that make up a design system:
//! - Semantic colors and the background/surface fills
//! - Typography (font family, text colors, levels)
//! - Shadows and the elevation overlay table

mod color;
mod shadow;
mod typography;

pub use color::*;
pub use shadow::*;
pub use typography::*;
