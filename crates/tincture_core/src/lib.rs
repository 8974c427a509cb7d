//! Tincture Core
//!
//! Leaf crate with the concrete color model shared by the theme and the
//! component style resolvers:
//!
//! - [`Color`]: straight RGBA (f32, 0..1) with HSL lighten/darken,
//!   WCAG luminance and contrast ratio
//! - [`parse_color`]: CSS color literals (hex, `rgb()`, `rgba()`, named)
//! - [`extract_stops`]: CSS gradient expressions into a [`GradientSpec`]
//! - [`Fill`]: a flat color or a gradient, as stored in theme backgrounds
//!
//! # Example
//!
//! ```rust
//! use tincture_core::{extract_stops, Color};
//!
//! let blue = Color::parse("#3366ff").unwrap();
//! assert!(blue.relative_luminance() < 0.5);
//!
//! let spec = extract_stops("linear-gradient(to right, red, blue)").unwrap();
//! assert_eq!(spec.offsets(), vec![0.0, 1.0]);
//! ```

pub mod color;
pub mod error;
pub mod gradient;
pub mod parse;

pub use color::{Color, LUMINANCE_THRESHOLD};
pub use error::{ColorError, GradientParseError};
pub use gradient::{
    extract_stops, is_gradient_expression, parse_gradient, Fill, GradientKind, GradientSpec,
    GradientStop,
};
pub use parse::{is_color_literal, named_color, parse_color};
