//! Tincture Theme System
//!
//! Semantic design tokens, built-in light/dark presets and the provider that
//! owns the active theme.
//!
//! # Quick Start
//!
//! ```rust
//! use tincture_theme::{ThemeColor, ThemeMode, ThemeProvider};
//!
//! let provider = ThemeProvider::default();
//! provider.change_mode(ThemeMode::Light);
//!
//! let theme = provider.theme();
//! let primary = theme.color(ThemeColor::Primary);
//! assert_eq!(primary.to_hex(), "#3366ff");
//! ```
//!
//! # Tokens
//!
//! - [`ColorTokens`]: six semantic colors, `background`/`surface` fills
//!   (flat or gradient) and the absolute `common` colors
//! - [`TypographyTokens`]: font family, text colors and levels
//! - [`Shadow`] and [`dynamic_elevation`]: elevation shadows and overlays
//!
//! # Themes
//!
//! [`Theme`] is an immutable record; [`ThemeBundle`] pairs a light and a
//! dark theme. [`ThemePreset`] lists the built-in bundles, and
//! [`ThemeConfig`] loads custom themes from TOML.
//!
//! # Provider
//!
//! [`ThemeProvider`] swaps the active `Arc<Theme>` on
//! [`change_theme`](ThemeProvider::change_theme),
//! [`change_mode`](ThemeProvider::change_mode) and platform scheme changes,
//! then notifies subscribers.

pub mod config;
pub mod error;
pub mod presets;
pub mod state;
pub mod theme;
pub mod tokens;

// Re-export commonly used types
pub use config::{load_theme_file, ThemeConfig};
pub use error::ThemeError;
pub use presets::{find_theme, preset_bundle, ThemePreset};
pub use state::{ListenerId, ThemeEvent, ThemeMode, ThemeProvider};
pub use theme::{ColorScheme, Theme, ThemeBundle};
pub use tokens::*;

pub use tincture_core::{Color, Fill, GradientSpec};
