//! Theme loading errors

use thiserror::Error;
use tincture_core::ColorError;

/// Errors from reading or building a theme configuration
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("failed to parse theme file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize theme: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid color for `{field}`: {source}")]
    Color {
        field: String,
        #[source]
        source: ColorError,
    },

    #[error("theme scale must be a positive number, got {0}")]
    InvalidScale(f32),

    #[error("failed to read theme file: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ThemeError>;
