//! Color error types

use thiserror::Error;

/// Errors raised while turning a color expression into a concrete [`Color`]
///
/// [`Color`]: crate::Color
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The input is neither a known token nor a parseable color literal
    #[error("invalid color expression: {0:?}")]
    InvalidColor(String),

    /// The input is a gradient where a single solid color is required
    #[error("expected a solid color, found gradient: {0:?}")]
    NotSolid(String),
}

/// Result type for color operations
pub type Result<T> = std::result::Result<T, ColorError>;

/// Reasons a gradient expression is rejected
///
/// These never escape [`extract_stops`](crate::extract_stops); they are logged
/// and the caller falls back to a flat fill.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradientParseError {
    /// Input is not a `*-gradient(...)` function
    #[error("not a gradient expression")]
    NotAGradient,

    /// Gradient function other than linear/radial
    #[error("unsupported gradient function: {0}")]
    Unsupported(String),

    /// Parentheses do not balance
    #[error("unbalanced parentheses")]
    Unbalanced,

    /// Direction keyword that is neither an angle nor `to <side>`
    #[error("invalid gradient direction: {0:?}")]
    InvalidDirection(String),

    /// A color stop whose color does not parse
    #[error("invalid color stop: {0:?}")]
    InvalidStop(String),

    /// Fewer than two color stops
    #[error("gradient needs at least two color stops, found {0}")]
    TooFewStops(usize),
}
