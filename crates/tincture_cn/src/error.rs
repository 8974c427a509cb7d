//! Errors raised while turning user input into typed style props

use thiserror::Error;
use tincture_core::ColorError;

/// Size input and size table errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SizeError {
    #[error("invalid size `{0}`: expected sm, md, lg or a non-negative pixel value")]
    InvalidSize(String),

    #[error("size table must satisfy sm < md < lg, got {sm} / {md} / {lg}")]
    NonMonotonic { sm: f32, md: f32, lg: f32 },
}

/// Any error from parsing component props
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleError {
    #[error(transparent)]
    Color(#[from] ColorError),

    #[error(transparent)]
    Size(#[from] SizeError),

    #[error("unknown variant `{0}`")]
    UnknownVariant(String),
}

pub type Result<T> = std::result::Result<T, StyleError>;
