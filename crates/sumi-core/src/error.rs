//! Error types for Sumi
//!
//! Geometry never fails: every transform has a numeric fallback. What can
//! fail is everything that touches the outside world, such as reading a glyph
//! table, writing an SVG document or parsing command-line configuration.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SumiError>;

/// Main error type for Sumi
#[derive(Debug, Error)]
pub enum SumiError {
    #[error("Glyph source error: {0}")]
    GlyphSource(#[from] GlyphSourceError),

    #[error("Rendering failed: {0}")]
    RenderingFailed(#[from] RenderError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(String),
}

/// Glyph table errors
#[derive(Debug, Error)]
pub enum GlyphSourceError {
    #[error("Unknown primitive kind: {0}")]
    UnknownPrimitive(String),

    #[error("Primitive '{kind}' is missing field '{field}'")]
    MissingField { kind: String, field: &'static str },

    #[error("Invalid polyline coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Invalid units per em: {0}")]
    InvalidUnitsPerEm(f64),
}

/// Rendering errors
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: f64, height: f64 },

    #[error("Invalid glyph size: {0}")]
    InvalidSize(f64),

    #[error("Failed to build SVG output")]
    SvgWriteFailed,
}

impl From<std::fmt::Error> for RenderError {
    fn from(_: std::fmt::Error) -> Self {
        RenderError::SvgWriteFailed
    }
}

impl From<std::fmt::Error> for SumiError {
    fn from(err: std::fmt::Error) -> Self {
        SumiError::RenderingFailed(err.into())
    }
}
