//! Error types
//!
//! The simulation itself cannot fail; these cover construction and host configuration.

use thiserror::Error;

/// Invalid play-field dimensions
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    #[error("field dimensions must be positive and finite, got {width}x{height}")]
    NonPositive { width: f32, height: f32 },
    #[error("field width {width} cannot fit a balloon of radius {max_radius}")]
    TooNarrow { width: f32, max_radius: f32 },
}

/// Invalid host settings or match configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid field in settings: {0}")]
    Field(#[from] FieldError),
    #[error("frame rate must be positive and finite, got {0}")]
    FrameRate(f64),
}
