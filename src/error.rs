//! Error types for field generation and its outer layers.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FieldError {
    /// Axis spec with no samples, reversed bounds, or a non-finite bound.
    #[error("invalid axis range: [{lo}, {hi}] with {count} samples")]
    InvalidRange { lo: f64, hi: f64, count: usize },

    /// Escape configuration rejected before any evaluation.
    #[error("invalid escape config: {0}")]
    InvalidConfig(String),

    /// Contour levels must be strictly increasing with at least two entries.
    #[error("invalid contour levels: {0}")]
    InvalidLevels(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("scene file error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("window error: {0}")]
    Window(String),
}

impl FieldError {
    pub fn invalid_range(lo: f64, hi: f64, count: usize) -> Self {
        Self::InvalidRange { lo, hi, count }
    }
}

pub type Result<T> = std::result::Result<T, FieldError>;
