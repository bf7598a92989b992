//! Error type shared by the transform engine and the image state.

use thiserror::Error;

/// Errors raised by rasters, transforms and [`crate::state::ImageState`].
///
/// None of these are fatal: a shell that receives [`TransformError::NoImageLoaded`]
/// is expected to skip the operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    #[error("no image loaded")]
    NoImageLoaded,
    #[error("raster must have non-zero size, got {width}x{height}")]
    EmptyRaster { width: usize, height: usize },
    #[error("unsupported channel count {0}, expected 1 (gray) or 3 (BGR)")]
    UnsupportedChannels(usize),
    #[error("exponent {0} outside 1..=10")]
    ExponentOutOfRange(u32),
    #[error("sample buffer of length {len} does not match {width}x{height}x{channels}")]
    ShapeMismatch {
        len: usize,
        width: usize,
        height: usize,
        channels: usize,
    },
    #[error("unknown transform '{0}'")]
    UnknownTransform(String),
}

pub type Result<T> = std::result::Result<T, TransformError>;
