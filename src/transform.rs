//! Raster-level point transforms.
//!
//! [`PointTransform`] names one of the four operations a shell can offer.
//! Every operation converts its source to grayscale first, then remaps
//! intensities; only [`PointTransform::Grayscale`] skips the range stretch.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::{Result, TransformError};
use crate::filters::grayscale::grayscale_bgr_u8;
use crate::filters::point::{linear_stretch_u8, log_stretch_u8, power_stretch_u8};
use crate::raster::Raster;

/// Valid exponents for [`PointTransform::Exponential`].
pub const EXPONENT_RANGE: RangeInclusive<u32> = 1..=10;

/// Exponent a shell should preselect.
pub const DEFAULT_EXPONENT: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointTransform {
    Grayscale,
    Logarithmic,
    Exponential { exponent: u32 },
    Linear,
}

impl PointTransform {
    pub fn exponential_default() -> Self {
        PointTransform::Exponential {
            exponent: DEFAULT_EXPONENT,
        }
    }

    /// Parse `name` and, for the exponential transform, use `exponent` when given.
    pub fn from_name(name: &str, exponent: Option<u32>) -> Result<Self> {
        let parsed: PointTransform = name.parse()?;
        Ok(match (parsed, exponent) {
            (PointTransform::Exponential { .. }, Some(exponent)) => {
                PointTransform::Exponential { exponent }
            }
            (parsed, _) => parsed,
        })
    }

    /// Run the transform on `source`.
    ///
    /// `None` means no image is loaded and fails with
    /// [`TransformError::NoImageLoaded`].
    pub fn apply(&self, source: Option<&Raster>) -> Result<Raster> {
        let source = source.ok_or(TransformError::NoImageLoaded)?;
        match *self {
            PointTransform::Grayscale => Ok(grayscale(source)),
            PointTransform::Logarithmic => Ok(logarithmic(source)),
            PointTransform::Exponential { exponent } => exponential(source, exponent),
            PointTransform::Linear => Ok(linear(source)),
        }
    }
}

impl fmt::Display for PointTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointTransform::Grayscale => f.write_str("grayscale"),
            PointTransform::Logarithmic => f.write_str("logarithmic"),
            PointTransform::Exponential { exponent } => write!(f, "exponential({})", exponent),
            PointTransform::Linear => f.write_str("linear"),
        }
    }
}

impl FromStr for PointTransform {
    type Err = TransformError;

    /// Parse a transform name. Exponential uses [`DEFAULT_EXPONENT`]; callers
    /// that carry their own exponent overwrite it afterwards.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grayscale" | "gray" | "grey" => Ok(PointTransform::Grayscale),
            "logarithmic" | "log" => Ok(PointTransform::Logarithmic),
            "exponential" | "exp" | "power" => Ok(PointTransform::exponential_default()),
            "linear" | "stretch" => Ok(PointTransform::Linear),
            _ => Err(TransformError::UnknownTransform(s.to_string())),
        }
    }
}

/// Luminance-weighted grayscale. Single-channel input comes back unchanged.
pub fn grayscale(source: &Raster) -> Raster {
    Raster::from_gray(grayscale_bgr_u8(source.view()))
}

/// Grayscale followed by `ln(1 + r)` and a full-range stretch.
pub fn logarithmic(source: &Raster) -> Raster {
    let gray = grayscale_bgr_u8(source.view());
    Raster::from_gray(log_stretch_u8(gray.view()))
}

/// Grayscale followed by `r^exponent` and a full-range stretch.
pub fn exponential(source: &Raster, exponent: u32) -> Result<Raster> {
    if !EXPONENT_RANGE.contains(&exponent) {
        return Err(TransformError::ExponentOutOfRange(exponent));
    }
    let gray = grayscale_bgr_u8(source.view());
    Ok(Raster::from_gray(power_stretch_u8(gray.view(), exponent as i32)))
}

/// Grayscale followed by a min-max contrast stretch.
pub fn linear(source: &Raster) -> Raster {
    let gray = grayscale_bgr_u8(source.view());
    Raster::from_gray(linear_stretch_u8(gray.view()))
}
