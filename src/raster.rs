//! 8-bit raster value type.
//!
//! A [`Raster`] wraps an `Array3<u8>` of shape `(height, width, channels)`, the
//! same layout every filter in [`crate::filters`] consumes. Two channel layouts
//! are accepted:
//!
//! | Layout | Shape | Description |
//! |--------|-------|-------------|
//! | Gray8 | (H, W, 1) | Single luminance channel, 0-255 |
//! | BGR8 | (H, W, 3) | Blue, green, red, 0-255 |
//!
//! Rasters are values: operations read one and return a new one.

use ndarray::{Array3, ArrayView3};

use crate::error::{Result, TransformError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    data: Array3<u8>,
}

impl Raster {
    /// Wrap an `(height, width, channels)` array, rejecting empty or unsupported shapes.
    pub fn new(data: Array3<u8>) -> Result<Self> {
        let (height, width, channels) = data.dim();
        if width == 0 || height == 0 {
            return Err(TransformError::EmptyRaster { width, height });
        }
        if channels != 1 && channels != 3 {
            return Err(TransformError::UnsupportedChannels(channels));
        }
        Ok(Self { data })
    }

    /// Build a raster from row-major interleaved samples.
    pub fn from_vec(width: usize, height: usize, channels: usize, samples: Vec<u8>) -> Result<Self> {
        let len = samples.len();
        let data = Array3::from_shape_vec((height, width, channels), samples).map_err(|_| {
            TransformError::ShapeMismatch {
                len,
                width,
                height,
                channels,
            }
        })?;
        Self::new(data)
    }

    /// Wrap filter output derived from an existing raster; shape is already valid.
    pub(crate) fn from_gray(data: Array3<u8>) -> Self {
        debug_assert_eq!(data.dim().2, 1);
        debug_assert!(data.dim().0 > 0 && data.dim().1 > 0);
        Self { data }
    }

    /// Raster with every sample set to `value`.
    pub fn filled(width: usize, height: usize, channels: usize, value: u8) -> Result<Self> {
        Self::new(Array3::from_elem((height, width, channels), value))
    }

    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    pub fn channels(&self) -> usize {
        self.data.dim().2
    }

    pub fn is_gray(&self) -> bool {
        self.channels() == 1
    }

    /// `(width, height)`, the order display code works in.
    pub fn size(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    pub fn view(&self) -> ArrayView3<'_, u8> {
        self.data.view()
    }

    pub fn as_array(&self) -> &Array3<u8> {
        &self.data
    }

    pub fn into_array(self) -> Array3<u8> {
        self.data
    }

    /// Samples in row-major interleaved order.
    pub fn to_vec(&self) -> Vec<u8> {
        self.data.iter().copied().collect()
    }

    /// Smallest and largest sample over all channels.
    pub fn min_max(&self) -> (u8, u8) {
        self.data
            .iter()
            .fold((u8::MAX, u8::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)))
    }
}
