//! Grayscale conversion filter.
//!
//! Collapses a BGR raster to a single luminance channel. Single-channel input
//! is returned as a copy, so the conversion is idempotent.
//!
//! ## Supported Formats
//!
//! - **Gray8**: (height, width, 1) - no-op, returns copy
//! - **BGR8**: (height, width, 3) - weighted sum of B, G, R into one channel
//!
//! The default weights are ITU-R BT.601 (0.299 R + 0.587 G + 0.114 B), the
//! perceptual weighting used for 8-bit BGR display rasters. Results are rounded
//! to the nearest integer, so the output never needs renormalization.

use ndarray::{Array3, ArrayView3, Axis, Zip};

/// ITU-R BT.601 luminosity coefficients
pub const LUMA_R: f32 = 0.299;
pub const LUMA_G: f32 = 0.587;
pub const LUMA_B: f32 = 0.114;

/// ITU-R BT.709 luminosity coefficients
const LUMA_709_R: f32 = 0.2126;
const LUMA_709_G: f32 = 0.7152;
const LUMA_709_B: f32 = 0.0722;

/// Per-channel weights for grayscale conversion.
/// Default uses BT.601 coefficients.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrayscaleWeights {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Default for GrayscaleWeights {
    fn default() -> Self {
        Self::bt601()
    }
}

impl GrayscaleWeights {
    /// BT.601 luminosity (default)
    pub fn bt601() -> Self {
        Self {
            r: LUMA_R,
            g: LUMA_G,
            b: LUMA_B,
        }
    }

    /// BT.709 luminosity
    pub fn bt709() -> Self {
        Self {
            r: LUMA_709_R,
            g: LUMA_709_G,
            b: LUMA_709_B,
        }
    }

    /// Create custom weights (normalized automatically)
    pub fn custom(r: f32, g: f32, b: f32) -> Self {
        let sum = (r + g + b).abs().max(0.001);
        Self {
            r: r / sum,
            g: g / sum,
            b: b / sum,
        }
    }
}

/// Convert a BGR image to single-channel luminance with the given weights.
///
/// # Arguments
/// * `input` - Image with 1 or 3 channels (height, width, channels), BGR order
/// * `weights` - Channel weights for conversion
///
/// # Returns
/// Image of shape (height, width, 1)
pub fn grayscale_bgr_weighted_u8(input: ArrayView3<u8>, weights: GrayscaleWeights) -> Array3<u8> {
    let (_, _, channels) = input.dim();
    if channels == 1 {
        return input.to_owned();
    }

    let gray = Zip::from(input.lanes(Axis(2))).par_map_collect(|px| {
        let b = px[0] as f32;
        let g = px[1] as f32;
        let r = px[2] as f32;
        (weights.b * b + weights.g * g + weights.r * r)
            .round()
            .clamp(0.0, 255.0) as u8
    });

    gray.insert_axis(Axis(2))
}

/// Convert a BGR image to single-channel luminance using BT.601 weights.
pub fn grayscale_bgr_u8(input: ArrayView3<u8>) -> Array3<u8> {
    grayscale_bgr_weighted_u8(input, GrayscaleWeights::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bgr_pixel(b: u8, g: u8, r: u8) -> Array3<u8> {
        let mut img = Array3::<u8>::zeros((1, 1, 3));
        img[[0, 0, 0]] = b;
        img[[0, 0, 1]] = g;
        img[[0, 0, 2]] = r;
        img
    }

    #[test]
    fn test_grayscale_red() {
        let result = grayscale_bgr_u8(bgr_pixel(0, 0, 255).view());

        // 0.299 * 255 ≈ 76
        assert_eq!(result.dim(), (1, 1, 1));
        assert_eq!(result[[0, 0, 0]], 76);
    }

    #[test]
    fn test_grayscale_green_blue() {
        // 0.587 * 255 ≈ 150
        assert_eq!(grayscale_bgr_u8(bgr_pixel(0, 255, 0).view())[[0, 0, 0]], 150);
        // 0.114 * 255 ≈ 29
        assert_eq!(grayscale_bgr_u8(bgr_pixel(255, 0, 0).view())[[0, 0, 0]], 29);
    }

    #[test]
    fn test_grayscale_white_stays_white() {
        let result = grayscale_bgr_u8(bgr_pixel(255, 255, 255).view());
        assert_eq!(result[[0, 0, 0]], 255);
    }

    #[test]
    fn test_grayscale_neutral_gray_unchanged() {
        for v in [0u8, 1, 64, 128, 200, 254] {
            let result = grayscale_bgr_u8(bgr_pixel(v, v, v).view());
            assert_eq!(result[[0, 0, 0]], v);
        }
    }

    #[test]
    fn test_grayscale_single_channel_is_copy() {
        let mut img = Array3::<u8>::zeros((2, 3, 1));
        img[[1, 2, 0]] = 99;

        let result = grayscale_bgr_u8(img.view());
        assert_eq!(result, img);
    }

    #[test]
    fn test_bt709_weights() {
        let result = grayscale_bgr_weighted_u8(bgr_pixel(0, 255, 0).view(), GrayscaleWeights::bt709());
        // 0.7152 * 255 ≈ 182
        assert_eq!(result[[0, 0, 0]], 182);
    }

    #[test]
    fn test_custom_weights_normalized() {
        let w = GrayscaleWeights::custom(1.0, 1.0, 2.0);
        assert!((w.r + w.g + w.b - 1.0).abs() < 1e-6);
        assert!((w.b - 0.5).abs() < 1e-6);
    }
}
