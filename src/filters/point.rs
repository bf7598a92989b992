//! Point transforms: logarithmic, power (exponential) and linear stretches.
//!
//! Each output sample depends only on the matching input sample and a global
//! parameter. All three promote samples to f64, remap them, then pass the
//! result through [`normalize_to_u8`] so the output spans 0-255.
//!
//! Inputs are expected to be single-channel luminance images; run
//! [`super::grayscale::grayscale_bgr_u8`] first. Multi-channel input is
//! processed per sample with one shared range.

use ndarray::{Array3, ArrayView3};

use super::normalize::{normalize_to_u8, normalize_u8};

// ============================================================================
// Logarithmic
// ============================================================================

/// Logarithmic stretch `s = ln(1 + r)`.
///
/// Compresses the bright end and lifts low-intensity detail.
pub fn log_stretch_u8(input: ArrayView3<u8>) -> Array3<u8> {
    let s = input.mapv(|v| f64::from(v).ln_1p());
    normalize_to_u8(s.view())
}

// ============================================================================
// Power
// ============================================================================

/// Power stretch `s = r^exponent`.
///
/// Larger exponents expand contrast at the bright end. The caller validates the
/// exponent range; 255^10 is still well inside f64.
pub fn power_stretch_u8(input: ArrayView3<u8>, exponent: i32) -> Array3<u8> {
    let s = input.mapv(|v| f64::from(v).powi(exponent));
    normalize_to_u8(s.view())
}

// ============================================================================
// Linear
// ============================================================================

/// Min-max contrast stretch with no nonlinear remapping.
pub fn linear_stretch_u8(input: ArrayView3<u8>) -> Array3<u8> {
    normalize_u8(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> Array3<u8> {
        Array3::from_shape_vec((1, 5, 1), vec![0u8, 1, 15, 100, 255]).unwrap()
    }

    #[test]
    fn test_log_stretch_endpoints() {
        let result = log_stretch_u8(ramp().view());

        assert_eq!(result[[0, 0, 0]], 0);
        assert_eq!(result[[0, 4, 0]], 255);
    }

    #[test]
    fn test_log_stretch_lifts_shadows() {
        let result = log_stretch_u8(ramp().view());

        // ln(2)/ln(256) * 255 ≈ 31.9, far above the linear value of 1
        assert_eq!(result[[0, 1, 0]], 32);
        // ln(16)/ln(256) * 255 = 127.5
        assert!(result[[0, 2, 0]] >= 127 && result[[0, 2, 0]] <= 128);
    }

    #[test]
    fn test_power_stretch_exponent_one_is_linear() {
        let img = ramp();
        assert_eq!(power_stretch_u8(img.view(), 1), linear_stretch_u8(img.view()));
    }

    #[test]
    fn test_power_stretch_darkens_midtones() {
        let result = power_stretch_u8(ramp().view(), 2);

        // (100/255)^2 * 255 ≈ 39.2
        assert_eq!(result[[0, 3, 0]], 39);
        assert_eq!(result[[0, 4, 0]], 255);
    }

    #[test]
    fn test_power_stretch_high_exponent_keeps_range() {
        let result = power_stretch_u8(ramp().view(), 10);

        assert_eq!(result[[0, 0, 0]], 0);
        assert_eq!(result[[0, 3, 0]], 0);
        assert_eq!(result[[0, 4, 0]], 255);
    }

    #[test]
    fn test_linear_stretch() {
        let img = Array3::from_shape_vec((2, 2, 1), vec![50u8, 60, 70, 150]).unwrap();
        let result = linear_stretch_u8(img.view());

        assert_eq!(result[[0, 0, 0]], 0);
        // 20/100 * 255 = 51
        assert_eq!(result[[1, 0, 0]], 51);
        assert_eq!(result[[1, 1, 0]], 255);
    }

    #[test]
    fn test_flat_input_falls_back_to_zero() {
        let img = Array3::<u8>::from_elem((3, 3, 1), 128);

        assert!(log_stretch_u8(img.view()).iter().all(|&v| v == 0));
        assert!(power_stretch_u8(img.view(), 5).iter().all(|&v| v == 0));
        assert!(linear_stretch_u8(img.view()).iter().all(|&v| v == 0));
    }
}
