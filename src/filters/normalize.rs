//! Min-max range normalization into the displayable 0-255 range.
//!
//! `s' = (s - min) / (max - min) * 255`, rounded to the nearest integer and
//! clamped to u8. A non-constant input therefore always produces at least one
//! 0 and at least one 255.
//!
//! ## Constant input
//!
//! When `max == min` the stretch is undefined. The normalizer does not divide;
//! it returns an all-zero image of the same shape ([`DEGENERATE_FILL`]) and logs
//! a warning.

use ndarray::{Array3, ArrayView3, Zip};
use rayon::prelude::*;
use tracing::warn;

/// Sample value written for every pixel of a constant-valued input.
pub const DEGENERATE_FILL: u8 = 0;

/// Scan minimum and maximum of a float image.
///
/// Returns `None` for an empty image. NaN samples are skipped.
pub fn min_max_f64(input: ArrayView3<f64>) -> Option<(f64, f64)> {
    if input.is_empty() {
        return None;
    }

    let (lo, hi) = input
        .into_par_iter()
        .filter(|v| !v.is_nan())
        .fold(
            || (f64::INFINITY, f64::NEG_INFINITY),
            |(lo, hi), &v| (lo.min(v), hi.max(v)),
        )
        .reduce(
            || (f64::INFINITY, f64::NEG_INFINITY),
            |(lo1, hi1), (lo2, hi2)| (lo1.min(lo2), hi1.max(hi2)),
        );

    if lo > hi {
        None
    } else {
        Some((lo, hi))
    }
}

/// Stretch a float image so its range spans 0-255.
///
/// # Arguments
/// * `input` - Real-valued image (height, width, channels)
///
/// # Returns
/// u8 image with the same shape. Constant input yields [`DEGENERATE_FILL`]
/// everywhere.
pub fn normalize_to_u8(input: ArrayView3<f64>) -> Array3<u8> {
    let (lo, hi) = match min_max_f64(input) {
        Some(range) if range.1 > range.0 => range,
        Some((lo, _)) => {
            warn!(value = lo, "constant-valued input, range normalization skipped");
            return Array3::from_elem(input.dim(), DEGENERATE_FILL);
        }
        None => return Array3::from_elem(input.dim(), DEGENERATE_FILL),
    };

    let scale = 255.0 / (hi - lo);
    Zip::from(&input).par_map_collect(|&v| ((v - lo) * scale).round().clamp(0.0, 255.0) as u8)
}

/// Stretch a u8 image so its range spans 0-255 (min-max contrast stretch).
pub fn normalize_u8(input: ArrayView3<u8>) -> Array3<u8> {
    let promoted = input.mapv(f64::from);
    normalize_to_u8(promoted.view())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn column(values: &[f64]) -> Array3<f64> {
        Array3::from_shape_vec((values.len(), 1, 1), values.to_vec()).unwrap()
    }

    #[test]
    fn test_min_max_scan() {
        let img = column(&[3.0, -1.5, 8.25, 0.0]);
        let (lo, hi) = min_max_f64(img.view()).unwrap();
        assert_relative_eq!(lo, -1.5);
        assert_relative_eq!(hi, 8.25);
    }

    #[test]
    fn test_min_max_skips_nan() {
        let img = column(&[f64::NAN, 2.0, 4.0]);
        assert_eq!(min_max_f64(img.view()), Some((2.0, 4.0)));
    }

    #[test]
    fn test_min_max_strided_view() {
        let img = Array3::from_shape_fn((6, 8, 1), |(y, x, _)| (y * 8 + x) as f64);
        // Every other column, rows reversed
        let view = img.slice(ndarray::s![..;-1, ..;2, ..]);
        assert_eq!(min_max_f64(view), Some((0.0, 46.0)));
    }

    #[test]
    fn test_min_max_empty() {
        let img = Array3::<f64>::zeros((0, 0, 1));
        assert_eq!(min_max_f64(img.view()), None);
    }

    #[test]
    fn test_normalize_full_range() {
        let img = column(&[2.0, 3.0, 4.0]);
        let result = normalize_to_u8(img.view());

        assert_eq!(result[[0, 0, 0]], 0);
        // midpoint 127.5 rounds up
        assert_eq!(result[[1, 0, 0]], 128);
        assert_eq!(result[[2, 0, 0]], 255);
    }

    #[test]
    fn test_normalize_large_values_keep_endpoints() {
        let img = column(&[0.0, 1.0e20, 1.16e24]);
        let result = normalize_to_u8(img.view());

        assert_eq!(result[[0, 0, 0]], 0);
        assert_eq!(result[[2, 0, 0]], 255);
    }

    #[test]
    fn test_normalize_constant_is_zero() {
        let img = Array3::<f64>::from_elem((4, 5, 1), 7.5);
        let result = normalize_to_u8(img.view());

        assert_eq!(result.dim(), (4, 5, 1));
        assert!(result.iter().all(|&v| v == DEGENERATE_FILL));
    }

    #[test]
    fn test_normalize_u8_stretch() {
        let img = Array3::from_shape_vec((1, 3, 1), vec![10u8, 48, 200]).unwrap();
        let result = normalize_u8(img.view());

        assert_eq!(result[[0, 0, 0]], 0);
        assert_eq!(result[[0, 1, 0]], 51);
        assert_eq!(result[[0, 2, 0]], 255);
    }

    #[test]
    fn test_normalize_u8_full_range_is_identity() {
        let values: Vec<u8> = (0..=255).collect();
        let img = Array3::from_shape_vec((16, 16, 1), values).unwrap();
        let result = normalize_u8(img.view());

        assert_eq!(result, img);
    }
}
