//! File layer for shells: decode images into rasters and encode rasters to disk.
//!
//! Decoding accepts anything the `image` crate reads and always produces a BGR
//! raster (alpha dropped, gray expanded). Encoding writes PNG or JPEG, picked by
//! file extension.

use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::{DynamicImage, GrayImage, ImageFormat, RgbImage};
use ndarray::{s, Array3};
use thiserror::Error;

use crate::display::{fit, DisplayBox};
use crate::error::TransformError;
use crate::raster::Raster;

#[derive(Error, Debug)]
pub enum ImageIoError {
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(PathBuf),
    #[error("image codec error: {0}")]
    Codec(#[from] image::ImageError),
    #[error(transparent)]
    Raster(#[from] TransformError),
}

pub type IoResult<T> = std::result::Result<T, ImageIoError>;

/// Output format for `path`, from its extension.
pub fn output_format(path: &Path) -> IoResult<ImageFormat> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => Ok(ImageFormat::Png),
        Some("jpg") | Some("jpeg") => Ok(ImageFormat::Jpeg),
        _ => Err(ImageIoError::UnsupportedFormat(path.to_path_buf())),
    }
}

/// Convert a decoded image to a 3-channel BGR raster.
pub fn raster_from_image(image: &DynamicImage) -> IoResult<Raster> {
    let rgb = image.to_rgb8();
    let (width, height) = (rgb.width() as usize, rgb.height() as usize);
    let samples = rgb.into_raw();
    let len = samples.len();

    let data = Array3::from_shape_vec((height, width, 3), samples).map_err(|_| {
        TransformError::ShapeMismatch {
            len,
            width,
            height,
            channels: 3,
        }
    })?;
    // RGB -> BGR
    let bgr = data.slice(s![.., .., ..;-1]).to_owned();
    Ok(Raster::new(bgr)?)
}

/// Convert a raster back to an encodable image (L8 for gray, RGB8 for BGR).
pub fn raster_to_image(raster: &Raster) -> DynamicImage {
    let (width, height) = (raster.width() as u32, raster.height() as u32);
    let data = raster.as_array();

    if raster.is_gray() {
        DynamicImage::ImageLuma8(GrayImage::from_fn(width, height, |x, y| {
            image::Luma([data[[y as usize, x as usize, 0]]])
        }))
    } else {
        DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            let (x, y) = (x as usize, y as usize);
            image::Rgb([data[[y, x, 2]], data[[y, x, 1]], data[[y, x, 0]]])
        }))
    }
}

/// Decode the image at `path` into a BGR raster.
pub fn load_raster(path: &Path) -> IoResult<Raster> {
    let image = image::open(path).map_err(|err| match err {
        image::ImageError::Unsupported(_) => ImageIoError::UnsupportedFormat(path.to_path_buf()),
        other => ImageIoError::Codec(other),
    })?;
    raster_from_image(&image)
}

/// Encode `raster` to `path` as PNG or JPEG.
pub fn save_raster(raster: &Raster, path: &Path) -> IoResult<()> {
    let format = output_format(path)?;
    raster_to_image(raster).save_with_format(path, format)?;
    Ok(())
}

/// Encode `raster` resized to its display size inside `bounds`.
///
/// Returns the size written.
pub fn save_preview(raster: &Raster, path: &Path, bounds: DisplayBox) -> IoResult<(usize, usize)> {
    let format = output_format(path)?;
    let (width, height) = fit(raster.width(), raster.height(), bounds);

    let image = raster_to_image(raster);
    let preview = if (width, height) == raster.size() {
        image
    } else {
        image.resize_exact(width as u32, height as u32, FilterType::Lanczos3)
    };
    preview.save_with_format(path, format)?;
    Ok((width, height))
}
