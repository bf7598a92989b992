//! Pixel kernels operating on `ndarray` images.
//!
//! ## Supported Formats
//!
//! | Format | Shape | Type | Description |
//! |--------|-------|------|-------------|
//! | Gray8 | (H, W, 1) | u8 | Single luminance channel, 0-255 |
//! | BGR8 | (H, W, 3) | u8 | Blue, green, red, 0-255 |
//!
//! ## Filter Categories
//!
//! - **Grayscale**: weighted channel collapse to one luminance channel
//! - **Point**: logarithmic, power and linear stretches of luminance
//! - **Normalize**: min-max range stretch into 0-255, shared by the point filters
//!
//! Kernels never modify their input; each returns a new array. Larger loops run
//! on rayon through ndarray's parallel `Zip`, but every call blocks until the
//! whole image is done.

pub mod grayscale;
pub mod normalize;
pub mod point;
