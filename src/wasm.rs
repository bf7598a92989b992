//! WebAssembly exports for the image state and display sizing.
//!
//! These are exposed to JavaScript via wasm-bindgen. Images cross the
//! boundary as flat row-major byte buffers with an explicit channel count
//! (1 for gray, 3 for BGR).

use wasm_bindgen::prelude::*;

use crate::display::{fit, DisplayBox};
use crate::error::TransformError;
use crate::raster::Raster;
use crate::state::ImageState;
use crate::transform::PointTransform;

fn to_js(err: TransformError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

// ============================================================================
// Image State
// ============================================================================

#[wasm_bindgen]
pub struct WasmImageState {
    inner: ImageState,
}

#[wasm_bindgen]
impl WasmImageState {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmImageState {
        WasmImageState {
            inner: ImageState::new(),
        }
    }

    /// Load a new original image.
    ///
    /// # Arguments
    /// * `data` - Flat array of bytes (length = width * height * channels)
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `channels` - 1 (gray) or 3 (BGR)
    pub fn load(
        &mut self,
        data: &[u8],
        width: usize,
        height: usize,
        channels: usize,
    ) -> Result<(), JsValue> {
        let raster = Raster::from_vec(width, height, channels, data.to_vec()).map_err(to_js)?;
        self.inner.load(raster);
        Ok(())
    }

    /// Apply a transform by name to the original image.
    ///
    /// # Returns
    /// Flat single-channel bytes of the new current image
    pub fn apply(&mut self, name: &str, exponent: Option<u32>) -> Result<Vec<u8>, JsValue> {
        let transform = PointTransform::from_name(name, exponent).map_err(to_js)?;
        let current = self.inner.apply(transform).map_err(to_js)?;
        Ok(current.to_vec())
    }

    pub fn revert(&mut self) -> Result<(), JsValue> {
        self.inner.revert().map_err(to_js)
    }

    /// Flat bytes of the current image, or `undefined` before the first load.
    pub fn current(&self) -> Option<Vec<u8>> {
        self.inner.current_raster().map(Raster::to_vec)
    }

    /// Channel count of the current image (0 before the first load).
    #[wasm_bindgen(js_name = currentChannels)]
    pub fn current_channels(&self) -> usize {
        self.inner.current_raster().map_or(0, Raster::channels)
    }

    #[wasm_bindgen(js_name = historyLen)]
    pub fn history_len(&self) -> usize {
        self.inner.history_len()
    }
}

impl Default for WasmImageState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Display Sizing
// ============================================================================

/// Fit a width/height pair inside a bounding box.
///
/// # Returns
/// `[width, height]` of the display size
#[wasm_bindgen]
pub fn fit_to_box_wasm(width: usize, height: usize, max_width: usize, max_height: usize) -> Vec<u32> {
    let (w, h) = fit(width, height, DisplayBox::new(max_width, max_height));
    vec![w as u32, h as u32]
}
