//! pointstag
//!
//! Point-transform engine for a single-image viewer: grayscale, logarithmic,
//! exponential and linear intensity remapping over an original/current image
//! state, plus display sizing. Python bindings via PyO3 and WASM bindings for
//! JavaScript wrap the same state model.
//!
//! ## Image Format
//! Rasters are 8-bit `ndarray` arrays of shape (height, width, channels):
//! - **Grayscale**: (height, width, 1) - single channel
//! - **BGR**: (height, width, 3) - blue, green, red
//!
//! Every transform returns a single-channel raster.
//!
//! ## State Model
//! [`ImageState`] keeps the loaded original untouched. Each
//! [`ImageState::apply`] derives a fresh result from the original (transforms
//! never chain), and [`ImageState::revert`] restores a copy of it.

pub mod display;
pub mod error;
pub mod filters;
pub mod raster;
pub mod state;
pub mod transform;

#[cfg(feature = "cli")]
pub mod io;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use display::{fit, fit_default, DisplayBox};
pub use error::{Result, TransformError};
pub use raster::Raster;
pub use state::ImageState;
pub use transform::{PointTransform, DEFAULT_EXPONENT, EXPONENT_RANGE};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray3, PyReadonlyArray3};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::display::{fit, DisplayBox};
    use crate::error::TransformError;
    use crate::raster::Raster;
    use crate::state::ImageState;
    use crate::transform::{self, PointTransform};

    impl From<TransformError> for PyErr {
        fn from(err: TransformError) -> PyErr {
            PyValueError::new_err(err.to_string())
        }
    }

    fn to_raster(image: PyReadonlyArray3<'_, u8>) -> PyResult<Raster> {
        Ok(Raster::new(image.as_array().to_owned())?)
    }

    fn to_py<'py>(py: Python<'py>, raster: &Raster) -> Bound<'py, PyArray3<u8>> {
        raster.as_array().clone().into_pyarray(py)
    }

    // ========================================================================
    // Image State
    // ========================================================================

    /// Original/current image pair with transform history.
    ///
    /// Arrays are numpy uint8 of shape (height, width, 1) or (height, width, 3)
    /// in BGR order.
    #[pyclass(name = "ImageState")]
    pub struct PyImageState {
        inner: ImageState,
    }

    #[pymethods]
    impl PyImageState {
        #[new]
        fn new() -> Self {
            Self {
                inner: ImageState::new(),
            }
        }

        /// Load a new original, discarding the previous image and history.
        fn load(&mut self, image: PyReadonlyArray3<'_, u8>) -> PyResult<()> {
            let raster = to_raster(image)?;
            self.inner.load(raster);
            Ok(())
        }

        /// Apply a transform by name ("grayscale", "logarithmic", "exponential",
        /// "linear") to the original and return the new current image.
        #[pyo3(signature = (name, exponent=None))]
        fn apply<'py>(
            &mut self,
            py: Python<'py>,
            name: &str,
            exponent: Option<u32>,
        ) -> PyResult<Bound<'py, PyArray3<u8>>> {
            let transform = PointTransform::from_name(name, exponent)?;
            let current = self.inner.apply(transform)?;
            Ok(to_py(py, current))
        }

        fn revert(&mut self) -> PyResult<()> {
            Ok(self.inner.revert()?)
        }

        fn current<'py>(&self, py: Python<'py>) -> Option<Bound<'py, PyArray3<u8>>> {
            self.inner.current_raster().map(|r| to_py(py, r))
        }

        fn original<'py>(&self, py: Python<'py>) -> Option<Bound<'py, PyArray3<u8>>> {
            self.inner.original_raster().map(|r| to_py(py, r))
        }

        #[getter]
        fn is_loaded(&self) -> bool {
            self.inner.is_loaded()
        }

        #[getter]
        fn history_len(&self) -> usize {
            self.inner.history_len()
        }
    }

    // ========================================================================
    // Stateless Transforms
    // ========================================================================

    #[pyfunction]
    pub fn grayscale<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let result = transform::grayscale(&to_raster(image)?);
        Ok(to_py(py, &result))
    }

    #[pyfunction]
    pub fn logarithmic<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let result = transform::logarithmic(&to_raster(image)?);
        Ok(to_py(py, &result))
    }

    #[pyfunction]
    #[pyo3(signature = (image, exponent=5))]
    pub fn exponential<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        exponent: u32,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let result = transform::exponential(&to_raster(image)?, exponent)?;
        Ok(to_py(py, &result))
    }

    #[pyfunction]
    pub fn linear<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let result = transform::linear(&to_raster(image)?);
        Ok(to_py(py, &result))
    }

    // ========================================================================
    // Display Sizing
    // ========================================================================

    /// Fit (width, height) inside a (max_width, max_height) box, keeping aspect.
    #[pyfunction]
    #[pyo3(signature = (width, height, max_width=600, max_height=400))]
    pub fn fit_to_box(width: usize, height: usize, max_width: usize, max_height: usize) -> (usize, usize) {
        fit(width, height, DisplayBox::new(max_width, max_height))
    }

    #[pymodule]
    pub fn pointstag(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_class::<PyImageState>()?;

        // Transforms
        m.add_function(wrap_pyfunction!(grayscale, m)?)?;
        m.add_function(wrap_pyfunction!(logarithmic, m)?)?;
        m.add_function(wrap_pyfunction!(exponential, m)?)?;
        m.add_function(wrap_pyfunction!(linear, m)?)?;

        // Display
        m.add_function(wrap_pyfunction!(fit_to_box, m)?)?;

        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::pointstag;
