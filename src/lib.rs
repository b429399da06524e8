//! PhotoStag
//!
//! Per-pixel photo filters: a traversal engine that rewrites every pixel of
//! an image in place, plus a catalog of sixteen color filters with exact,
//! reproducible integer and float arithmetic. Python bindings via PyO3 and
//! WASM bindings for JavaScript are available behind features.
//!
//! ## Image Format
//! Images are `u8` arrays of shape (height, width, channels). The catalog
//! filters read and write three channels (RGB); other channel counts are
//! rejected rather than guessed at:
//! - fewer than 3 channels: [`FilterError::ChannelOutOfRange`]
//! - more than 3 channels (e.g. RGBA): [`FilterError::ArityMismatch`]
//!
//! ## Example
//!
//! ```rust
//! use ndarray::Array3;
//! use photostag::{apply_named, find_filter};
//!
//! let mut image = Array3::<u8>::from_elem((2, 2, 3), 10);
//! apply_named(&mut image, "negative").unwrap();
//! assert_eq!(image[[0, 0, 0]], 245);
//!
//! let ocean = find_filter("ocean").unwrap();
//! assert_eq!(ocean.apply_to(&[30, 30, 30]).unwrap(), [10, 30, 90]);
//! ```
//!
//! ## Features
//! - `python`: PyO3 extension module `photostag`
//! - `wasm`: wasm-bindgen exports
//! - `cli`: the `filterize` batch driver and `image` crate integration

pub mod engine;
mod error;
pub mod filters;

#[cfg(feature = "cli")]
pub mod io;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use engine::{apply, apply_named, filter_buffer, filtered, PixelGrid};
pub use error::{FilterError, FilterResult};
pub use filters::{
    all_filters, filter_names, find_filter, select_filters, FilterFamily, FilterFn, PixelFilter,
    Rgb, GRAYSCALE_FILTERS, SIMPLE_FILTERS,
};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray3, PyReadonlyArray3};
    use pyo3::exceptions::{PyIndexError, PyValueError};
    use pyo3::prelude::*;

    use crate::engine::filtered;
    use crate::error::FilterError;
    use crate::filters;

    impl From<FilterError> for PyErr {
        fn from(err: FilterError) -> PyErr {
            match &err {
                FilterError::ChannelOutOfRange { .. } | FilterError::ArityMismatch { .. } => {
                    PyIndexError::new_err(err.to_string())
                }
                FilterError::UnknownFilter(_)
                | FilterError::InvalidDimensions(_)
                | FilterError::UnsupportedFormat(_) => {
                    PyValueError::new_err(err.to_string())
                }
            }
        }
    }

    /// Apply a named filter to an RGB u8 image.
    ///
    /// # Arguments
    /// * `image` - Image of shape (height, width, 3)
    /// * `name` - Catalog filter name, e.g. "negative" or "luminance"
    ///
    /// # Returns
    /// New filtered image with the same shape.
    ///
    /// Raises `ValueError` for an unknown name and `IndexError` when the
    /// image does not have exactly three channels.
    #[pyfunction]
    pub fn apply_filter<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        name: &str,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let filter = filters::find_filter(name)?;
        let result = filtered(image.as_array(), filter.func)?;
        Ok(result.into_pyarray(py))
    }

    /// Names of all filters, simple filters first.
    #[pyfunction]
    pub fn filter_names() -> Vec<&'static str> {
        filters::filter_names()
    }

    /// Family of a filter: "simple" or "grayscale".
    #[pyfunction]
    pub fn filter_family(name: &str) -> PyResult<&'static str> {
        Ok(filters::find_filter(name)?.family.as_str())
    }

    /// PhotoStag Rust extension module
    #[pymodule]
    pub fn photostag(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(apply_filter, m)?)?;
        m.add_function(wrap_pyfunction!(filter_names, m)?)?;
        m.add_function(wrap_pyfunction!(filter_family, m)?)?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::photostag;
