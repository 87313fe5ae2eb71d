//! Conversions between numpy arrays and Rust vectors.

use numpy::{PyArray1, PyArray2, PyReadonlyArray1, PyReadonlyArray2};
use pyo3::prelude::*;

/// Convert numpy array to Vec<f64>.
pub fn numpy_to_vec_f64(arr: PyReadonlyArray1<f64>) -> Vec<f64> {
    arr.as_array().iter().copied().collect()
}

/// Convert a 2D numpy array to one Vec<f64> per row.
pub fn numpy_to_rows_f64(arr: PyReadonlyArray2<f64>) -> Vec<Vec<f64>> {
    arr.as_array()
        .outer_iter()
        .map(|row| row.iter().copied().collect())
        .collect()
}

/// Convert Vec<f64> to numpy array.
pub fn vec_to_numpy_f64<'py>(py: Python<'py>, vec: Vec<f64>) -> &'py PyArray1<f64> {
    PyArray1::from_vec(py, vec)
}

/// Convert equal-length rows to a 2D numpy array.
pub fn rows_to_numpy_f64<'py>(py: Python<'py>, rows: &[Vec<f64>]) -> PyResult<&'py PyArray2<f64>> {
    Ok(PyArray2::from_vec2(py, rows)?)
}
