//! PyO3 function bindings for Tradekit.

use numpy::{PyArray1, PyArray2, PyReadonlyArray1, PyReadonlyArray2};
use pyo3::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::types::{DEFAULT_ACCELERATION, DEFAULT_MAX_ACCELERATION, DEFAULT_RSI_PERIOD};
use crate::{forecast, indicators, simulation, stops};

use super::numpy_bridge::*;

/// Monte Carlo price paths, shape (simulation_count, day_count).
///
/// Without a seed the generator is seeded from OS entropy.
#[pyfunction]
#[pyo3(signature = (initial_price, day_count, simulation_count, seed=None))]
pub fn simulate<'py>(
    py: Python<'py>,
    initial_price: f64,
    day_count: usize,
    simulation_count: usize,
    seed: Option<u64>,
) -> PyResult<&'py PyArray2<f64>> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let paths = simulation::simulate(&mut rng, initial_price, day_count, simulation_count)?;
    rows_to_numpy_f64(py, paths.rows())
}

/// Relative Strength Index of the whole series.
#[pyfunction]
#[pyo3(signature = (data, period=DEFAULT_RSI_PERIOD))]
pub fn rsi(data: PyReadonlyArray1<f64>, period: usize) -> PyResult<f64> {
    let vec = numpy_to_vec_f64(data);
    Ok(indicators::momentum::rsi(&vec, period)?)
}

/// Parabolic SAR series.
#[pyfunction]
#[pyo3(signature = (data, acceleration=DEFAULT_ACCELERATION, max_acceleration=DEFAULT_MAX_ACCELERATION))]
pub fn parabolic_sar<'py>(
    py: Python<'py>,
    data: PyReadonlyArray1<f64>,
    acceleration: f64,
    max_acceleration: f64,
) -> PyResult<&'py PyArray1<f64>> {
    let vec = numpy_to_vec_f64(data);
    let result = stops::parabolic::parabolic_sar(&vec, acceleration, max_acceleration)?;
    Ok(vec_to_numpy_f64(py, result))
}

/// Column-wise mean of a (forecasters x horizon) panel.
#[pyfunction]
pub fn wisdom_of_crowds<'py>(
    py: Python<'py>,
    forecasts: PyReadonlyArray2<f64>,
) -> PyResult<&'py PyArray1<f64>> {
    let rows = numpy_to_rows_f64(forecasts);
    let result = forecast::crowd::wisdom_of_crowds(&rows)?;
    Ok(vec_to_numpy_f64(py, result))
}

/// VIX-like estimate from interleaved call/put quotes.
#[pyfunction]
pub fn vix(option_prices: PyReadonlyArray1<f64>, days_to_expiry: f64) -> PyResult<f64> {
    let vec = numpy_to_vec_f64(option_prices);
    Ok(indicators::volatility::vix_estimate(&vec, days_to_expiry)?)
}
