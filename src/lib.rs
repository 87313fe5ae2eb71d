// Suppress warning from PyO3 macro expansion (fixed in newer PyO3 versions)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

//! Tradekit - quantitative-finance calculations on price and forecast series.
//!
//! This crate provides:
//! - Monte Carlo price-path simulation with a caller-supplied generator
//! - Relative Strength Index (RSI)
//! - Parabolic SAR trailing stops (long side)
//! - Wisdom-of-crowds forecast aggregation
//! - VIX-style volatility estimate from option quotes
//!
//! Every routine is a pure function of its inputs and returns a
//! [`Result`](core::Result).

pub mod core;
pub mod forecast;
pub mod indicators;
#[cfg(feature = "python")]
pub mod python;
pub mod simulation;
pub mod stops;

pub use crate::core::{PricePathMatrix, Result, SarConfig, SimulationConfig, TradekitError};
pub use forecast::crowd::wisdom_of_crowds as aggregate;
pub use indicators::momentum::rsi as compute_rsi;
pub use indicators::volatility::vix_estimate as estimate_vix;
pub use simulation::monte_carlo::{simulate, simulate_seeded};
pub use stops::parabolic::parabolic_sar as compute_parabolic_sar;

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Python module entry point
#[cfg(feature = "python")]
#[pymodule]
fn _tradekit(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(python::bindings::simulate, m)?)?;
    m.add_function(wrap_pyfunction!(python::bindings::rsi, m)?)?;
    m.add_function(wrap_pyfunction!(python::bindings::parabolic_sar, m)?)?;
    m.add_function(wrap_pyfunction!(python::bindings::wisdom_of_crowds, m)?)?;
    m.add_function(wrap_pyfunction!(python::bindings::vix, m)?)?;

    Ok(())
}
