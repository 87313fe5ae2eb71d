//! Technical indicators for Tradekit.
//!
//! All indicators are implemented as pure functions that take slice inputs
//! and return a single value for the whole series.

pub mod momentum;
pub mod volatility;

pub use momentum::rsi;
pub use volatility::{leg_volatility, split_call_put, vix_estimate};
