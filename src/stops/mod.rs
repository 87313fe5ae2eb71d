//! Trailing-stop series for Tradekit.

pub mod parabolic;

pub use parabolic::{parabolic_sar, parabolic_sar_with};
