//! Core types and utilities for Tradekit.

pub mod error;
pub mod stats;
pub mod types;

pub use error::{Result, TradekitError};
pub use types::*;
