//! Core data types for Tradekit.

use serde::{Deserialize, Serialize};

use crate::core::error::TradekitError;

/// Type alias for price values.
pub type Price = f64;

/// Default RSI lookback period.
pub const DEFAULT_RSI_PERIOD: usize = 14;

/// Default Parabolic SAR acceleration step.
pub const DEFAULT_ACCELERATION: f64 = 0.02;

/// Default Parabolic SAR acceleration cap.
pub const DEFAULT_MAX_ACCELERATION: f64 = 0.2;

/// Simulated price paths, one row per simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPricePathMatrix")]
pub struct PricePathMatrix {
    rows: Vec<Vec<Price>>,
    day_count: usize,
}

/// Unchecked wire form of [`PricePathMatrix`].
#[derive(Deserialize)]
struct RawPricePathMatrix {
    rows: Vec<Vec<Price>>,
    day_count: usize,
}

impl TryFrom<RawPricePathMatrix> for PricePathMatrix {
    type Error = TradekitError;

    fn try_from(raw: RawPricePathMatrix) -> Result<Self, Self::Error> {
        if raw.day_count == 0 {
            return Err(TradekitError::invalid_dimension("day_count", 0));
        }
        if raw.rows.is_empty() {
            return Err(TradekitError::invalid_dimension("simulation_count", 0));
        }
        if let Some(row) = raw.rows.iter().find(|r| r.len() != raw.day_count) {
            return Err(TradekitError::length_mismatch(raw.day_count, row.len()));
        }
        Ok(Self { rows: raw.rows, day_count: raw.day_count })
    }
}

impl PricePathMatrix {
    /// Wrap already-simulated rows. Every row must hold `day_count` prices.
    pub(crate) fn from_rows(rows: Vec<Vec<Price>>, day_count: usize) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == day_count));
        Self { rows, day_count }
    }

    /// Shape as `(simulation_count, day_count)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.day_count)
    }

    /// Number of simulated paths.
    #[inline]
    pub fn simulation_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of days per path.
    #[inline]
    pub fn day_count(&self) -> usize {
        self.day_count
    }

    /// Get a single path.
    pub fn row(&self, index: usize) -> Option<&[Price]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// All paths.
    pub fn rows(&self) -> &[Vec<Price>] {
        &self.rows
    }

    /// Final price of every path.
    pub fn terminal_values(&self) -> Vec<Price> {
        self.rows
            .iter()
            .filter_map(|r| r.last().copied())
            .collect()
    }

    /// Consume the matrix, returning its rows.
    pub fn into_rows(self) -> Vec<Vec<Price>> {
        self.rows
    }
}

/// Configuration for a seeded Monte Carlo run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub initial_price: Price,
    pub day_count: usize,
    pub simulation_count: usize,
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { initial_price: 100.0, day_count: 30, simulation_count: 10, seed: 42 }
    }
}

/// Parabolic SAR acceleration settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SarConfig {
    /// Acceleration step (and reset value).
    pub acceleration: f64,
    /// Upper bound for the acceleration factor.
    pub max_acceleration: f64,
}

impl Default for SarConfig {
    fn default() -> Self {
        Self { acceleration: DEFAULT_ACCELERATION, max_acceleration: DEFAULT_MAX_ACCELERATION }
    }
}
