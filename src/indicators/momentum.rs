//! Momentum indicators: RSI.

use crate::core::error::TradekitError;
use crate::core::stats::{diff, mean};
use crate::core::Result;

/// Mean of the first `period` values, or 0.0 when there are none.
fn seed_average(values: &[f64], period: usize) -> f64 {
    let window = &values[..values.len().min(period)];
    if window.is_empty() {
        0.0
    } else {
        mean(window)
    }
}

/// Relative Strength Index (RSI) of a whole price series.
///
/// The averages are seeded from the first `period` entries of the
/// compacted gain and loss lists (only rising moves in one, only falling
/// moves in the other), then Wilder-smoothed over the differences
/// `diff[period - 1..]`.
///
/// # Arguments
/// * `data` - Price data (typically close prices), more than `period` points
/// * `period` - Lookback period (default: 14)
///
/// # Returns
/// Final RSI value (0-100 scale). A zero average loss has no finite
/// relative strength and is reported as `DegenerateInput`.
pub fn rsi(data: &[f64], period: usize) -> Result<f64> {
    if period == 0 {
        return Err(TradekitError::invalid_parameter("RSI period must be > 0"));
    }
    let n = data.len();
    if n <= period {
        return Err(TradekitError::insufficient_data(period + 1, n));
    }

    let price_diff = diff(data);

    let gains: Vec<f64> = price_diff.iter().copied().filter(|&d| d > 0.0).collect();
    let losses: Vec<f64> = price_diff.iter().filter(|&&d| d < 0.0).map(|&d| -d).collect();

    let mut avg_gain = seed_average(&gains, period);
    let mut avg_loss = seed_average(&losses, period);

    // Wilder's smoothing
    let weight = (period - 1) as f64;
    for i in period..n {
        let change = price_diff[i - 1];
        let gain = if change > 0.0 { change } else { 0.0 };
        let loss = if change < 0.0 { -change } else { 0.0 };

        avg_gain = (weight * avg_gain + gain) / period as f64;
        avg_loss = (weight * avg_loss + loss) / period as f64;
    }

    if avg_loss == 0.0 {
        return Err(TradekitError::degenerate_input("RSI average loss is zero"));
    }

    let rs = avg_gain / avg_loss;
    Ok(100.0 - (100.0 / (1.0 + rs)))
}
