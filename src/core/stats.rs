//! Slice statistics shared by the indicators.

use crate::core::error::TradekitError;
use crate::core::Result;

/// Arithmetic mean. NaN for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divides by n). NaN for an empty slice.
pub fn population_std(values: &[f64]) -> f64 {
    let mean = mean(values);
    if mean.is_nan() {
        return f64::NAN;
    }
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// First differences: `out[i] = values[i + 1] - values[i]`.
pub fn diff(values: &[f64]) -> Vec<f64> {
    values.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Log returns between consecutive prices.
///
/// Prices must be strictly positive and finite.
pub fn log_returns(prices: &[f64]) -> Result<Vec<f64>> {
    if let Some(bad) = prices.iter().find(|p| !(p.is_finite() && **p > 0.0)) {
        return Err(TradekitError::degenerate_input(format!(
            "log return of non-positive price {bad}"
        )));
    }
    Ok(prices.windows(2).map(|w| (w[1] / w[0]).ln()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean_and_std() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(mean(&data), 5.0);
        assert_relative_eq!(population_std(&data), 2.0);
        assert!(mean(&[]).is_nan());
        assert!(population_std(&[]).is_nan());
    }

    #[test]
    fn test_diff() {
        assert_eq!(diff(&[1.0, 3.0, 2.0]), vec![2.0, -1.0]);
        assert!(diff(&[1.0]).is_empty());
    }

    #[test]
    fn test_log_returns() {
        let r = log_returns(&[1.0, std::f64::consts::E, 1.0]).unwrap();
        assert_relative_eq!(r[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(r[1], -1.0, epsilon = 1e-12);

        assert!(log_returns(&[1.0, 0.0]).is_err());
        assert!(log_returns(&[1.0, -2.0]).is_err());
    }
}
