//! Wisdom-of-crowds forecast aggregation.

use crate::core::error::TradekitError;
use crate::core::Result;

/// Unweighted mean of a forecast panel across forecasters.
///
/// # Arguments
/// * `forecasts` - One row per forecaster, every row the same horizon length
///
/// # Returns
/// Column-wise mean, one value per horizon step
pub fn wisdom_of_crowds<T: AsRef<[f64]>>(forecasts: &[T]) -> Result<Vec<f64>> {
    let Some(first) = forecasts.first() else {
        return Err(TradekitError::insufficient_data(1, 0));
    };
    let horizon = first.as_ref().len();

    let mut result = vec![0.0; horizon];
    for forecast in forecasts {
        let forecast = forecast.as_ref();
        if forecast.len() != horizon {
            return Err(TradekitError::length_mismatch(horizon, forecast.len()));
        }
        for (acc, &value) in result.iter_mut().zip(forecast) {
            *acc += value;
        }
    }

    let count = forecasts.len() as f64;
    for acc in &mut result {
        *acc /= count;
    }

    Ok(result)
}
