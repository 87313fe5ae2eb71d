//! Volatility indicators: VIX-style estimate from option quotes.

use tracing::{debug, warn};

use crate::core::error::TradekitError;
use crate::core::stats::{log_returns, population_std};
use crate::core::Result;

/// Split an interleaved quote series into (calls, puts).
///
/// Even indices are calls, odd indices are puts. With an odd length the
/// call leg keeps the extra trailing quote.
pub fn split_call_put(option_prices: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let calls = option_prices.iter().step_by(2).copied().collect();
    let puts = option_prices.iter().skip(1).step_by(2).copied().collect();
    (calls, puts)
}

fn check_expiry(days_to_expiry: f64) -> Result<()> {
    if !(days_to_expiry.is_finite() && days_to_expiry > 0.0) {
        return Err(TradekitError::invalid_parameter(format!(
            "days to expiry must be > 0, got {days_to_expiry}"
        )));
    }
    Ok(())
}

/// Volatility of one option leg.
///
/// Population standard deviation of the leg's log returns, divided by
/// `sqrt(days_to_expiry)`.
pub fn leg_volatility(prices: &[f64], days_to_expiry: f64) -> Result<f64> {
    check_expiry(days_to_expiry)?;
    if prices.len() < 2 {
        return Err(TradekitError::insufficient_data(2, prices.len()));
    }
    let returns = log_returns(prices)?;
    Ok(population_std(&returns) / days_to_expiry.sqrt())
}

/// VIX-like volatility index.
///
/// # Arguments
/// * `option_prices` - Interleaved call/put quotes (call at even index)
/// * `days_to_expiry` - Days until expiry (must be > 0)
///
/// # Returns
/// 100 x the mean of the call-leg and put-leg volatilities
pub fn vix_estimate(option_prices: &[f64], days_to_expiry: f64) -> Result<f64> {
    check_expiry(days_to_expiry)?;
    if option_prices.len() < 4 {
        return Err(TradekitError::insufficient_data(4, option_prices.len()));
    }

    let (calls, puts) = split_call_put(option_prices);
    if calls.len() != puts.len() {
        warn!(quotes = option_prices.len(), "odd quote count, trailing call has no put");
    }
    debug!(calls = calls.len(), puts = puts.len(), days_to_expiry, "estimating vix");

    let call_volatility = leg_volatility(&calls, days_to_expiry)?;
    let put_volatility = leg_volatility(&puts, days_to_expiry)?;

    Ok(100.0 * (call_volatility + put_volatility) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_split_call_put() {
        let (calls, puts) = split_call_put(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(calls, vec![1.0, 3.0, 5.0]);
        assert_eq!(puts, vec![2.0, 4.0]);
    }

    #[test]
    fn test_constant_leg_is_zero() {
        assert_eq!(leg_volatility(&[3.0, 3.0, 3.0], 1.0).unwrap(), 0.0);
    }

    #[test]
    fn test_leg_rejects_bad_expiry() {
        let prices = [1.0, 2.0, 4.0];
        for days in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                leg_volatility(&prices, days),
                Err(TradekitError::InvalidParameter { .. })
            ));
        }
        assert_eq!(leg_volatility(&[1.0], 1.0), Err(TradekitError::insufficient_data(2, 1)));
    }

    #[test]
    fn test_vix_odd_length_keeps_trailing_call() {
        // calls [1, e, 1]: std 1 ; puts [2, 2]: std 0
        let e = std::f64::consts::E;
        let prices = [1.0, 2.0, e, 2.0, 1.0];
        assert_relative_eq!(vix_estimate(&prices, 1.0).unwrap(), 50.0, epsilon = 1e-10);
    }

    #[test]
    fn test_vix_known_value() {
        // calls 1 -> e -> 1: log returns +1, -1, std 1
        // puts constant: std 0
        let e = std::f64::consts::E;
        let prices = [1.0, 2.0, e, 2.0, 1.0, 2.0];
        assert_relative_eq!(vix_estimate(&prices, 1.0).unwrap(), 50.0, epsilon = 1e-10);
        assert_relative_eq!(vix_estimate(&prices, 4.0).unwrap(), 25.0, epsilon = 1e-10);
    }

    #[test]
    fn test_vix_rejects_bad_input() {
        let prices = [1.0, 2.0, 3.0, 4.0];
        assert!(matches!(
            vix_estimate(&prices, 0.0),
            Err(TradekitError::InvalidParameter { .. })
        ));
        assert!(matches!(
            vix_estimate(&prices, f64::NAN),
            Err(TradekitError::InvalidParameter { .. })
        ));
        assert_eq!(
            vix_estimate(&[1.0, 2.0, 3.0], 30.0),
            Err(TradekitError::insufficient_data(4, 3))
        );
        assert!(matches!(
            vix_estimate(&[1.0, 2.0, 0.0, 4.0], 30.0),
            Err(TradekitError::DegenerateInput { .. })
        ));
    }
}
