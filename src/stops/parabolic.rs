//! Parabolic SAR trailing stop (long side only).

use crate::core::error::TradekitError;
use crate::core::types::{Price, SarConfig};
use crate::core::Result;

fn validate(acceleration: f64, max_acceleration: f64) -> Result<()> {
    if !(acceleration.is_finite() && acceleration > 0.0) {
        return Err(TradekitError::invalid_parameter(format!(
            "SAR acceleration must be > 0, got {acceleration}"
        )));
    }
    if !(max_acceleration.is_finite() && max_acceleration <= 1.0) {
        return Err(TradekitError::invalid_parameter(format!(
            "SAR max acceleration must be <= 1, got {max_acceleration}"
        )));
    }
    if acceleration > max_acceleration {
        return Err(TradekitError::invalid_parameter(format!(
            "SAR acceleration {acceleration} exceeds max acceleration {max_acceleration}"
        )));
    }
    Ok(())
}

/// Parabolic Stop-And-Reverse series.
///
/// Tracks an uptrend only; the stop never flips to the short side.
/// On a new high the acceleration factor steps up for the current bar and
/// then falls back to `acceleration` once the extreme point moves.
///
/// # Arguments
/// * `data` - Price data, at least one point
/// * `acceleration` - Acceleration step (default: 0.02)
/// * `max_acceleration` - Acceleration cap (default: 0.2)
///
/// # Returns
/// SAR values, same length as `data`, starting at `data[0]`
pub fn parabolic_sar(data: &[Price], acceleration: f64, max_acceleration: f64) -> Result<Vec<Price>> {
    validate(acceleration, max_acceleration)?;
    let Some(&first) = data.first() else {
        return Err(TradekitError::insufficient_data(1, 0));
    };

    let mut result = Vec::with_capacity(data.len());
    let mut sar = first;
    let mut extreme_point = first;
    let mut af = acceleration;
    result.push(sar);

    for &price in &data[1..] {
        let new_high = price > extreme_point;
        af = if new_high { (af + acceleration).min(max_acceleration) } else { acceleration };

        sar += af * (extreme_point - sar);
        result.push(sar);

        if new_high {
            extreme_point = price;
            af = acceleration.min(max_acceleration);
        }
    }

    Ok(result)
}

/// [`parabolic_sar`] with settings taken from a [`SarConfig`].
pub fn parabolic_sar_with(data: &[Price], config: &SarConfig) -> Result<Vec<Price>> {
    parabolic_sar(data, config.acceleration, config.max_acceleration)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_hand_computed() {
        // p=12: new high, af 0.04, sar = 10 + 0.04*0 = 10, ep -> 12, af -> 0.02
        // p=11: no high, af 0.02, sar = 10 + 0.02*2 = 10.04
        // p=13: new high, af 0.04, sar = 10.04 + 0.04*1.96 = 10.1184
        let result = parabolic_sar(&[10.0, 12.0, 11.0, 13.0], 0.02, 0.2).unwrap();
        assert_eq!(result.len(), 4);
        assert_relative_eq!(result[0], 10.0);
        assert_relative_eq!(result[1], 10.0);
        assert_relative_eq!(result[2], 10.04, epsilon = 1e-12);
        assert_relative_eq!(result[3], 10.1184, epsilon = 1e-12);
    }

    #[test]
    fn test_acceleration_capped() {
        // af = min(0.3 + 0.3, 0.5) = 0.5 on every new high
        let result = parabolic_sar(&[1.0, 2.0, 3.0], 0.3, 0.5).unwrap();
        assert_relative_eq!(result[1], 1.0);
        assert_relative_eq!(result[2], 1.5);
    }

    #[test]
    fn test_single_point() {
        assert_eq!(parabolic_sar(&[42.0], 0.02, 0.2).unwrap(), vec![42.0]);
    }

    #[test]
    fn test_with_config() {
        let data = [10.0, 12.0, 11.0, 13.0];
        assert_eq!(
            parabolic_sar_with(&data, &SarConfig::default()).unwrap(),
            parabolic_sar(&data, 0.02, 0.2).unwrap()
        );
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(parabolic_sar(&[], 0.02, 0.2), Err(TradekitError::insufficient_data(1, 0)));
        assert!(parabolic_sar(&[1.0], 0.0, 0.2).is_err());
        assert!(parabolic_sar(&[1.0], 0.3, 0.2).is_err());
        assert!(parabolic_sar(&[1.0], 0.02, 1.5).is_err());
        assert!(parabolic_sar(&[1.0], f64::NAN, 0.2).is_err());
    }
}
