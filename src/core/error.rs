//! Error types for Tradekit.

use thiserror::Error;

/// Result type alias for Tradekit operations.
pub type Result<T> = std::result::Result<T, TradekitError>;

/// Error types for the calculation routines.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TradekitError {
    /// A size parameter that must be positive was zero.
    #[error("Invalid dimension: {name} must be >= 1, got {value}")]
    InvalidDimension { name: &'static str, value: usize },

    /// Insufficient data for calculation.
    #[error("Insufficient data: need at least {required} elements, got {available}")]
    InsufficientData { required: usize, available: usize },

    /// A division or logarithm with no finite result.
    #[error("Degenerate input in {context}")]
    DegenerateInput { context: String },

    /// Invalid parameter value.
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// Row length mismatch inside a 2D input.
    #[error("Data length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

impl TradekitError {
    /// Create an invalid dimension error.
    pub fn invalid_dimension(name: &'static str, value: usize) -> Self {
        Self::InvalidDimension { name, value }
    }

    /// Create an insufficient data error.
    pub fn insufficient_data(required: usize, available: usize) -> Self {
        Self::InsufficientData {
            required,
            available,
        }
    }

    /// Create a degenerate input error.
    pub fn degenerate_input(context: impl Into<String>) -> Self {
        Self::DegenerateInput {
            context: context.into(),
        }
    }

    /// Create an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Create a length mismatch error.
    pub fn length_mismatch(expected: usize, actual: usize) -> Self {
        Self::LengthMismatch { expected, actual }
    }
}

#[cfg(feature = "python")]
impl From<TradekitError> for pyo3::PyErr {
    fn from(err: TradekitError) -> pyo3::PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}
