// src/error.rs
use thiserror::Error;

/// Error types for the bs-pricer library
#[derive(Error, Debug)]
pub enum PricerError {
    /// A numeric input violates its positivity, finiteness or range constraint
    #[error("Domain error: parameter '{field}' = {value} {constraint}")]
    Domain {
        field: String,
        value: f64,
        constraint: String,
    },

    /// A selector (option type, sweep field, quantity, locale) was not recognized
    #[error("Invalid argument for '{argument}': '{value}' (expected {expected})")]
    InvalidArgument {
        argument: String,
        value: String,
        expected: String,
    },

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// CSV serialization failure
    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PricerError {
    pub fn invalid_argument(
        argument: impl Into<String>,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            argument: argument.into(),
            value: value.into(),
            expected: expected.into(),
        }
    }

    /// Name of the offending field for domain errors
    pub fn field(&self) -> Option<&str> {
        match self {
            PricerError::Domain { field, .. } => Some(field.as_str()),
            _ => None,
        }
    }
}

/// Result type alias for bs-pricer operations
pub type PricerResult<T> = Result<T, PricerError>;

/// Validation utilities
pub mod validation {
    use super::{PricerError, PricerResult};

    /// Validate that a parameter is strictly positive and finite
    pub fn validate_positive(name: &str, value: f64) -> PricerResult<()> {
        validate_finite(name, value)?;
        if value <= 0.0 {
            Err(PricerError::Domain {
                field: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is within a closed range
    pub fn validate_range(name: &str, value: f64, min: f64, max: f64) -> PricerResult<()> {
        validate_finite(name, value)?;
        if value < min || value > max {
            Err(PricerError::Domain {
                field: name.to_string(),
                value,
                constraint: format!("must be in range [{}, {}]", min, max),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> PricerResult<()> {
        if !value.is_finite() {
            Err(PricerError::Domain {
                field: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }
}
