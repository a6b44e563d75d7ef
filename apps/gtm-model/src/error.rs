//! Error types for the GTM model.
//!
//! The calculation engines are total: division by zero and out-of-range
//! rates are absorbed locally (see [`crate::shared::safe_div`] and
//! [`crate::shared::clamp_rate`]). Errors are only produced where a caller
//! explicitly asks for validation, either at configuration load time or at
//! the presentation boundary.
//!
//! Validation caps amounts, lead volume and multipliers (see
//! [`crate::shared::MAX_AMOUNT`] and friends) so that no product of accepted
//! inputs exceeds the range of `Decimal`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::{MAX_AMOUNT, MAX_MONTHLY_LEADS, MAX_MULTIPLIER};

/// Error codes for model validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Percentages that must total 100% do not.
    InvalidConfiguration,
    /// A rate or amount lies outside its permitted range.
    OutOfRange,
}

impl ErrorCode {
    /// Get the error reason string.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::InvalidConfiguration => "INVALID_CONFIGURATION",
            Self::OutOfRange => "OUT_OF_RANGE",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason())
    }
}

/// Validation error raised by model records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Configuration is structurally invalid (e.g. weights not summing to 100%).
    #[error("Invalid configuration for '{field}': {message}")]
    InvalidConfiguration {
        /// Field name.
        field: String,
        /// Error message.
        message: String,
    },

    /// A value is outside its permitted range.
    #[error("Value {value} for '{field}' is out of range [{min}, {max}]")]
    OutOfRange {
        /// Field name.
        field: String,
        /// Offending value.
        value: Decimal,
        /// Inclusive lower bound.
        min: Decimal,
        /// Inclusive upper bound.
        max: Decimal,
    },
}

impl ModelError {
    /// Create an invalid-configuration error.
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Get the error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidConfiguration { .. } => ErrorCode::InvalidConfiguration,
            Self::OutOfRange { .. } => ErrorCode::OutOfRange,
        }
    }
}

/// Reject a rate outside `[0, 1]`.
pub fn ensure_rate(field: &str, value: Decimal) -> Result<(), ModelError> {
    ensure_between(field, value, Decimal::ZERO, Decimal::ONE)
}

/// Reject a monetary amount outside `[0, MAX_AMOUNT]`.
pub fn ensure_amount(field: &str, value: Decimal) -> Result<(), ModelError> {
    ensure_between(field, value, Decimal::ZERO, MAX_AMOUNT)
}

/// Reject a monthly lead count outside `[0, MAX_MONTHLY_LEADS]`.
pub fn ensure_volume(field: &str, value: Decimal) -> Result<(), ModelError> {
    ensure_between(field, value, Decimal::ZERO, MAX_MONTHLY_LEADS)
}

/// Reject a multiplier or ratio outside `[0, MAX_MULTIPLIER]`.
pub fn ensure_multiplier(field: &str, value: Decimal) -> Result<(), ModelError> {
    ensure_between(field, value, Decimal::ZERO, MAX_MULTIPLIER)
}

/// Reject a value outside `[min, max]`.
pub fn ensure_between(
    field: &str,
    value: Decimal,
    min: Decimal,
    max: Decimal,
) -> Result<(), ModelError> {
    if value < min || value > max {
        return Err(ModelError::OutOfRange {
            field: field.to_string(),
            value,
            min,
            max,
        });
    }
    Ok(())
}
