//! Arithmetic guards shared by the engines.
//!
//! Every ratio in the crate goes through [`safe_div`] so that a zero
//! denominator yields a defined fallback instead of a panic.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::constants::TOLERANCE;

/// Divide, returning `fallback` when the denominator is zero.
#[must_use]
pub fn safe_div(numerator: Decimal, denominator: Decimal, fallback: Decimal) -> Decimal {
    if denominator.is_zero() {
        return fallback;
    }
    numerator.checked_div(denominator).unwrap_or(fallback)
}

/// Clamp a rate into `[0, 1]`.
#[must_use]
pub fn clamp_rate(rate: Decimal) -> Decimal {
    rate.clamp(Decimal::ZERO, Decimal::ONE)
}

/// Floor a monetary amount or count at zero.
#[must_use]
pub fn non_negative(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}

/// Arithmetic mean, zero for an empty slice.
#[must_use]
pub fn mean(values: &[Decimal]) -> Decimal {
    let sum: Decimal = values.iter().sum();
    safe_div(sum, Decimal::from(values.len() as u64), Decimal::ZERO)
}

/// Round a fractional head/territory count up to a whole number.
#[must_use]
pub fn ceil_count(value: Decimal) -> u64 {
    non_negative(value).ceil().to_u64().unwrap_or(u64::MAX)
}

/// Compare two decimals within [`TOLERANCE`].
#[must_use]
pub fn approx_eq(a: Decimal, b: Decimal) -> bool {
    (a - b).abs() < TOLERANCE
}
