//! Decimal constants for model calculations.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Percent scale.
pub const HUNDRED: Decimal = Decimal::ONE_HUNDRED;
/// Days per month when converting daily lead volume.
pub const DAYS_PER_MONTH: Decimal = Decimal::from_parts(30, 0, 0, false, 0);
/// Months per year.
pub const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);
/// Quarters per year.
pub const QUARTERS_PER_YEAR: Decimal = Decimal::from_parts(4, 0, 0, false, 0);

/// Reported for "months to X" metrics whose denominator is zero.
pub const PAYBACK_SENTINEL_MONTHS: Decimal = Decimal::from_parts(999, 0, 0, false, 0);

/// Comparison tolerance for derived amounts.
pub const TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 6); // 0.000001

/// Largest accepted monetary input (per field).
pub const MAX_AMOUNT: Decimal = dec!(1000000000000000);

/// Largest accepted monthly lead volume.
pub const MAX_MONTHLY_LEADS: Decimal = dec!(1000000000);

/// Largest accepted multiplier, coverage ratio or attainment.
pub const MAX_MULTIPLIER: Decimal = dec!(100);

/// Longest accepted contract term, in years.
pub const MAX_CONTRACT_YEARS: u32 = 100;

/// Longest accepted new-hire ramp, in months.
pub const MAX_RAMP_MONTHS: u32 = 120;
