//! Shared numeric helpers used by every calculation engine.

mod constants;
mod format;
mod math;

pub use constants::{
    DAYS_PER_MONTH, HUNDRED, MAX_AMOUNT, MAX_CONTRACT_YEARS, MAX_MONTHLY_LEADS, MAX_MULTIPLIER,
    MAX_RAMP_MONTHS, MONTHS_PER_YEAR, PAYBACK_SENTINEL_MONTHS, QUARTERS_PER_YEAR, TOLERANCE,
};
pub use format::{format_money, format_months, format_pct, format_ratio};
pub use math::{approx_eq, ceil_count, clamp_rate, mean, non_negative, safe_div};
