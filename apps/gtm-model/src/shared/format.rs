//! Formatting utilities for report display.

use rust_decimal::Decimal;

use super::constants::{HUNDRED, PAYBACK_SENTINEL_MONTHS};

/// Format a fraction as a percentage string.
#[must_use]
pub fn format_pct(value: Decimal) -> String {
    format!("{:.2}%", value * HUNDRED)
}

/// Format a monetary amount with 2 decimal places.
#[must_use]
pub fn format_money(value: Decimal) -> String {
    format!("${value:.2}")
}

/// Format a ratio, `N/A` when it is zero (undefined).
#[must_use]
pub fn format_ratio(value: Decimal) -> String {
    if value.is_zero() {
        "N/A".to_string()
    } else {
        format!("{value:.2}x")
    }
}

/// Format a month count, `never` for the payback sentinel.
#[must_use]
pub fn format_months(value: Decimal) -> String {
    if value >= PAYBACK_SENTINEL_MONTHS {
        "never".to_string()
    } else {
        format!("{value:.1} mo")
    }
}
