//! Funnel stage arithmetic.

use rust_decimal::Decimal;
use tracing::debug;

use super::types::{FunnelResult, StageRates};
use crate::shared::{clamp_rate, non_negative};

/// Convert lead volume into contacts, meetings and sales.
///
/// Rates are clamped into `[0, 1]` and negative lead counts are treated as
/// zero, so the result is always a non-negative, non-increasing sequence of
/// stage counts.
#[must_use]
pub fn compute_funnel(leads: Decimal, rates: &StageRates) -> FunnelResult {
    let leads = non_negative(leads);
    let contacts = leads * clamp_rate(rates.contact_rate);
    let meetings_scheduled = contacts * clamp_rate(rates.meeting_rate);
    let meetings_held = meetings_scheduled * clamp_rate(rates.show_up_rate);
    let sales = meetings_held * clamp_rate(rates.close_rate);

    debug!(
        leads = %leads,
        contacts = %contacts,
        meetings_scheduled = %meetings_scheduled,
        meetings_held = %meetings_held,
        sales = %sales,
        "Funnel computed"
    );

    FunnelResult {
        leads,
        contacts,
        meetings_scheduled,
        meetings_held,
        sales,
    }
}
