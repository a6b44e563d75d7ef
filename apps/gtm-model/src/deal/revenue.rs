//! Monthly revenue recognition from closed deals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::economics::DealEconomics;
use crate::shared::non_negative;

/// Revenue recognized in one month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    /// Upfront carrier compensation for this month's sales.
    pub upfront: Decimal,
    /// Deferred carrier compensation realized this month.
    pub deferred: Decimal,
    /// Upfront + deferred.
    pub total: Decimal,
}

/// One point of a revenue schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenuePoint {
    /// Month number, starting at 1.
    pub month: u32,
    /// Revenue for that month.
    pub revenue: MonthlyRevenue,
}

/// Revenue for `month_number` given `sales_count` deals closed per month.
///
/// Deferred revenue is only included once `month_number` reaches the deal's
/// deferred timing. There is no sales ledger: the current month's sales
/// count stands in for the cohort sold `deferred_timing_months` earlier.
#[must_use]
pub fn calculate_monthly_revenue(
    sales_count: Decimal,
    deal: &DealEconomics,
    include_deferred: bool,
    month_number: u32,
) -> MonthlyRevenue {
    let sales_count = non_negative(sales_count);
    let upfront = sales_count * deal.upfront_cash;
    let deferred = if include_deferred && month_number >= deal.deferred_timing_months {
        sales_count * deal.deferred_cash
    } else {
        Decimal::ZERO
    };

    MonthlyRevenue {
        upfront,
        deferred,
        total: upfront + deferred,
    }
}

/// Month-by-month revenue for a steady monthly sales rate.
#[must_use]
pub fn revenue_schedule(
    sales_count: Decimal,
    deal: &DealEconomics,
    months: u32,
) -> Vec<RevenuePoint> {
    (1..=months)
        .map(|month| RevenuePoint {
            month,
            revenue: calculate_monthly_revenue(sales_count, deal, true, month),
        })
        .collect()
}
