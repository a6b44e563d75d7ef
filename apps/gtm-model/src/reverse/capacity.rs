//! Quota, headcount and territory solvers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::policy::ReversePolicy;
use crate::shared::{
    MONTHS_PER_YEAR, QUARTERS_PER_YEAR, ceil_count, clamp_rate, non_negative, safe_div,
};

/// Quota each rep must carry to hit a revenue target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaPlan {
    /// Annual quota per rep.
    pub quota_per_rep: Decimal,
    /// Quarterly quota per rep.
    pub quota_quarterly: Decimal,
    /// Monthly quota per rep.
    pub quota_monthly: Decimal,
    /// Revenue each rep is expected to deliver at the given attainment.
    pub expected_revenue_per_rep: Decimal,
}

/// Quota per rep = target / reps / expected attainment.
///
/// Quota is inflated by the expected attainment so that a team hitting that
/// attainment on average still delivers the full target.
#[must_use]
pub fn quota_from_revenue(
    revenue_target: Decimal,
    num_reps: u32,
    expected_attainment: Decimal,
) -> QuotaPlan {
    let target = non_negative(revenue_target);
    let expected_revenue_per_rep = safe_div(target, Decimal::from(num_reps), Decimal::ZERO);
    let quota_per_rep = safe_div(
        expected_revenue_per_rep,
        non_negative(expected_attainment),
        Decimal::ZERO,
    );

    QuotaPlan {
        quota_per_rep,
        quota_quarterly: quota_per_rep / QUARTERS_PER_YEAR,
        quota_monthly: quota_per_rep / MONTHS_PER_YEAR,
        expected_revenue_per_rep,
    }
}

/// Reps needed to carry a revenue target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadcountPlan {
    /// Quota × productivity.
    pub effective_quota: Decimal,
    /// Reps needed with no attrition.
    pub base_headcount: u64,
    /// Reps needed with the attrition buffer.
    pub headcount_with_attrition: u64,
    /// Hires per quarter to reach `headcount_with_attrition`.
    pub quarterly_hiring_pace: u64,
}

/// Headcount = ⌈target / (quota × productivity)⌉, plus attrition buffer.
#[must_use]
pub fn headcount_from_quota(
    revenue_target: Decimal,
    avg_quota_per_rep: Decimal,
    productivity_ramp: Decimal,
    policy: &ReversePolicy,
) -> HeadcountPlan {
    let effective_quota = non_negative(avg_quota_per_rep) * clamp_rate(productivity_ramp);
    let base = safe_div(non_negative(revenue_target), effective_quota, Decimal::ZERO);
    let base_headcount = ceil_count(base);
    let headcount_with_attrition = ceil_count(
        Decimal::from(base_headcount) * (Decimal::ONE + non_negative(policy.attrition_buffer_pct)),
    );
    let quarterly_hiring_pace = ceil_count(safe_div(
        Decimal::from(headcount_with_attrition),
        Decimal::from(policy.hiring_quarters),
        Decimal::from(headcount_with_attrition),
    ));

    HeadcountPlan {
        effective_quota,
        base_headcount,
        headcount_with_attrition,
        quarterly_hiring_pace,
    }
}

/// One territory tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerritoryTier {
    /// Tier name.
    pub name: String,
    /// Share of target revenue.
    pub share: Decimal,
    /// Target revenue for the tier.
    pub revenue: Decimal,
    /// Territories needed for the tier.
    pub territories: u64,
}

/// Territory coverage for a market-share goal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerritoryPlan {
    /// TAM × target share.
    pub target_revenue: Decimal,
    /// Territories needed (one rep each).
    pub territory_count: u64,
    /// Tier breakdown.
    pub tiers: Vec<TerritoryTier>,
}

/// Split a market-share goal into rep-sized territories.
#[must_use]
pub fn territory_plan(
    total_tam: Decimal,
    target_market_share_pct: Decimal,
    rep_capacity: Decimal,
    policy: &ReversePolicy,
) -> TerritoryPlan {
    let target_revenue = non_negative(total_tam) * clamp_rate(target_market_share_pct);
    let capacity = non_negative(rep_capacity);
    let territories_for = |revenue: Decimal| ceil_count(safe_div(revenue, capacity, Decimal::ZERO));

    let tiers = policy
        .territory_tiers
        .iter()
        .map(|tier| {
            let revenue = target_revenue * tier.weight;
            TerritoryTier {
                name: tier.name.clone(),
                share: tier.weight,
                revenue,
                territories: territories_for(revenue),
            }
        })
        .collect();

    TerritoryPlan {
        target_revenue,
        territory_count: territories_for(target_revenue),
        tiers,
    }
}
