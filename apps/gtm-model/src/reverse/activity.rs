//! Activity and pipeline solvers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::policy::ReversePolicy;
use crate::funnel::StageRates;
use crate::shared::{DAYS_PER_MONTH, clamp_rate, non_negative, safe_div};

/// Monthly activity needed to hit a revenue target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityPlan {
    /// Deals to close per month.
    pub monthly_deals: Decimal,
    /// Meetings to hold per month.
    pub meetings_held: Decimal,
    /// Meetings to schedule per month.
    pub meetings_scheduled: Decimal,
    /// Contacts to make per month.
    pub contacts: Decimal,
    /// Leads to source per month.
    pub monthly_leads: Decimal,
    /// Meetings to hold per week.
    pub weekly_meetings: Decimal,
    /// Leads to source per working day.
    pub daily_leads: Decimal,
    /// Contacts (calls connected) per working day.
    pub daily_contacts: Decimal,
}

/// Walk a monthly revenue target backward through the funnel.
///
/// Deals = target / deal size, then each earlier stage divides by its
/// conversion rate, in reverse order. A zero rate anywhere zeroes every
/// stage above it.
#[must_use]
pub fn activity_from_target(
    revenue_target: Decimal,
    rates: &StageRates,
    avg_deal_size: Decimal,
    policy: &ReversePolicy,
) -> ActivityPlan {
    let back = |count: Decimal, rate: Decimal| safe_div(count, clamp_rate(rate), Decimal::ZERO);

    let monthly_deals = safe_div(
        non_negative(revenue_target),
        non_negative(avg_deal_size),
        Decimal::ZERO,
    );
    let meetings_held = back(monthly_deals, rates.close_rate);
    let meetings_scheduled = back(meetings_held, rates.show_up_rate);
    let contacts = back(meetings_scheduled, rates.meeting_rate);
    let monthly_leads = back(contacts, rates.contact_rate);

    ActivityPlan {
        monthly_deals,
        meetings_held,
        meetings_scheduled,
        contacts,
        monthly_leads,
        weekly_meetings: safe_div(meetings_held, policy.weeks_per_month, Decimal::ZERO),
        daily_leads: safe_div(monthly_leads, policy.working_days_per_month, Decimal::ZERO),
        daily_contacts: safe_div(contacts, policy.working_days_per_month, Decimal::ZERO),
    }
}

/// Pipeline expected at one stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineStage {
    /// Stage name.
    pub name: String,
    /// Pipeline value at this stage.
    pub value: Decimal,
}

/// Pipeline needed to hit a revenue target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelinePlan {
    /// Target × coverage ratio.
    pub total_pipeline: Decimal,
    /// Coverage ratio used.
    pub coverage_ratio: Decimal,
    /// Target / close rate, for comparison with the fixed ratio.
    pub close_rate_pipeline: Decimal,
    /// Pipeline by stage.
    pub stages: Vec<PipelineStage>,
    /// Sales cycle length in months.
    pub cycle_months: Decimal,
    /// Pipeline to create per month to keep coverage.
    pub monthly_pipeline_generation: Decimal,
}

/// Total pipeline = target × coverage ratio, broken down by stage.
#[must_use]
pub fn pipeline_coverage(
    revenue_target: Decimal,
    close_rate: Decimal,
    sales_cycle_days: u32,
    policy: &ReversePolicy,
) -> PipelinePlan {
    let target = non_negative(revenue_target);
    let total_pipeline = target * policy.pipeline_coverage_ratio;
    let cycle_months = Decimal::from(sales_cycle_days) / DAYS_PER_MONTH;

    PipelinePlan {
        total_pipeline,
        coverage_ratio: policy.pipeline_coverage_ratio,
        close_rate_pipeline: safe_div(target, clamp_rate(close_rate), Decimal::ZERO),
        stages: policy
            .pipeline_stages
            .iter()
            .map(|stage| PipelineStage {
                name: stage.name.clone(),
                value: total_pipeline * stage.weight,
            })
            .collect(),
        cycle_months,
        monthly_pipeline_generation: safe_div(total_pipeline, cycle_months, total_pipeline),
    }
}
