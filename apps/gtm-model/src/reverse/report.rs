//! Runs every reverse solver from one set of targets.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::activity::{ActivityPlan, PipelinePlan, activity_from_target, pipeline_coverage};
use super::capacity::{
    HeadcountPlan, QuotaPlan, TerritoryPlan, headcount_from_quota, quota_from_revenue,
    territory_plan,
};
use super::compensation::{
    CompensationStructure, RampPlan, SpiffPlan, compensation_structure, ramp_plan,
    spiff_structure,
};
use super::policy::ReversePolicy;
use crate::error::{ModelError, ensure_amount, ensure_multiplier, ensure_rate};
use crate::funnel::StageRates;
use crate::shared::MAX_RAMP_MONTHS;

/// Targets and assumptions for a reverse run.
///
/// Revenue and budget figures are annual unless the field name says
/// otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReverseInputs {
    /// Annual revenue target.
    pub revenue_target: Decimal,
    /// Reps carrying the target.
    pub num_reps: u32,
    /// Expected average attainment (fraction).
    pub expected_attainment: Decimal,
    /// Average annual quota for headcount planning.
    pub avg_quota_per_rep: Decimal,
    /// Average productivity of the team (fraction of a ramped rep).
    pub productivity_ramp: Decimal,
    /// Monthly revenue target for activity planning.
    pub monthly_revenue_target: Decimal,
    /// Average revenue per deal.
    pub avg_deal_size: Decimal,
    /// Days from first touch to close.
    pub sales_cycle_days: u32,
    /// Annual compensation budget for the team.
    pub comp_budget: Decimal,
    /// Market OTE per rep.
    pub market_ote: Decimal,
    /// Ramp length for a new hire.
    pub ramp_months: u32,
    /// Monthly production of a fully ramped rep.
    pub full_productivity_target: Decimal,
    /// Monthly OTE of a new hire.
    pub monthly_ote: Decimal,
    /// Total addressable market.
    pub total_tam: Decimal,
    /// Target share of the TAM (fraction).
    pub market_share_pct: Decimal,
    /// Revenue one rep can cover.
    pub rep_capacity: Decimal,
    /// Behavior the spiff program targets.
    pub spiff_label: String,
    /// Spiff budget.
    pub spiff_budget: Decimal,
}

impl Default for ReverseInputs {
    fn default() -> Self {
        Self {
            revenue_target: dec!(10000000),
            num_reps: 10,
            expected_attainment: dec!(0.9),
            avg_quota_per_rep: dec!(1200000),
            productivity_ramp: dec!(0.85),
            monthly_revenue_target: dec!(850000),
            avg_deal_size: dec!(17010),
            sales_cycle_days: 30,
            comp_budget: dec!(6000000),
            market_ote: dec!(600000),
            ramp_months: 6,
            full_productivity_target: dec!(100000),
            monthly_ote: dec!(50000),
            total_tam: dec!(500000000),
            market_share_pct: dec!(0.02),
            rep_capacity: dec!(1200000),
            spiff_label: "New Policies".to_string(),
            spiff_budget: dec!(120000),
        }
    }
}

impl ReverseInputs {
    /// Validate rates and amounts.
    pub fn validate(&self) -> Result<(), ModelError> {
        ensure_amount("reverse.revenue_target", self.revenue_target)?;
        ensure_multiplier("reverse.expected_attainment", self.expected_attainment)?;
        ensure_amount("reverse.avg_quota_per_rep", self.avg_quota_per_rep)?;
        ensure_rate("reverse.productivity_ramp", self.productivity_ramp)?;
        ensure_amount("reverse.monthly_revenue_target", self.monthly_revenue_target)?;
        ensure_amount("reverse.avg_deal_size", self.avg_deal_size)?;
        ensure_amount("reverse.comp_budget", self.comp_budget)?;
        ensure_amount("reverse.market_ote", self.market_ote)?;
        ensure_amount("reverse.full_productivity_target", self.full_productivity_target)?;
        ensure_amount("reverse.monthly_ote", self.monthly_ote)?;
        ensure_amount("reverse.total_tam", self.total_tam)?;
        ensure_rate("reverse.market_share_pct", self.market_share_pct)?;
        ensure_amount("reverse.rep_capacity", self.rep_capacity)?;
        ensure_amount("reverse.spiff_budget", self.spiff_budget)?;
        if self.ramp_months > MAX_RAMP_MONTHS {
            return Err(ModelError::invalid(
                "reverse.ramp_months",
                format!("must be at most {MAX_RAMP_MONTHS}"),
            ));
        }
        Ok(())
    }
}

/// Output of every reverse solver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReverseReport {
    /// Quota per rep.
    pub quota: QuotaPlan,
    /// Headcount and hiring pace.
    pub headcount: HeadcountPlan,
    /// Funnel activity behind the monthly target.
    pub activity: ActivityPlan,
    /// Pay mix within the budget.
    pub compensation: CompensationStructure,
    /// Pipeline coverage.
    pub pipeline: PipelinePlan,
    /// New-hire ramp.
    pub ramp: RampPlan,
    /// Territory split.
    pub territories: TerritoryPlan,
    /// Spiff program.
    pub spiff: SpiffPlan,
}

/// Run every solver. The solvers do not feed into each other.
#[must_use]
pub fn run_reverse(
    inputs: &ReverseInputs,
    rates: &StageRates,
    policy: &ReversePolicy,
) -> ReverseReport {
    ReverseReport {
        quota: quota_from_revenue(
            inputs.revenue_target,
            inputs.num_reps,
            inputs.expected_attainment,
        ),
        headcount: headcount_from_quota(
            inputs.revenue_target,
            inputs.avg_quota_per_rep,
            inputs.productivity_ramp,
            policy,
        ),
        activity: activity_from_target(
            inputs.monthly_revenue_target,
            rates,
            inputs.avg_deal_size,
            policy,
        ),
        compensation: compensation_structure(
            inputs.comp_budget,
            inputs.num_reps,
            inputs.market_ote,
            policy,
        ),
        pipeline: pipeline_coverage(
            inputs.monthly_revenue_target,
            rates.close_rate,
            inputs.sales_cycle_days,
            policy,
        ),
        ramp: ramp_plan(
            inputs.full_productivity_target,
            inputs.ramp_months,
            inputs.monthly_ote,
            policy,
        ),
        territories: territory_plan(
            inputs.total_tam,
            inputs.market_share_pct,
            inputs.rep_capacity,
            policy,
        ),
        spiff: spiff_structure(
            &inputs.spiff_label,
            inputs.spiff_budget,
            inputs.num_reps,
            policy,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_reverse_defaults() {
        let report = run_reverse(
            &ReverseInputs::default(),
            &StageRates::default(),
            &ReversePolicy::default(),
        );

        assert_eq!(report.quota.expected_revenue_per_rep, dec!(1000000));
        assert_eq!(report.compensation.ote_per_rep, dec!(600000));
        assert_eq!(report.compensation.base_pct, dec!(0.50));
        assert_eq!(report.ramp.months.len(), 6);
        assert_eq!(report.territories.target_revenue, dec!(10000000));
        assert_eq!(report.spiff.per_rep_budget, dec!(12000));
    }

    #[test]
    fn test_run_reverse_with_zero_reps_does_not_fail() {
        let inputs = ReverseInputs {
            num_reps: 0,
            ..ReverseInputs::default()
        };
        let report = run_reverse(&inputs, &StageRates::default(), &ReversePolicy::default());

        assert_eq!(report.quota.quota_per_rep, Decimal::ZERO);
        assert_eq!(report.compensation, CompensationStructure::default());
        assert_eq!(report.spiff.per_rep_budget, Decimal::ZERO);
    }

    #[test]
    fn test_validate_rejects_share_above_one() {
        let inputs = ReverseInputs {
            market_share_pct: dec!(1.5),
            ..ReverseInputs::default()
        };
        assert!(inputs.validate().is_err());
        assert!(ReverseInputs::default().validate().is_ok());
    }

    #[test]
    fn test_validate_caps_ramp_length() {
        let at_cap = ReverseInputs {
            ramp_months: MAX_RAMP_MONTHS,
            ..ReverseInputs::default()
        };
        assert!(at_cap.validate().is_ok());

        let too_long = ReverseInputs {
            ramp_months: MAX_RAMP_MONTHS + 1,
            ..ReverseInputs::default()
        };
        assert!(too_long.validate().is_err());
    }
}
