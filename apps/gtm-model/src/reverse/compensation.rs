//! Compensation-structure, ramp and spiff solvers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::policy::ReversePolicy;
use crate::commission::AttainmentBand;
use crate::shared::{non_negative, safe_div};

/// Payout at one attainment band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceleratorTier {
    /// Attainment band.
    pub band: AttainmentBand,
    /// Multiplier on the variable target.
    pub multiplier: Decimal,
    /// Variable payout at this band.
    pub variable_payout: Decimal,
}

/// Base/variable split affordable within a budget.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationStructure {
    /// Budget per rep.
    pub ote_per_rep: Decimal,
    /// Budget per rep / market OTE.
    pub budget_ratio: Decimal,
    /// Base share of OTE.
    pub base_pct: Decimal,
    /// Variable share of OTE.
    pub variable_pct: Decimal,
    /// Base salary per rep.
    pub base_salary: Decimal,
    /// Variable target per rep.
    pub variable_target: Decimal,
    /// Variable payout at each attainment band.
    pub accelerators: Vec<AcceleratorTier>,
}

/// Derive a pay mix from a total compensation budget.
///
/// The base share steps down with the ratio of per-rep budget to market OTE:
/// `rich_base_pct` at or above `rich_budget_ratio`, `parity_base_pct` at or
/// above `parity_budget_ratio`, otherwise `lean_base_pct`.
#[must_use]
pub fn compensation_structure(
    total_budget: Decimal,
    num_reps: u32,
    market_ote: Decimal,
    policy: &ReversePolicy,
) -> CompensationStructure {
    if num_reps == 0 {
        return CompensationStructure::default();
    }

    let ote_per_rep = non_negative(total_budget) / Decimal::from(num_reps);
    let budget_ratio = safe_div(ote_per_rep, non_negative(market_ote), Decimal::ZERO);

    let base_pct = if budget_ratio >= policy.rich_budget_ratio {
        policy.rich_base_pct
    } else if budget_ratio >= policy.parity_budget_ratio {
        policy.parity_base_pct
    } else {
        policy.lean_base_pct
    };
    let variable_pct = Decimal::ONE - base_pct;
    let variable_target = ote_per_rep * variable_pct;

    let accelerators = AttainmentBand::ALL
        .into_iter()
        .map(|band| {
            let multiplier = policy.accelerators.multiplier(band);
            AcceleratorTier {
                band,
                multiplier,
                variable_payout: variable_target * multiplier,
            }
        })
        .collect();

    CompensationStructure {
        ote_per_rep,
        budget_ratio,
        base_pct,
        variable_pct,
        base_salary: ote_per_rep * base_pct,
        variable_target,
        accelerators,
    }
}

/// One month of a new rep's ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RampMonth {
    /// Month number, starting at 1.
    pub month: u32,
    /// Productivity as a fraction of a fully ramped rep.
    pub productivity: Decimal,
    /// Expected production.
    pub expected_production: Decimal,
    /// Expected earnings at this productivity.
    pub expected_earnings: Decimal,
    /// Draw paid on top of expected earnings.
    pub guarantee: Decimal,
}

/// Ramp schedule for a new hire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RampPlan {
    /// Month-by-month schedule.
    pub months: Vec<RampMonth>,
    /// Production expected over the ramp.
    pub total_expected_production: Decimal,
    /// Guarantee paid over the ramp.
    pub total_guarantee: Decimal,
}

/// Productivity curve and draw schedule over `ramp_months`.
///
/// The guarantee tops expected earnings up to `ramp_guarantee_pct` of
/// monthly OTE and is never negative.
#[must_use]
pub fn ramp_plan(
    full_productivity_target: Decimal,
    ramp_months: u32,
    monthly_ote: Decimal,
    policy: &ReversePolicy,
) -> RampPlan {
    let target = non_negative(full_productivity_target);
    let ote = non_negative(monthly_ote);
    let floor = ote * policy.ramp_guarantee_pct;

    let months: Vec<RampMonth> = (1..=ramp_months)
        .map(|month| {
            let productivity = policy.ramp_productivity(month);
            let expected_earnings = ote * productivity;
            RampMonth {
                month,
                productivity,
                expected_production: target * productivity,
                expected_earnings,
                guarantee: non_negative(floor - expected_earnings),
            }
        })
        .collect();

    RampPlan {
        total_expected_production: months.iter().map(|m| m.expected_production).sum(),
        total_guarantee: months.iter().map(|m| m.guarantee).sum(),
        months,
    }
}

/// Budget for one spiff category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpiffAllocation {
    /// Category name.
    pub name: String,
    /// Share of the spiff budget.
    pub share: Decimal,
    /// Category budget.
    pub budget: Decimal,
    /// Category budget per rep.
    pub per_rep: Decimal,
}

/// Spiff program for a behavior target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpiffPlan {
    /// Behavior the program targets.
    pub behavior_target: String,
    /// Total budget.
    pub total_budget: Decimal,
    /// Budget per rep.
    pub per_rep_budget: Decimal,
    /// Category breakdown.
    pub categories: Vec<SpiffAllocation>,
}

/// Split a spiff budget across the policy's categories.
#[must_use]
pub fn spiff_structure(
    behavior_target: &str,
    budget: Decimal,
    num_reps: u32,
    policy: &ReversePolicy,
) -> SpiffPlan {
    let total_budget = non_negative(budget);
    let reps = Decimal::from(num_reps);

    SpiffPlan {
        behavior_target: behavior_target.to_string(),
        total_budget,
        per_rep_budget: safe_div(total_budget, reps, Decimal::ZERO),
        categories: policy
            .spiff_categories
            .iter()
            .map(|category| {
                let budget = total_budget * category.weight;
                SpiffAllocation {
                    name: category.name.clone(),
                    share: category.weight,
                    budget,
                    per_rep: safe_div(budget, reps, Decimal::ZERO),
                }
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use test_case::test_case;

    #[test_case(dec!(1300000), dec!(0.60) ; "rich budget is base heavy")]
    #[test_case(dec!(1000000), dec!(0.50) ; "parity budget is even")]
    #[test_case(dec!(900000), dec!(0.50) ; "parity lower bound")]
    #[test_case(dec!(700000), dec!(0.40) ; "lean budget is variable heavy")]
    fn test_split_bands(budget: Decimal, base_pct: Decimal) {
        let structure = compensation_structure(budget, 1, dec!(1000000), &ReversePolicy::default());
        assert_eq!(structure.base_pct, base_pct);
        assert_eq!(structure.base_pct + structure.variable_pct, Decimal::ONE);
    }

    #[test]
    fn test_compensation_amounts_and_accelerators() {
        let structure =
            compensation_structure(dec!(6000000), 10, dec!(600000), &ReversePolicy::default());

        assert_eq!(structure.ote_per_rep, dec!(600000));
        assert_eq!(structure.budget_ratio, Decimal::ONE);
        assert_eq!(structure.base_salary, dec!(300000));
        assert_eq!(structure.variable_target, dec!(300000));
        assert_eq!(structure.accelerators.len(), 5);
        assert_eq!(structure.accelerators[4].band, AttainmentBand::Above150);
        assert_eq!(structure.accelerators[4].variable_payout, dec!(480000));
    }

    #[test]
    fn test_compensation_with_zero_reps() {
        let structure = compensation_structure(dec!(100), 0, dec!(100), &ReversePolicy::default());
        assert_eq!(structure, CompensationStructure::default());
    }

    #[test]
    fn test_ramp_plan_curve_and_guarantee() {
        let plan = ramp_plan(dec!(100000), 6, dec!(50000), &ReversePolicy::default());

        let productivity: Vec<Decimal> = plan.months.iter().map(|m| m.productivity).collect();
        assert_eq!(
            productivity,
            vec![dec!(0.25), dec!(0.40), dec!(0.60), dec!(0.75), dec!(0.85), dec!(1.00)]
        );
        // Floor 35000: month 1 earns 12500 → 22500; month 4 earns 37500 → 0
        assert_eq!(plan.months[0].guarantee, dec!(22500));
        assert_eq!(plan.months[1].guarantee, dec!(15000));
        assert_eq!(plan.months[2].guarantee, dec!(5000));
        assert_eq!(plan.months[3].guarantee, Decimal::ZERO);
        assert_eq!(plan.total_guarantee, dec!(42500));
        assert_eq!(plan.total_expected_production, dec!(385000));
    }

    #[test]
    fn test_ramp_beyond_curve_is_fully_productive() {
        let plan = ramp_plan(dec!(1000), 8, dec!(100), &ReversePolicy::default());
        assert_eq!(plan.months.len(), 8);
        assert_eq!(plan.months[7].productivity, Decimal::ONE);
        assert!(ramp_plan(dec!(1000), 0, dec!(100), &ReversePolicy::default()).months.is_empty());
    }

    #[test]
    fn test_spiff_split() {
        let plan = spiff_structure("Faster follow-up", dec!(100000), 10, &ReversePolicy::default());

        let budgets: Vec<Decimal> = plan.categories.iter().map(|c| c.budget).collect();
        assert_eq!(
            budgets,
            vec![dec!(30000), dec!(25000), dec!(20000), dec!(15000), dec!(10000)]
        );
        assert_eq!(plan.per_rep_budget, dec!(10000));
        assert_eq!(plan.categories[0].per_rep, dec!(3000));
        assert_eq!(plan.behavior_target, "Faster follow-up");
    }

    #[test]
    fn test_spiff_with_zero_reps() {
        let plan = spiff_structure("Referrals", dec!(5000), 0, &ReversePolicy::default());
        assert_eq!(plan.per_rep_budget, Decimal::ZERO);
        assert!(plan.categories.iter().all(|c| c.per_rep.is_zero()));
    }
}
