//! Policy constants for the reverse solvers.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::commission::AttainmentTable;
use crate::error::{ModelError, ensure_multiplier, ensure_rate};

/// A named share or multiplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedBucket {
    /// Display name.
    pub name: String,
    /// Share (fraction) or multiplier, depending on the table.
    pub weight: Decimal,
}

impl WeightedBucket {
    fn new(name: &str, weight: Decimal) -> Self {
        Self {
            name: name.to_string(),
            weight,
        }
    }
}

/// Tunable constants used by the reverse solvers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReversePolicy {
    /// Extra hires to cover attrition.
    pub attrition_buffer_pct: Decimal,
    /// Quarters over which hiring is spread.
    pub hiring_quarters: u32,
    /// Selling days per month.
    pub working_days_per_month: Decimal,
    /// Weeks per month for weekly activity targets.
    pub weeks_per_month: Decimal,
    /// Budget/market ratio at or above which the split is base-heavy.
    pub rich_budget_ratio: Decimal,
    /// Budget/market ratio at or above which the split is even.
    pub parity_budget_ratio: Decimal,
    /// Base share when the budget is rich.
    pub rich_base_pct: Decimal,
    /// Base share at parity.
    pub parity_base_pct: Decimal,
    /// Base share when the budget is lean.
    pub lean_base_pct: Decimal,
    /// Accelerator multipliers per attainment band.
    pub accelerators: AttainmentTable,
    /// Pipeline needed per unit of revenue target.
    pub pipeline_coverage_ratio: Decimal,
    /// Share of total pipeline expected at each stage.
    pub pipeline_stages: Vec<WeightedBucket>,
    /// Productivity by ramp month; months past the curve are at 100%.
    pub ramp_curve: Vec<Decimal>,
    /// Guaranteed share of OTE during ramp.
    pub ramp_guarantee_pct: Decimal,
    /// Territory tier shares of target revenue.
    pub territory_tiers: Vec<WeightedBucket>,
    /// Spiff category shares of the spiff budget.
    pub spiff_categories: Vec<WeightedBucket>,
}

impl Default for ReversePolicy {
    fn default() -> Self {
        Self {
            attrition_buffer_pct: dec!(0.15),
            hiring_quarters: 4,
            working_days_per_month: dec!(22),
            weeks_per_month: dec!(4),
            rich_budget_ratio: dec!(1.1),
            parity_budget_ratio: dec!(0.9),
            rich_base_pct: dec!(0.60),
            parity_base_pct: dec!(0.50),
            lean_base_pct: dec!(0.40),
            accelerators: AttainmentTable::default(),
            pipeline_coverage_ratio: dec!(3.5),
            pipeline_stages: vec![
                WeightedBucket::new("Prospecting", dec!(1.00)),
                WeightedBucket::new("Qualified", dec!(0.60)),
                WeightedBucket::new("Proposal", dec!(0.35)),
                WeightedBucket::new("Negotiation", dec!(0.20)),
            ],
            ramp_curve: vec![
                dec!(0.25),
                dec!(0.40),
                dec!(0.60),
                dec!(0.75),
                dec!(0.85),
                dec!(1.00),
            ],
            ramp_guarantee_pct: dec!(0.70),
            territory_tiers: vec![
                WeightedBucket::new("Enterprise", dec!(0.20)),
                WeightedBucket::new("Mid-Market", dec!(0.50)),
                WeightedBucket::new("SMB", dec!(0.30)),
            ],
            spiff_categories: vec![
                WeightedBucket::new("New Policies", dec!(0.30)),
                WeightedBucket::new("Speed to Close", dec!(0.25)),
                WeightedBucket::new("Premium Upsell", dec!(0.20)),
                WeightedBucket::new("Referrals", dec!(0.15)),
                WeightedBucket::new("Activity", dec!(0.10)),
            ],
        }
    }
}

impl ReversePolicy {
    /// Productivity for a 1-based ramp month.
    #[must_use]
    pub fn ramp_productivity(&self, month: u32) -> Decimal {
        let idx = month.saturating_sub(1) as usize;
        self.ramp_curve.get(idx).copied().unwrap_or(Decimal::ONE)
    }

    /// Validate rates and shares.
    pub fn validate(&self) -> Result<(), ModelError> {
        ensure_multiplier("reverse.attrition_buffer_pct", self.attrition_buffer_pct)?;
        ensure_multiplier("reverse.pipeline_coverage_ratio", self.pipeline_coverage_ratio)?;
        ensure_rate("reverse.ramp_guarantee_pct", self.ramp_guarantee_pct)?;
        ensure_rate("reverse.rich_base_pct", self.rich_base_pct)?;
        ensure_rate("reverse.parity_base_pct", self.parity_base_pct)?;
        ensure_rate("reverse.lean_base_pct", self.lean_base_pct)?;
        if self.parity_budget_ratio > self.rich_budget_ratio {
            return Err(ModelError::invalid(
                "reverse.parity_budget_ratio",
                "must not exceed rich_budget_ratio",
            ));
        }
        for productivity in &self.ramp_curve {
            ensure_rate("reverse.ramp_curve", *productivity)?;
        }
        for bucket in self
            .territory_tiers
            .iter()
            .chain(&self.spiff_categories)
            .chain(&self.pipeline_stages)
        {
            ensure_multiplier(&format!("reverse.{}", bucket.name), bucket.weight)?;
        }
        self.accelerators.validate()
    }
}
