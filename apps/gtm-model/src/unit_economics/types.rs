//! Core types for unit economics.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::deal::MonthlyRevenue;
use crate::error::{ModelError, ensure_amount, ensure_rate};

/// Which month's revenue to recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevenueTiming {
    /// Include deferred compensation once it is due.
    pub include_deferred: bool,
    /// Month being modeled, starting at 1.
    pub month_number: u32,
}

impl Default for RevenueTiming {
    fn default() -> Self {
        Self {
            include_deferred: false,
            month_number: 1,
        }
    }
}

/// Fixed operating costs section of a scenario.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperatingCosts {
    /// Monthly fixed opex (rent, software, admin).
    pub fixed_opex: Decimal,
    /// Government fee as a fraction of revenue, when modeled.
    pub government_fee_pct: Option<Decimal>,
}

impl OperatingCosts {
    /// Validate amounts and the fee rate.
    pub fn validate(&self) -> Result<(), ModelError> {
        ensure_amount("costs.fixed_opex", self.fixed_opex)?;
        if let Some(fee) = self.government_fee_pct {
            ensure_rate("costs.government_fee_pct", fee)?;
        }
        Ok(())
    }
}

/// Monthly cost inputs for a unit economics run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostInputs {
    /// Cost per lead.
    pub cost_per_lead: Decimal,
    /// Total commissions paid this month.
    pub commissions: Decimal,
    /// Total base salaries paid this month.
    pub base_salaries: Decimal,
    /// Fixed opex and government fee.
    pub operating: OperatingCosts,
    /// Revenue recognition month.
    pub timing: RevenueTiming,
}

/// Derived unit economics view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitEconomicsSnapshot {
    /// Customer acquisition cost (0 when there are no sales).
    pub cac: Decimal,
    /// Lifetime value: total carrier compensation of one deal.
    pub ltv: Decimal,
    /// LTV / CAC (0 when CAC is 0).
    pub ltv_cac_ratio: Decimal,
    /// Revenue recognized this month.
    pub monthly_revenue: Decimal,
    /// Upfront/deferred breakdown of `monthly_revenue`.
    pub revenue: MonthlyRevenue,
    /// Total monthly costs.
    pub monthly_costs: Decimal,
    /// Revenue − costs.
    pub monthly_ebitda: Decimal,
    /// EBITDA / revenue (0 when there is no revenue).
    pub ebitda_margin: Decimal,
    /// CAC / revenue per customer; 999 when revenue per customer is 0.
    pub payback_months: Decimal,

    // Cost breakdown
    /// Leads × CPL.
    pub marketing_cost: Decimal,
    /// Commissions + base salaries.
    pub labor_cost: Decimal,
    /// Commissions.
    pub commissions: Decimal,
    /// Base salaries.
    pub base_salaries: Decimal,
    /// Fixed opex.
    pub fixed_opex: Decimal,
    /// Government fee on revenue.
    pub government_fee: Decimal,
}
