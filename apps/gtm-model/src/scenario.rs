//! Forward evaluation of a whole scenario.
//!
//! Runs funnel → deal → commission → unit economics in dependency order
//! from one [`ModelConfig`]. Nothing is cached; every call recomputes from
//! the document it is given.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::commission::{
    AttainmentBand, CommissionPools, PerPersonPay, SplitDistribution, allocate_commission,
    commission_base, split_distribution,
};
use crate::config::ModelConfig;
use crate::deal::DealEconomics;
use crate::funnel::{ChannelAggregate, FunnelResult, aggregate_channels};
use crate::unit_economics::{CostInputs, UnitEconomicsSnapshot, unit_economics};

/// Everything the forward chain derives from a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioReport {
    /// Monthly funnel.
    pub funnel: FunnelResult,
    /// Monthly marketing spend.
    pub marketing_cost: Decimal,
    /// Per-deal economics.
    pub deal: DealEconomics,
    /// Revenue the commission percentages apply to.
    pub commission_base: Decimal,
    /// Commission pool per role.
    pub pools: CommissionPools,
    /// Commission per head.
    pub per_person: PerPersonPay,
    /// Monthly base salaries across the team.
    pub base_payroll: Decimal,
    /// Band for the expected attainment.
    pub attainment_band: AttainmentBand,
    /// Distribution of one deal at the expected attainment, with both
    /// bonuses earned.
    pub deal_distribution: SplitDistribution,
    /// CAC, LTV, EBITDA and payback.
    pub unit_economics: UnitEconomicsSnapshot,
    /// Channel breakdown, when channels are configured.
    pub channels: Option<ChannelAggregate>,
}

/// Evaluate the forward chain for a scenario.
#[must_use]
pub fn evaluate_scenario(config: &ModelConfig) -> ScenarioReport {
    let funnel = config.funnel.compute();
    let deal = config.deal.economics();

    let base = commission_base(funnel.sales, &deal, config.commission.policy);
    let pools = allocate_commission(
        base,
        &config.roles,
        config.commission.allocation_mode,
        &config.commission.distribution.cascade,
    );
    let per_person = pools.per_person(&config.team);
    let base_payroll = config.roles.monthly_base_payroll(&config.team);

    let attainment_band = AttainmentBand::from_attainment(config.commission.expected_attainment);
    let deal_distribution = split_distribution(
        &deal,
        attainment_band,
        config.commission.has_speed_bonus,
        config.commission.has_followup_bonus,
        &config.commission.distribution,
    );

    let costs = CostInputs {
        cost_per_lead: config.funnel.cost_per_lead,
        commissions: pools.total,
        base_salaries: base_payroll,
        operating: config.costs,
        timing: config.timing,
    };
    let unit_economics = unit_economics(&funnel, &deal, &costs);

    let channels = (!config.channels.is_empty()).then(|| aggregate_channels(&config.channels));

    debug!(
        sales = %funnel.sales,
        commission_base = %base,
        commission_total = %pools.total,
        base_payroll = %base_payroll,
        attainment_band = %attainment_band,
        channel_count = config.channels.len(),
        "Scenario evaluated"
    );

    ScenarioReport {
        funnel,
        marketing_cost: config.funnel.marketing_cost(),
        deal,
        commission_base: base,
        pools,
        per_person,
        base_payroll,
        attainment_band,
        deal_distribution,
        unit_economics,
        channels,
    }
}
