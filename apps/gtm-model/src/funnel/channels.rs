//! Multi-channel funnel aggregation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::engine::compute_funnel;
use super::types::{FunnelResult, StageRates};
use crate::shared::{mean, non_negative, safe_div};

/// A single acquisition channel (e.g. paid social, referrals, call lists).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelFunnel {
    /// Channel name.
    pub name: String,
    /// Monthly leads from this channel.
    pub leads: Decimal,
    /// Stage conversion rates for this channel.
    pub rates: StageRates,
    /// Cost per lead.
    pub cpl: Decimal,
    /// Average value of a deal closed through this channel.
    pub avg_deal_value: Decimal,
}

impl ChannelFunnel {
    /// Run this channel's funnel and derive its acquisition metrics.
    #[must_use]
    pub fn evaluate(&self) -> ChannelResult {
        let funnel = compute_funnel(self.leads, &self.rates);
        let marketing_cost = funnel.leads * non_negative(self.cpl);
        ChannelResult {
            name: self.name.clone(),
            funnel,
            marketing_cost,
            cac: safe_div(marketing_cost, funnel.sales, Decimal::ZERO),
            pipeline_value: funnel.sales * non_negative(self.avg_deal_value),
        }
    }
}

/// Per-channel evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelResult {
    /// Channel name.
    pub name: String,
    /// Stage counts.
    pub funnel: FunnelResult,
    /// Leads × CPL.
    pub marketing_cost: Decimal,
    /// Marketing cost per sale (0 when the channel closes nothing).
    pub cac: Decimal,
    /// Sales × average deal value.
    pub pipeline_value: Decimal,
}

/// Totals across all channels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelAggregate {
    /// Per-channel results, in input order.
    pub channels: Vec<ChannelResult>,
    /// Summed stage counts.
    pub totals: FunnelResult,
    /// Summed marketing spend.
    pub total_marketing_cost: Decimal,
    /// Summed pipeline value.
    pub total_pipeline_value: Decimal,
    /// Unweighted mean of channel CPLs.
    pub avg_cpl: Decimal,
    /// Unweighted mean of channel CACs.
    pub avg_cac: Decimal,
}

/// Sum stage counts across channels.
///
/// `avg_cpl` and `avg_cac` are simple arithmetic means over channels, not
/// weighted by lead or sales volume. An empty channel list produces an
/// all-zero aggregate.
#[must_use]
pub fn aggregate_channels(channels: &[ChannelFunnel]) -> ChannelAggregate {
    let results: Vec<ChannelResult> = channels.iter().map(ChannelFunnel::evaluate).collect();

    let totals = results
        .iter()
        .fold(FunnelResult::default(), |acc, r| FunnelResult {
            leads: acc.leads + r.funnel.leads,
            contacts: acc.contacts + r.funnel.contacts,
            meetings_scheduled: acc.meetings_scheduled + r.funnel.meetings_scheduled,
            meetings_held: acc.meetings_held + r.funnel.meetings_held,
            sales: acc.sales + r.funnel.sales,
        });

    let cpls: Vec<Decimal> = channels.iter().map(|c| non_negative(c.cpl)).collect();
    let cacs: Vec<Decimal> = results.iter().map(|r| r.cac).collect();

    let aggregate = ChannelAggregate {
        totals,
        total_marketing_cost: results.iter().map(|r| r.marketing_cost).sum(),
        total_pipeline_value: results.iter().map(|r| r.pipeline_value).sum(),
        avg_cpl: mean(&cpls),
        avg_cac: mean(&cacs),
        channels: results,
    };

    debug!(
        channel_count = aggregate.channels.len(),
        total_sales = %aggregate.totals.sales,
        avg_cpl = %aggregate.avg_cpl,
        avg_cac = %aggregate.avg_cac,
        "Channels aggregated"
    );

    aggregate
}
