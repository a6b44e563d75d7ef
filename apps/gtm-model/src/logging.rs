//! Structured logging for scenario and reverse runs.
//!
//! # Log Levels
//!
//! - **INFO**: Run summaries
//! - **WARN**: Scenarios that lose money or never pay back
//! - **DEBUG**: Detailed calculation steps (emitted by the engines)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::reverse::ReverseReport;
use crate::scenario::ScenarioReport;
use crate::shared::{
    PAYBACK_SENTINEL_MONTHS, format_money, format_months, format_pct, format_ratio,
};

// ============================================
// Event Types
// ============================================

/// Summary of a forward scenario run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioSummaryEvent {
    /// Source of the scenario (file path or label).
    pub source: String,
    /// Monthly sales.
    pub sales: Decimal,
    /// Monthly revenue.
    pub monthly_revenue: Decimal,
    /// Monthly EBITDA.
    pub monthly_ebitda: Decimal,
    /// EBITDA margin (fraction).
    pub ebitda_margin: Decimal,
    /// Customer acquisition cost.
    pub cac: Decimal,
    /// LTV / CAC.
    pub ltv_cac_ratio: Decimal,
    /// Payback in months (sentinel when never).
    pub payback_months: Decimal,
    /// Total commission pool.
    pub commission_total: Decimal,
}

/// Summary of a reverse run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReverseSummaryEvent {
    /// Source of the targets.
    pub source: String,
    /// Annual quota per rep.
    pub quota_per_rep: Decimal,
    /// Headcount including attrition buffer.
    pub headcount: u64,
    /// Monthly leads needed.
    pub monthly_leads: Decimal,
    /// Total pipeline needed.
    pub total_pipeline: Decimal,
    /// Base share of OTE.
    pub base_pct: Decimal,
    /// Territories needed.
    pub territory_count: u64,
}

// ============================================
// Logging Functions
// ============================================

/// Log a scenario summary.
pub fn log_scenario_summary(event: &ScenarioSummaryEvent) {
    info!(
        source = %event.source,
        sales = %event.sales,
        monthly_revenue = %format_money(event.monthly_revenue),
        monthly_ebitda = %format_money(event.monthly_ebitda),
        ebitda_margin = %format_pct(event.ebitda_margin),
        cac = %format_money(event.cac),
        ltv_cac = %format_ratio(event.ltv_cac_ratio),
        payback = %format_months(event.payback_months),
        commission_total = %format_money(event.commission_total),
        "Scenario summary"
    );

    if event.monthly_ebitda < Decimal::ZERO {
        warn!(
            source = %event.source,
            monthly_ebitda = %event.monthly_ebitda,
            "Scenario runs at a monthly loss"
        );
    }
    if event.payback_months >= PAYBACK_SENTINEL_MONTHS {
        warn!(source = %event.source, "Scenario never pays back its CAC");
    }
}

/// Log a reverse run summary.
pub fn log_reverse_summary(event: &ReverseSummaryEvent) {
    info!(
        source = %event.source,
        quota_per_rep = %format_money(event.quota_per_rep),
        headcount = event.headcount,
        monthly_leads = %event.monthly_leads.round_dp(0),
        total_pipeline = %format_money(event.total_pipeline),
        base_pct = %format_pct(event.base_pct),
        territory_count = event.territory_count,
        "Reverse plan summary"
    );
}

// ============================================
// Helper Functions
// ============================================

/// Create a scenario summary event.
pub fn create_scenario_summary_event(
    source: impl Into<String>,
    report: &ScenarioReport,
) -> ScenarioSummaryEvent {
    let ue = &report.unit_economics;
    ScenarioSummaryEvent {
        source: source.into(),
        sales: report.funnel.sales,
        monthly_revenue: ue.monthly_revenue,
        monthly_ebitda: ue.monthly_ebitda,
        ebitda_margin: ue.ebitda_margin,
        cac: ue.cac,
        ltv_cac_ratio: ue.ltv_cac_ratio,
        payback_months: ue.payback_months,
        commission_total: report.pools.total,
    }
}

/// Create a reverse summary event.
pub fn create_reverse_summary_event(
    source: impl Into<String>,
    report: &ReverseReport,
) -> ReverseSummaryEvent {
    ReverseSummaryEvent {
        source: source.into(),
        quota_per_rep: report.quota.quota_per_rep,
        headcount: report.headcount.headcount_with_attrition,
        monthly_leads: report.activity.monthly_leads,
        total_pipeline: report.pipeline.total_pipeline,
        base_pct: report.compensation.base_pct,
        territory_count: report.territories.territory_count,
    }
}
