//! Unit economics calculation.

use rust_decimal::Decimal;
use tracing::debug;

use super::types::{CostInputs, UnitEconomicsSnapshot};
use crate::deal::{DealEconomics, calculate_monthly_revenue};
use crate::funnel::FunnelResult;
use crate::shared::{PAYBACK_SENTINEL_MONTHS, clamp_rate, non_negative, safe_div};

/// Compute CAC, LTV, EBITDA and payback for one month of activity.
#[must_use]
pub fn unit_economics(
    funnel: &FunnelResult,
    deal: &DealEconomics,
    costs: &CostInputs,
) -> UnitEconomicsSnapshot {
    let sales = funnel.sales;

    let marketing_cost = funnel.leads * non_negative(costs.cost_per_lead);
    let commissions = non_negative(costs.commissions);
    let base_salaries = non_negative(costs.base_salaries);
    let fixed_opex = non_negative(costs.operating.fixed_opex);
    let labor_cost = commissions + base_salaries;

    let cac = safe_div(marketing_cost + labor_cost, sales, Decimal::ZERO);
    let ltv = deal.total_compensation;
    let ltv_cac_ratio = safe_div(ltv, cac, Decimal::ZERO);

    let revenue = calculate_monthly_revenue(
        sales,
        deal,
        costs.timing.include_deferred,
        costs.timing.month_number,
    );
    let monthly_revenue = revenue.total;

    let government_fee = costs
        .operating
        .government_fee_pct
        .map_or(Decimal::ZERO, |pct| clamp_rate(pct) * monthly_revenue);

    let monthly_costs = marketing_cost + commissions + base_salaries + fixed_opex + government_fee;
    let monthly_ebitda = monthly_revenue - monthly_costs;
    let ebitda_margin = safe_div(monthly_ebitda, monthly_revenue, Decimal::ZERO);

    let revenue_per_customer = safe_div(monthly_revenue, sales, Decimal::ZERO);
    let payback_months = safe_div(cac, revenue_per_customer, PAYBACK_SENTINEL_MONTHS);

    debug!(
        sales = %sales,
        cac = %cac,
        ltv = %ltv,
        monthly_revenue = %monthly_revenue,
        monthly_costs = %monthly_costs,
        monthly_ebitda = %monthly_ebitda,
        payback_months = %payback_months,
        "Unit economics computed"
    );

    UnitEconomicsSnapshot {
        cac,
        ltv,
        ltv_cac_ratio,
        monthly_revenue,
        revenue,
        monthly_costs,
        monthly_ebitda,
        ebitda_margin,
        payback_months,
        marketing_cost,
        labor_cost,
        commissions,
        base_salaries,
        fixed_opex,
        government_fee,
    }
}
