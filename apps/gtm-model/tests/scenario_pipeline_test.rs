//! Integration tests for full scenario evaluation.
//!
//! These tests load scenario documents the way the binary does and check the
//! forward chain and reverse solvers end to end.

use gtm_model::commission::{AllocationMode, AttainmentBand, CommissionPolicy};
use gtm_model::config::{ConfigError, load_config, load_config_from_string, validate_config};
use gtm_model::funnel::LeadVolume;
use gtm_model::shared::PAYBACK_SENTINEL_MONTHS;
use gtm_model::{ModelConfig, evaluate_scenario, run_reverse};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn reference_scenario() -> ModelConfig {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/scenario.yaml");
    match load_config(Some(path)) {
        Ok(c) => c,
        Err(e) => panic!("reference scenario should load: {e}"),
    }
}

#[test]
fn test_reference_scenario_loads() {
    let config = reference_scenario();

    assert_eq!(config.funnel.lead_volume, LeadVolume::PerMonth(dec!(1000)));
    assert_eq!(config.funnel.cost_per_lead, dec!(150));
    assert_eq!(config.costs.fixed_opex, dec!(80000));
    assert_eq!(config.commission.policy, CommissionPolicy::Upfront);
    assert_eq!(config.commission.allocation_mode, AllocationMode::DirectOfBase);
    assert_eq!(config.channels.len(), 2);
    assert!(config.reverse.is_some());
}

#[test]
fn test_reference_scenario_forward_chain() {
    let report = evaluate_scenario(&reference_scenario());

    // 1000 → 650 → 260 → 182 → 45.5
    assert_eq!(report.funnel.contacts, dec!(650));
    assert_eq!(report.funnel.meetings_scheduled, dec!(260));
    assert_eq!(report.funnel.meetings_held, dec!(182));
    assert_eq!(report.funnel.sales, dec!(45.5));

    // 3000 × 12 × 25 = 900000; × 0.027 = 24300; 70% upfront
    assert_eq!(report.deal.contract_value, dec!(900000));
    assert_eq!(report.deal.total_compensation, dec!(24300));
    assert_eq!(report.deal.upfront_cash, dec!(17010));
    assert_eq!(report.deal.deferred_cash, dec!(7290));

    assert_eq!(report.commission_base, dec!(773955));
    assert_eq!(report.pools.total, dec!(216707.4));
    assert_eq!(report.base_payroll, dec!(115000));
    assert_eq!(report.attainment_band, AttainmentBand::From100To150);

    let ue = report.unit_economics;
    assert_eq!(ue.ltv, dec!(24300));
    assert_eq!(ue.monthly_revenue, dec!(773955));
    assert_eq!(ue.monthly_costs, dec!(561707.4));
    assert_eq!(ue.monthly_ebitda, dec!(212247.6));
    assert!(ue.payback_months < PAYBACK_SENTINEL_MONTHS);

    let distribution = report.deal_distribution;
    assert_eq!(
        distribution.total.closer_pay + distribution.total.setter_pay + distribution.total.corp_margin,
        dec!(24300)
    );
}

#[test]
fn test_reference_scenario_channels() {
    let report = evaluate_scenario(&reference_scenario());
    let Some(channels) = report.channels else {
        panic!("channels configured");
    };

    // Paid social: 400 × 0.35 × 0.6 × 0.8 × 0.25 = 16.8
    // Referrals:   100 × 0.8 × 0.7 × 1.0 × 0.4 = 22.4
    assert_eq!(channels.channels[0].funnel.sales, dec!(16.8));
    assert_eq!(channels.channels[1].funnel.sales, dec!(22.4));
    assert_eq!(channels.totals.sales, dec!(39.2));
    assert_eq!(channels.total_marketing_cost, dec!(52000));
    assert_eq!(channels.total_pipeline_value, dec!(666792));
    assert_eq!(channels.avg_cpl, dec!(80));
}

#[test]
fn test_reference_scenario_reverse() {
    let config = reference_scenario();
    let Some(inputs) = config.reverse.as_ref() else {
        panic!("reverse block configured");
    };

    let report = run_reverse(inputs, &config.funnel.rates, &config.reverse_policy);

    assert_eq!(report.quota.quota_monthly.round_dp(2), dec!(92592.59));
    assert!(report.activity.monthly_leads > report.activity.contacts);
    assert!(report.activity.contacts > report.activity.meetings_scheduled);
    assert_eq!(report.pipeline.total_pipeline, dec!(2975000));
    assert_eq!(report.ramp.months.len(), 6);
    assert_eq!(report.spiff.categories.len(), 5);
}

#[test]
fn test_premium_mix_drives_deal_value() {
    let yaml = r#"
funnel:
  lead_volume:
    per_month: "100"
  rates:
    contact_rate: "0.5"
    meeting_rate: "0.5"
    close_rate: "0.5"
deal:
  premium_mix:
    tiers:
      - { premium: "2000", weight_pct: "25" }
      - { premium: "3000", weight_pct: "35" }
      - { premium: "4000", weight_pct: "25" }
      - { premium: "5000", weight_pct: "15" }
"#;

    let config = match load_config_from_string(yaml) {
        Ok(c) => c,
        Err(e) => panic!("should load premium mix scenario: {e}"),
    };
    let report = evaluate_scenario(&config);

    assert_eq!(report.deal.monthly_premium, dec!(3300));
    assert_eq!(report.deal.contract_value, dec!(990000));
    assert_eq!(report.funnel.sales, dec!(12.5));
}

#[test]
fn test_invalid_scenario_rejected_at_load() {
    let yaml = r#"
funnel:
  lead_volume:
    per_day: "25"
  rates:
    contact_rate: "0.4"
    meeting_rate: "0.7"
    close_rate: "0.25"
deal:
  carrier_rate: "1.2"
"#;

    let result = load_config_from_string(yaml);
    assert!(matches!(result, Err(ConfigError::ValidationError(_))));
}

#[test]
fn test_no_sales_scenario_is_total() {
    let yaml = r#"
funnel:
  lead_volume:
    per_day: "25"
  rates:
    contact_rate: "0.4"
    meeting_rate: "0.7"
    close_rate: "0"
  cost_per_lead: "150"
"#;

    let config = match load_config_from_string(yaml) {
        Ok(c) => c,
        Err(e) => panic!("should load: {e}"),
    };
    let report = evaluate_scenario(&config);
    let ue = report.unit_economics;

    assert_eq!(report.funnel.sales, Decimal::ZERO);
    assert_eq!(ue.cac, Decimal::ZERO);
    assert_eq!(ue.ltv_cac_ratio, Decimal::ZERO);
    assert_eq!(ue.ebitda_margin, Decimal::ZERO);
    assert_eq!(ue.payback_months, PAYBACK_SENTINEL_MONTHS);
    // 750 leads × 150
    assert_eq!(ue.marketing_cost, dec!(112500));
}

#[test]
fn test_report_serializes_decimals_as_strings() {
    let report = evaluate_scenario(&reference_scenario());
    let json = match serde_json::to_value(&report) {
        Ok(v) => v,
        Err(e) => panic!("serialize: {e}"),
    };

    let sales: Decimal = match json["funnel"]["sales"].as_str().map(str::parse) {
        Some(Ok(v)) => v,
        other => panic!("sales should serialize as a decimal string: {other:?}"),
    };
    assert_eq!(sales, dec!(45.5));
    assert_eq!(json["attainment_band"], "100-150%");
}

#[test]
fn test_largest_accepted_scenario_evaluates() {
    let yaml = r#"
funnel:
  lead_volume:
    per_month: "1000000000"
  rates:
    contact_rate: "1"
    meeting_rate: "1"
    show_up_rate: "1"
    close_rate: "1"
  cost_per_lead: "1000000000000000"
deal:
  monthly_premium: "1000000000000000"
  contract_years: 100
  carrier_rate: "0.999"
  upfront_pct: "1"
  deferred_timing_months: 18
roles:
  closer: { base_pay: "1000000000000000", commission_pct: "1", ote: "1000000000000000" }
  setter: { base_pay: "1000000000000000", commission_pct: "1", ote: "1000000000000000" }
  manager: { base_pay: "1000000000000000", commission_pct: "1", ote: "1000000000000000" }
  bench: { base_pay: "1000000000000000", commission_pct: "1", ote: "1000000000000000" }
team:
  closer: 4294967295
  setter: 4294967295
  manager: 4294967295
  bench: 4294967295
commission:
  policy: FULL
  allocation_mode: cascaded_of_closer
  expected_attainment: "100"
  distribution:
    closer_pct: "1"
    cascade:
      setter_of_closer_pct: "1"
      speed_bonus_pct: "1"
      followup_bonus_pct: "1"
    attainment:
      below_40: "100"
      from_40_to_70: "100"
      from_70_to_100: "100"
      from_100_to_150: "100"
      above_150: "100"
costs:
  fixed_opex: "1000000000000000"
  government_fee_pct: "1"
timing:
  include_deferred: true
  month_number: 18
channels:
  - name: Saturated
    leads: "1000000000"
    rates: { contact_rate: "1", meeting_rate: "1", show_up_rate: "1", close_rate: "1" }
    cpl: "1000000000000000"
    avg_deal_value: "1000000000000000"
reverse:
  revenue_target: "1000000000000000"
  num_reps: 1
  expected_attainment: "0.000001"
  avg_quota_per_rep: "0.0001"
  productivity_ramp: "0.0001"
  monthly_revenue_target: "1000000000000000"
  avg_deal_size: "0.0001"
  comp_budget: "1000000000000000"
  market_ote: "0.0001"
  ramp_months: 120
  full_productivity_target: "1000000000000000"
  monthly_ote: "1000000000000000"
  total_tam: "1000000000000000"
  market_share_pct: "1"
  rep_capacity: "0.0001"
  spiff_budget: "1000000000000000"
"#;

    let mut config = match load_config_from_string(yaml) {
        Ok(c) => c,
        Err(e) => panic!("values at their caps should validate: {e}"),
    };
    config.reverse_policy.attrition_buffer_pct = dec!(100);
    config.reverse_policy.pipeline_coverage_ratio = dec!(100);
    if let Err(e) = validate_config(&config) {
        panic!("policy at its caps should validate: {e}");
    }

    let report = evaluate_scenario(&config);
    assert_eq!(report.funnel.sales, dec!(1000000000));
    assert!(report.pools.total > report.commission_base);
    assert!(report.unit_economics.monthly_costs > Decimal::ZERO);

    let Some(inputs) = &config.reverse else {
        panic!("reverse block configured");
    };
    let reverse = run_reverse(inputs, &config.funnel.rates, &config.reverse_policy);
    assert_eq!(reverse.ramp.months.len(), 120);
}

#[test]
fn test_values_beyond_caps_are_rejected() {
    let base = r#"
funnel:
  lead_volume:
    per_month: "1000"
  rates:
    contact_rate: "0.5"
    meeting_rate: "0.5"
    show_up_rate: "0.5"
    close_rate: "0.5"
"#;
    for (extra, field) in [
        ("deal:\n  monthly_premium: \"70000000000000000000000000000\"\n", "monthly_premium"),
        ("deal:\n  contract_years: 101\n", "contract_years"),
        ("costs:\n  fixed_opex: \"1000000000000001\"\n", "fixed_opex"),
        ("commission:\n  expected_attainment: \"101\"\n", "expected_attainment"),
        ("reverse:\n  ramp_months: 121\n", "ramp_months"),
    ] {
        let Err(err) = load_config_from_string(&format!("{base}{extra}")) else {
            panic!("expected {field} to be rejected");
        };
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains(field), "{err}");
    }

    let per_day = base.replace("per_month: \"1000\"", "per_day: \"70000000000000000000000000000\"");
    let Err(err) = load_config_from_string(&per_day) else {
        panic!("expected oversized daily volume to be rejected");
    };
    assert!(err.to_string().contains("leads"));
}
