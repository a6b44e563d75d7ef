//! GTM Model Binary
//!
//! Evaluates a scenario document and prints the report as JSON.
//!
//! # Usage
//!
//! ```bash
//! gtm-model [CONFIG]
//! ```
//!
//! # Environment Variables
//!
//! - `GTM_CONFIG`: scenario path when no argument is given (default: scenario.yaml)
//! - `RUST_LOG`: Log level (default: info)

use anyhow::Context;
use serde::Serialize;

use gtm_model::config::{DEFAULT_CONFIG_PATH, load_config};
use gtm_model::logging::{
    create_reverse_summary_event, create_scenario_summary_event, log_reverse_summary,
    log_scenario_summary,
};
use gtm_model::telemetry::init_tracing;
use gtm_model::{ReverseReport, ScenarioReport, evaluate_scenario, run_reverse};

/// Printed document.
#[derive(Serialize)]
struct Output {
    scenario: ScenarioReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    reverse: Option<ReverseReport>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let path = config_path();
    tracing::info!(path = %path, "Starting GTM model");

    let config = load_config(Some(&path)).with_context(|| format!("loading scenario {path}"))?;

    let scenario = evaluate_scenario(&config);
    log_scenario_summary(&create_scenario_summary_event(&path, &scenario));

    let reverse = config.reverse.as_ref().map(|inputs| {
        let report = run_reverse(inputs, &config.funnel.rates, &config.reverse_policy);
        log_reverse_summary(&create_reverse_summary_event(&path, &report));
        report
    });

    let output = Output { scenario, reverse };
    let json = serde_json::to_string_pretty(&output).context("serializing report")?;
    println!("{json}");

    Ok(())
}

/// First CLI argument, then `GTM_CONFIG`, then the default path.
fn config_path() -> String {
    std::env::args()
        .nth(1)
        .or_else(|| std::env::var("GTM_CONFIG").ok())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string())
}
