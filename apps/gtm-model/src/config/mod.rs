//! Scenario configuration.
//!
//! A scenario is one YAML document holding every input of the forward chain
//! plus, optionally, a set of targets for the reverse solvers. Values may
//! reference environment variables with `${VAR}` or `${VAR:-default}`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use gtm_model::config::load_config;
//!
//! // Load from default path (scenario.yaml)
//! let config = load_config(None)?;
//!
//! // Load from custom path
//! let config = load_config(Some("scenarios/aggressive.yaml"))?;
//! println!("Close rate: {}", config.funnel.rates.close_rate);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::commission::{CommissionSettings, RoleCompensationConfig, TeamCounts};
use crate::deal::DealTerms;
use crate::error::{ModelError, ensure_amount, ensure_volume};
use crate::funnel::{ChannelFunnel, FunnelConfig};
use crate::reverse::{ReverseInputs, ReversePolicy};
use crate::unit_economics::{OperatingCosts, RevenueTiming};

/// Default scenario path.
pub const DEFAULT_CONFIG_PATH: &str = "scenario.yaml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(#[from] ModelError),
}

/// Root scenario document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Blended lead funnel.
    pub funnel: FunnelConfig,
    /// Deal terms.
    #[serde(default)]
    pub deal: DealTerms,
    /// Per-role pay.
    #[serde(default)]
    pub roles: RoleCompensationConfig,
    /// Headcount per role.
    #[serde(default)]
    pub team: TeamCounts,
    /// Commission policy, allocation and per-deal distribution.
    #[serde(default)]
    pub commission: CommissionSettings,
    /// Fixed operating costs.
    #[serde(default)]
    pub costs: OperatingCosts,
    /// Revenue recognition month.
    #[serde(default)]
    pub timing: RevenueTiming,
    /// Optional per-channel breakdown.
    #[serde(default)]
    pub channels: Vec<ChannelFunnel>,
    /// Constants for the reverse solvers.
    #[serde(default)]
    pub reverse_policy: ReversePolicy,
    /// Targets for a reverse run.
    #[serde(default)]
    pub reverse: Option<ReverseInputs>,
}

// ============================================
// Configuration Loading
// ============================================

/// Load a scenario from a YAML file with environment variable interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the scenario file. Defaults to "scenario.yaml".
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<ModelConfig, ConfigError> {
    let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load a scenario from a YAML string.
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<ModelConfig, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: ModelConfig = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)] // Regex is a literal
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map_or("", |m| m.as_str());
        match std::env::var(&cap[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.to_string(),
        }
    })
    .into_owned()
}

/// Validate every section of a scenario.
///
/// # Errors
///
/// Returns the first out-of-range or inconsistent value found.
pub fn validate_config(config: &ModelConfig) -> Result<(), ModelError> {
    config.funnel.validate()?;
    config.deal.validate()?;
    config.roles.validate()?;
    config.commission.validate()?;
    config.costs.validate()?;
    if config.timing.month_number == 0 {
        return Err(ModelError::invalid("timing.month_number", "must be at least 1"));
    }

    for channel in &config.channels {
        ensure_volume(&format!("channels.{}.leads", channel.name), channel.leads)?;
        ensure_amount(&format!("channels.{}.cpl", channel.name), channel.cpl)?;
        ensure_amount(
            &format!("channels.{}.avg_deal_value", channel.name),
            channel.avg_deal_value,
        )?;
        channel.rates.validate()?;
    }

    config.reverse_policy.validate()?;
    if let Some(reverse) = &config.reverse {
        reverse.validate()?;
    }

    Ok(())
}
