// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! GTM Model - Rust Core Library
//!
//! Deterministic calculation engine for sales compensation and go-to-market
//! planning. Every engine is a pure function over plain value types; the
//! caller owns the scenario document and passes it in explicitly.
//!
//! # Engines (leaf → root)
//!
//! - **funnel**: lead → contact → meeting → show-up → sale conversion,
//!   multi-channel aggregation
//! - **deal**: contract value, carrier compensation, upfront/deferred split,
//!   monthly revenue recognition
//! - **commission**: commission base, role pools, attainment multipliers,
//!   per-deal distribution
//! - **unit_economics**: CAC, LTV, EBITDA, payback
//! - **reverse**: quota, headcount, activity, pay mix, pipeline, ramp,
//!   territory and spiff solvers
//!
//! # Supporting modules
//!
//! - **config**: YAML scenario loading and validation
//! - **scenario**: forward evaluation of a whole scenario
//! - **shared**: `safe_div`, clamping and display helpers
//!
//! All amounts are `rust_decimal::Decimal` in MXN. Rates are fractions.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

pub mod commission;
pub mod config;
pub mod deal;
pub mod error;
pub mod funnel;
pub mod logging;
pub mod reverse;
pub mod scenario;
pub mod shared;
pub mod telemetry;
pub mod unit_economics;

pub use config::{ConfigError, ModelConfig, load_config, load_config_from_string};
pub use error::{ErrorCode, ModelError};
pub use reverse::{ReverseReport, run_reverse};
pub use scenario::{ScenarioReport, evaluate_scenario};
