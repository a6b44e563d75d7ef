//! Unit economics: CAC, LTV, EBITDA, margins and payback.
//!
//! Aggregates a funnel run, deal economics, commissions and fixed costs into
//! a [`UnitEconomicsSnapshot`]. Snapshots are recomputed on every call and
//! never persisted.

mod calculator;
mod types;

pub use calculator::unit_economics;
pub use types::{CostInputs, OperatingCosts, RevenueTiming, UnitEconomicsSnapshot};
