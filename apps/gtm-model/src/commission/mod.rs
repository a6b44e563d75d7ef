//! Commission allocation across the sales team.
//!
//! - **Base**: upfront cash or full carrier compensation, per [`CommissionPolicy`]
//! - **Pools**: closer/setter/manager shares of the base, either each taken
//!   directly from the base or with the setter cascaded off the closer pool
//! - **Attainment**: quota attainment mapped to a payout multiplier band
//! - **Per-deal distribution**: closer pay, setter pay and residual margin

mod allocation;
mod attainment;
mod distribution;
mod types;

pub use allocation::{CommissionPools, PerPersonPay, allocate_commission, commission_base};
pub use attainment::{AttainmentBand, AttainmentTable, apply_attainment_multiplier};
pub use distribution::{
    DealDistribution, DistributionConfig, SplitDistribution, per_deal_distribution,
    split_distribution,
};
pub use types::{
    AllocationMode, CommissionPolicy, CommissionSettings, Role, RoleCompensation,
    RoleCompensationConfig, SetterCascade, TeamCounts,
};
