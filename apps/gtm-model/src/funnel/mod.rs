//! Lead-to-sale funnel conversion.
//!
//! Converts lead volume through four multiplicative stages:
//! contact → meeting scheduled → meeting held → sale.
//!
//! Multi-channel models aggregate per-channel funnels with
//! [`aggregate_channels`].

mod channels;
mod engine;
mod types;

pub use channels::{ChannelAggregate, ChannelFunnel, ChannelResult, aggregate_channels};
pub use engine::compute_funnel;
pub use types::{FunnelConfig, FunnelResult, LeadVolume, StageRates};
