//! Per-deal economics and the revenue they produce.
//!
//! A policy sold at `monthly_premium` for `contract_years` has a contract
//! value of `premium × 12 × years`. The carrier pays `carrier_rate` of that
//! value as compensation, split into an upfront portion and a deferred
//! portion realized at `deferred_timing_months`.

mod economics;
mod premium_mix;
mod revenue;

pub use economics::{DealEconomics, DealTerms};
pub use premium_mix::{PremiumMix, PremiumTier};
pub use revenue::{MonthlyRevenue, RevenuePoint, calculate_monthly_revenue, revenue_schedule};
