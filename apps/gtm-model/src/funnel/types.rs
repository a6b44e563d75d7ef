//! Core types for funnel calculations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ensure_amount, ensure_rate, ensure_volume};
use crate::shared::DAYS_PER_MONTH;

/// How lead volume is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadVolume {
    /// Leads per day; a month is 30 days.
    PerDay(Decimal),
    /// Leads per month, used by the lead-based model variants.
    PerMonth(Decimal),
}

impl LeadVolume {
    /// Monthly lead count.
    #[must_use]
    pub fn monthly(&self) -> Decimal {
        match self {
            Self::PerDay(daily) => daily.saturating_mul(DAYS_PER_MONTH),
            Self::PerMonth(monthly) => *monthly,
        }
    }
}

impl Default for LeadVolume {
    fn default() -> Self {
        Self::PerDay(Decimal::ZERO)
    }
}

/// Stage conversion rates, each a fraction in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageRates {
    /// Lead → contact.
    pub contact_rate: Decimal,
    /// Contact → meeting scheduled.
    pub meeting_rate: Decimal,
    /// Meeting scheduled → meeting held (1.0 when the variant has no show-up stage).
    #[serde(default = "default_show_up_rate")]
    pub show_up_rate: Decimal,
    /// Meeting held → sale.
    pub close_rate: Decimal,
}

impl StageRates {
    /// Validate that every rate is in `[0, 1]`.
    pub fn validate(&self) -> Result<(), ModelError> {
        ensure_rate("contact_rate", self.contact_rate)?;
        ensure_rate("meeting_rate", self.meeting_rate)?;
        ensure_rate("show_up_rate", self.show_up_rate)?;
        ensure_rate("close_rate", self.close_rate)
    }
}

impl Default for StageRates {
    fn default() -> Self {
        Self {
            contact_rate: Decimal::ZERO,
            meeting_rate: Decimal::ZERO,
            show_up_rate: default_show_up_rate(),
            close_rate: Decimal::ZERO,
        }
    }
}

const fn default_show_up_rate() -> Decimal {
    Decimal::ONE
}

/// Funnel configuration for a single (blended) lead source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunnelConfig {
    /// Lead volume.
    pub lead_volume: LeadVolume,
    /// Stage conversion rates.
    pub rates: StageRates,
    /// Cost per lead.
    #[serde(default)]
    pub cost_per_lead: Decimal,
}

impl FunnelConfig {
    /// Monthly lead count.
    #[must_use]
    pub fn monthly_leads(&self) -> Decimal {
        self.lead_volume.monthly()
    }

    /// Monthly marketing spend (leads × CPL).
    #[must_use]
    pub fn marketing_cost(&self) -> Decimal {
        self.monthly_leads() * self.cost_per_lead
    }

    /// Run the monthly funnel.
    #[must_use]
    pub fn compute(&self) -> FunnelResult {
        super::compute_funnel(self.monthly_leads(), &self.rates)
    }

    /// Validate lead volume, rates and CPL.
    pub fn validate(&self) -> Result<(), ModelError> {
        ensure_volume("leads", self.monthly_leads())?;
        ensure_amount("cost_per_lead", self.cost_per_lead)?;
        self.rates.validate()
    }
}

/// Stage counts produced by the funnel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunnelResult {
    /// Leads entering the funnel.
    pub leads: Decimal,
    /// Leads contacted.
    pub contacts: Decimal,
    /// Meetings scheduled.
    pub meetings_scheduled: Decimal,
    /// Meetings held.
    pub meetings_held: Decimal,
    /// Closed sales.
    pub sales: Decimal,
}
