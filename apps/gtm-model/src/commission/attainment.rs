//! Attainment bands and payout multipliers.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ensure_multiplier};

/// Quota attainment band. Bands are half-open `[lower, upper)` and together
/// cover `[0, ∞)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AttainmentBand {
    /// 0–40%.
    #[serde(rename = "0-40%")]
    Below40,
    /// 40–70%.
    #[serde(rename = "40-70%")]
    From40To70,
    /// 70–100%.
    #[serde(rename = "70-100%")]
    From70To100,
    /// 100–150%.
    #[serde(rename = "100-150%")]
    From100To150,
    /// 150% and above.
    #[serde(rename = "150%+")]
    Above150,
}

impl AttainmentBand {
    /// All bands in ascending order.
    pub const ALL: [Self; 5] = [
        Self::Below40,
        Self::From40To70,
        Self::From70To100,
        Self::From100To150,
        Self::Above150,
    ];

    /// Map a continuous attainment fraction (1.0 = 100% of quota) to its band.
    ///
    /// Negative attainment falls in the lowest band.
    #[must_use]
    pub fn from_attainment(attainment: Decimal) -> Self {
        Self::ALL
            .into_iter()
            .rev()
            .find(|band| attainment >= band.lower_bound())
            .unwrap_or(Self::Below40)
    }

    /// Inclusive lower bound as a fraction.
    #[must_use]
    pub const fn lower_bound(&self) -> Decimal {
        match self {
            Self::Below40 => Decimal::ZERO,
            Self::From40To70 => dec!(0.40),
            Self::From70To100 => dec!(0.70),
            Self::From100To150 => Decimal::ONE,
            Self::Above150 => dec!(1.50),
        }
    }

    /// Exclusive upper bound; `None` for the open-ended top band.
    #[must_use]
    pub const fn upper_bound(&self) -> Option<Decimal> {
        match self {
            Self::Below40 => Some(dec!(0.40)),
            Self::From40To70 => Some(dec!(0.70)),
            Self::From70To100 => Some(Decimal::ONE),
            Self::From100To150 => Some(dec!(1.50)),
            Self::Above150 => None,
        }
    }

    /// Display label, e.g. `70-100%`.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Below40 => "0-40%",
            Self::From40To70 => "40-70%",
            Self::From70To100 => "70-100%",
            Self::From100To150 => "100-150%",
            Self::Above150 => "150%+",
        }
    }
}

impl fmt::Display for AttainmentBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Payout multiplier for each attainment band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttainmentTable {
    /// 0–40%.
    pub below_40: Decimal,
    /// 40–70%.
    pub from_40_to_70: Decimal,
    /// 70–100%.
    pub from_70_to_100: Decimal,
    /// 100–150%.
    pub from_100_to_150: Decimal,
    /// 150%+.
    pub above_150: Decimal,
}

impl Default for AttainmentTable {
    fn default() -> Self {
        Self {
            below_40: dec!(0.6),
            from_40_to_70: dec!(0.8),
            from_70_to_100: dec!(1.0),
            from_100_to_150: dec!(1.3),
            above_150: dec!(1.6),
        }
    }
}

impl AttainmentTable {
    /// Multiplier for a band (exact lookup).
    #[must_use]
    pub const fn multiplier(&self, band: AttainmentBand) -> Decimal {
        match band {
            AttainmentBand::Below40 => self.below_40,
            AttainmentBand::From40To70 => self.from_40_to_70,
            AttainmentBand::From70To100 => self.from_70_to_100,
            AttainmentBand::From100To150 => self.from_100_to_150,
            AttainmentBand::Above150 => self.above_150,
        }
    }

    /// Multiplier for a continuous attainment fraction.
    #[must_use]
    pub fn multiplier_for(&self, attainment: Decimal) -> Decimal {
        self.multiplier(AttainmentBand::from_attainment(attainment))
    }

    /// Reject negative multipliers.
    pub fn validate(&self) -> Result<(), ModelError> {
        for band in AttainmentBand::ALL {
            ensure_multiplier(&format!("attainment.{band}"), self.multiplier(band))?;
        }
        Ok(())
    }
}

/// Scale pay by the band's multiplier.
#[must_use]
pub fn apply_attainment_multiplier(
    base_pay: Decimal,
    band: AttainmentBand,
    table: &AttainmentTable,
) -> Decimal {
    base_pay * table.multiplier(band)
}
