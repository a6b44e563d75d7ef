//! Deal economics value object.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::premium_mix::PremiumMix;
use crate::error::{ModelError, ensure_amount, ensure_rate};
use crate::shared::{MAX_CONTRACT_YEARS, MONTHS_PER_YEAR, clamp_rate, non_negative};

/// Pricing inputs for a deal, as held in scenario configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealTerms {
    /// Monthly premium; ignored when `premium_mix` is set.
    #[serde(default = "default_monthly_premium")]
    pub monthly_premium: Decimal,
    /// Probability-weighted premium tiers.
    #[serde(default)]
    pub premium_mix: Option<PremiumMix>,
    /// Policy term in years.
    #[serde(default = "default_contract_years")]
    pub contract_years: u32,
    /// Carrier compensation as a fraction of contract value.
    #[serde(default = "default_carrier_rate")]
    pub carrier_rate: Decimal,
    /// Share of carrier compensation paid upfront.
    #[serde(default = "default_upfront_pct")]
    pub upfront_pct: Decimal,
    /// Month in which the deferred portion is realized.
    #[serde(default = "default_deferred_timing_months")]
    pub deferred_timing_months: u32,
}

impl Default for DealTerms {
    fn default() -> Self {
        Self {
            monthly_premium: default_monthly_premium(),
            premium_mix: None,
            contract_years: default_contract_years(),
            carrier_rate: default_carrier_rate(),
            upfront_pct: default_upfront_pct(),
            deferred_timing_months: default_deferred_timing_months(),
        }
    }
}

const fn default_monthly_premium() -> Decimal {
    dec!(3000)
}

const fn default_contract_years() -> u32 {
    25
}

const fn default_carrier_rate() -> Decimal {
    dec!(0.027)
}

pub(crate) const fn default_upfront_pct() -> Decimal {
    dec!(0.7)
}

const fn default_deferred_timing_months() -> u32 {
    18
}

impl DealTerms {
    /// Premium used for the deal: the mix average when a mix is configured.
    #[must_use]
    pub fn effective_premium(&self) -> Decimal {
        self.premium_mix
            .as_ref()
            .map_or(self.monthly_premium, PremiumMix::average_premium)
    }

    /// Validate pricing inputs.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.premium_mix.is_none() && self.monthly_premium <= Decimal::ZERO {
            return Err(ModelError::invalid("monthly_premium", "must be positive"));
        }
        ensure_amount("monthly_premium", self.monthly_premium)?;
        if let Some(mix) = &self.premium_mix {
            mix.validate()?;
            if self.effective_premium() <= Decimal::ZERO {
                return Err(ModelError::invalid(
                    "premium_mix",
                    "weighted premium must be positive",
                ));
            }
        }
        if self.contract_years == 0 || self.contract_years > MAX_CONTRACT_YEARS {
            return Err(ModelError::invalid(
                "contract_years",
                format!("must be between 1 and {MAX_CONTRACT_YEARS}"),
            ));
        }
        if self.carrier_rate <= Decimal::ZERO || self.carrier_rate >= Decimal::ONE {
            return Err(ModelError::invalid(
                "carrier_rate",
                "must be strictly between 0 and 1",
            ));
        }
        ensure_rate("upfront_pct", self.upfront_pct)?;
        if self.deferred_timing_months == 0 {
            return Err(ModelError::invalid(
                "deferred_timing_months",
                "must be at least 1",
            ));
        }
        Ok(())
    }

    /// Build the economics for these terms.
    #[must_use]
    pub fn economics(&self) -> DealEconomics {
        DealEconomics::compute(
            self.effective_premium(),
            self.contract_years,
            self.carrier_rate,
            self.upfront_pct,
        )
        .with_deferred_timing(self.deferred_timing_months)
    }
}

/// Derived economics of a single deal. Immutable once computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealEconomics {
    /// Monthly premium.
    pub monthly_premium: Decimal,
    /// Policy term in years.
    pub contract_years: u32,
    /// Carrier compensation rate.
    pub carrier_rate: Decimal,
    /// Premium × 12 × years.
    pub contract_value: Decimal,
    /// Contract value × carrier rate.
    pub total_compensation: Decimal,
    /// Share paid upfront.
    pub upfront_pct: Decimal,
    /// Share deferred (1 − upfront).
    pub deferred_pct: Decimal,
    /// Compensation paid at sale.
    pub upfront_cash: Decimal,
    /// Compensation paid at `deferred_timing_months`.
    pub deferred_cash: Decimal,
    /// Month in which deferred cash is realized.
    pub deferred_timing_months: u32,
}

impl DealEconomics {
    /// Compute deal economics.
    ///
    /// Negative premiums are floored at zero and rates are clamped into
    /// `[0, 1]`. Deferred timing defaults to month 18.
    #[must_use]
    pub fn compute(
        monthly_premium: Decimal,
        contract_years: u32,
        carrier_rate: Decimal,
        upfront_pct: Decimal,
    ) -> Self {
        let monthly_premium = non_negative(monthly_premium);
        let carrier_rate = clamp_rate(carrier_rate);
        let upfront_pct = clamp_rate(upfront_pct);
        let deferred_pct = Decimal::ONE - upfront_pct;

        let contract_value = monthly_premium * MONTHS_PER_YEAR * Decimal::from(contract_years);
        let total_compensation = contract_value * carrier_rate;
        let upfront_cash = total_compensation * upfront_pct;
        // Residual keeps upfront + deferred exactly equal to the total.
        let deferred_cash = total_compensation - upfront_cash;

        debug!(
            monthly_premium = %monthly_premium,
            contract_years,
            contract_value = %contract_value,
            total_compensation = %total_compensation,
            upfront_cash = %upfront_cash,
            deferred_cash = %deferred_cash,
            "Deal economics computed"
        );

        Self {
            monthly_premium,
            contract_years,
            carrier_rate,
            contract_value,
            total_compensation,
            upfront_pct,
            deferred_pct,
            upfront_cash,
            deferred_cash,
            deferred_timing_months: default_deferred_timing_months(),
        }
    }

    /// Override the month in which deferred cash is realized (minimum 1).
    #[must_use]
    pub fn with_deferred_timing(mut self, months: u32) -> Self {
        self.deferred_timing_months = months.max(1);
        self
    }

    /// Contract length in months.
    #[must_use]
    pub const fn contract_months(&self) -> u32 {
        self.contract_years.saturating_mul(12)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deal::PremiumTier;
    use crate::shared::approx_eq;
    use proptest::prelude::*;

    #[test]
    fn test_reference_deal() {
        let deal = DealEconomics::compute(dec!(3000), 25, dec!(0.027), dec!(0.7));

        assert_eq!(deal.contract_value, dec!(900000));
        assert_eq!(deal.total_compensation, dec!(24300));
        assert_eq!(deal.upfront_cash, dec!(17010));
        assert_eq!(deal.deferred_cash, dec!(7290));
        assert_eq!(deal.deferred_pct, dec!(0.3));
        assert_eq!(deal.contract_months(), 300);
        assert_eq!(deal.deferred_timing_months, 18);
    }

    #[test]
    fn test_default_terms_match_reference() {
        let deal = DealTerms::default().economics();
        assert_eq!(deal.total_compensation, dec!(24300));
        assert_eq!(deal.upfront_pct, dec!(0.7));
    }

    #[test]
    fn test_terms_use_mix_average() {
        let terms = DealTerms {
            premium_mix: Some(PremiumMix {
                tiers: vec![
                    PremiumTier { premium: dec!(2000), weight_pct: dec!(50) },
                    PremiumTier { premium: dec!(4000), weight_pct: dec!(50) },
                ],
                require_exact: false,
            }),
            ..DealTerms::default()
        };
        assert_eq!(terms.effective_premium(), dec!(3000));
        assert_eq!(terms.economics().contract_value, dec!(900000));
    }

    #[test]
    fn test_validate_rejects_zero_term_and_bad_carrier_rate() {
        let terms = DealTerms {
            contract_years: 0,
            ..DealTerms::default()
        };
        assert!(terms.validate().is_err());

        let terms = DealTerms {
            carrier_rate: Decimal::ONE,
            ..DealTerms::default()
        };
        assert!(terms.validate().is_err());

        assert!(DealTerms::default().validate().is_ok());
    }

    #[test]
    fn test_validate_bounds_premium_and_term() {
        let terms = DealTerms {
            monthly_premium: dec!(70000000000000000000000000000),
            ..DealTerms::default()
        };
        assert!(terms.validate().is_err());

        let terms = DealTerms {
            contract_years: MAX_CONTRACT_YEARS + 1,
            ..DealTerms::default()
        };
        assert!(terms.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_mix_with_no_premium() {
        let terms = DealTerms {
            premium_mix: Some(PremiumMix {
                tiers: vec![PremiumTier { premium: Decimal::ZERO, weight_pct: dec!(100) }],
                require_exact: false,
            }),
            ..DealTerms::default()
        };
        let err = terms.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid configuration for 'premium_mix': weighted premium must be positive"
        );
    }

    #[test]
    fn test_repeat_computation_is_identical() {
        let a = DealEconomics::compute(dec!(3500), 20, dec!(0.031), dec!(0.65));
        let b = DealEconomics::compute(dec!(3500), 20, dec!(0.031), dec!(0.65));
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn prop_split_is_conserved(
            premium_cents in 1i64..1_000_000_000,
            years in 1u32..60,
            carrier_bps in 1i64..10_000,
            upfront_bps in 0i64..=10_000,
        ) {
            let deal = DealEconomics::compute(
                Decimal::new(premium_cents, 2),
                years,
                Decimal::new(carrier_bps, 4),
                Decimal::new(upfront_bps, 4),
            );
            prop_assert!(approx_eq(deal.upfront_cash + deal.deferred_cash, deal.total_compensation));
        }
    }
}
