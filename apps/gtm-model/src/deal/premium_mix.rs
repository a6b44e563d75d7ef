//! Probability-weighted premium tiers.
//!
//! Weights are normalized when they do not total 100%. Setting
//! `require_exact` turns that mismatch into a validation error instead.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ModelError, ensure_amount, ensure_between};
use crate::shared::{HUNDRED, non_negative, safe_div};

/// Raw weights may miss 100% by this much before exact validation fails.
const WEIGHT_TOLERANCE_PCT: Decimal = dec!(0.01);

/// One premium tier and its share of sales, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumTier {
    /// Monthly premium for this tier.
    pub premium: Decimal,
    /// Share of sales in percent (0–100).
    pub weight_pct: Decimal,
}

/// Mix of premium tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumMix {
    /// Tiers in display order.
    pub tiers: Vec<PremiumTier>,
    /// Reject weights that do not total 100% instead of normalizing them.
    #[serde(default)]
    pub require_exact: bool,
}

impl Default for PremiumMix {
    fn default() -> Self {
        Self {
            tiers: vec![
                PremiumTier { premium: dec!(2000), weight_pct: dec!(25) },
                PremiumTier { premium: dec!(3000), weight_pct: dec!(35) },
                PremiumTier { premium: dec!(4000), weight_pct: dec!(25) },
                PremiumTier { premium: dec!(5000), weight_pct: dec!(15) },
            ],
            require_exact: false,
        }
    }
}

impl PremiumMix {
    /// Sum of raw tier weights, in percent.
    #[must_use]
    pub fn total_weight_pct(&self) -> Decimal {
        self.tiers.iter().map(|t| non_negative(t.weight_pct)).sum()
    }

    /// Weighted mean premium.
    ///
    /// Weights are normalized to sum to 1, so a mix entered as 30/30/30 is
    /// treated as three equal thirds. A mix with no weight averages to zero.
    #[must_use]
    pub fn average_premium(&self) -> Decimal {
        let total = self.total_weight_pct();
        if !self.sums_to_hundred() && !total.is_zero() {
            warn!(
                total_weight_pct = %total,
                "Premium mix weights do not sum to 100%, normalizing"
            );
        }
        let weighted: Decimal = self
            .tiers
            .iter()
            .map(|t| non_negative(t.premium) * non_negative(t.weight_pct))
            .sum();
        safe_div(weighted, total, Decimal::ZERO)
    }

    /// Whether the raw weights sum to 100% within tolerance.
    #[must_use]
    pub fn sums_to_hundred(&self) -> bool {
        (self.total_weight_pct() - HUNDRED).abs() <= WEIGHT_TOLERANCE_PCT
    }

    /// Validate the mix, enforcing a 100% total when `require_exact` is set.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.require_exact {
            self.validate_exact()
        } else {
            self.validate_tiers()
        }
    }

    /// Strict check for entry forms where the mix must total exactly 100%.
    pub fn validate_exact(&self) -> Result<(), ModelError> {
        self.validate_tiers()?;
        if !self.sums_to_hundred() {
            return Err(ModelError::invalid(
                "premium_mix",
                format!(
                    "tier weights sum to {}%, expected 100%",
                    self.total_weight_pct().normalize()
                ),
            ));
        }
        Ok(())
    }

    fn validate_tiers(&self) -> Result<(), ModelError> {
        if self.tiers.is_empty() {
            return Err(ModelError::invalid("premium_mix", "at least one tier is required"));
        }
        for tier in &self.tiers {
            ensure_amount("premium_mix.premium", tier.premium)?;
            ensure_between("premium_mix.weight_pct", tier.weight_pct, Decimal::ZERO, HUNDRED)?;
        }
        if self.total_weight_pct().is_zero() {
            return Err(ModelError::invalid(
                "premium_mix",
                "tier weights must not all be zero",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mix(weights: &[(i64, i64)]) -> PremiumMix {
        PremiumMix {
            tiers: weights
                .iter()
                .map(|(premium, weight)| PremiumTier {
                    premium: Decimal::from(*premium),
                    weight_pct: Decimal::from(*weight),
                })
                .collect(),
            require_exact: false,
        }
    }

    #[test]
    fn test_default_mix_average() {
        // 2000*.25 + 3000*.35 + 4000*.25 + 5000*.15 = 3300
        assert_eq!(PremiumMix::default().average_premium(), dec!(3300));
        assert!(PremiumMix::default().validate_exact().is_ok());
    }

    #[test]
    fn test_weights_are_normalized() {
        let normalized = mix(&[(2000, 30), (4000, 30)]);
        assert_eq!(normalized.average_premium(), dec!(3000));
        assert!(!normalized.sums_to_hundred());
    }

    #[test]
    fn test_exact_validation_surfaces_bad_total() {
        let err = mix(&[(2000, 40), (3000, 40)]).validate_exact().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid configuration for 'premium_mix': tier weights sum to 80%, expected 100%"
        );
    }

    #[test]
    fn test_zero_weight_mix_averages_to_zero() {
        assert_eq!(mix(&[(2000, 0), (3000, 0)]).average_premium(), Decimal::ZERO);
    }

    #[test]
    fn test_empty_mix_is_invalid() {
        assert!(PremiumMix { tiers: vec![], require_exact: false }.validate().is_err());
    }

    #[test]
    fn test_zero_weight_mix_is_invalid() {
        let err = mix(&[(2000, 0), (3000, 0)]).validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid configuration for 'premium_mix': tier weights must not all be zero"
        );
    }

    #[test]
    fn test_require_exact_switches_validation() {
        let mut short = mix(&[(2000, 40), (3000, 40)]);
        assert!(short.validate().is_ok());
        short.require_exact = true;
        assert!(short.validate().is_err());
        assert!(mix(&[(2000, 40), (3000, 60)]).validate_exact().is_ok());
    }

    #[test]
    fn test_tier_values_are_bounded() {
        assert!(mix(&[(2000, 101)]).validate().is_err());
        let huge = PremiumMix {
            tiers: vec![PremiumTier {
                premium: dec!(70000000000000000000000000000),
                weight_pct: dec!(100),
            }],
            require_exact: false,
        };
        assert!(huge.validate().is_err());
    }
}
