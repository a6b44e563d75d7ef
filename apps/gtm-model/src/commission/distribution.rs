//! Per-deal split of a sale between closer, setter and the company.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::attainment::{AttainmentBand, AttainmentTable};
use super::types::SetterCascade;
use crate::deal::DealEconomics;
use crate::error::{ModelError, ensure_rate};
use crate::shared::clamp_rate;

/// Terms for splitting a single sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistributionConfig {
    /// Closer share of the sale amount before attainment.
    pub closer_pct: Decimal,
    /// Setter cascade.
    pub cascade: SetterCascade,
    /// Attainment multipliers.
    pub attainment: AttainmentTable,
}

impl Default for DistributionConfig {
    fn default() -> Self {
        Self {
            closer_pct: dec!(0.20),
            cascade: SetterCascade::default(),
            attainment: AttainmentTable::default(),
        }
    }
}

impl DistributionConfig {
    /// Validate the closer share, cascade and multipliers.
    pub fn validate(&self) -> Result<(), ModelError> {
        ensure_rate("distribution.closer_pct", self.closer_pct)?;
        self.cascade.validate()?;
        self.attainment.validate()
    }
}

/// Split of one sale amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealDistribution {
    /// Closer pay.
    pub closer_pay: Decimal,
    /// Setter pay.
    pub setter_pay: Decimal,
    /// Residual kept by the company.
    pub corp_margin: Decimal,
}

impl std::ops::Add for DealDistribution {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            closer_pay: self.closer_pay + rhs.closer_pay,
            setter_pay: self.setter_pay + rhs.setter_pay,
            corp_margin: self.corp_margin + rhs.corp_margin,
        }
    }
}

/// Immediate and deferred distributions of one deal and their sum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitDistribution {
    /// Split of the upfront cash.
    pub immediate: DealDistribution,
    /// Split of the deferred cash.
    pub deferred: DealDistribution,
    /// Field-wise sum.
    pub total: DealDistribution,
}

/// Split `sale_amount` between closer, setter and company margin.
///
/// The margin is the residual, so the three parts always sum to the sale
/// amount.
#[must_use]
pub fn per_deal_distribution(
    sale_amount: Decimal,
    band: AttainmentBand,
    has_speed_bonus: bool,
    has_followup_bonus: bool,
    config: &DistributionConfig,
) -> DealDistribution {
    let closer_pay =
        sale_amount * clamp_rate(config.closer_pct) * config.attainment.multiplier(band);
    let setter_pay = config
        .cascade
        .setter_pay(closer_pay, has_speed_bonus, has_followup_bonus);

    DealDistribution {
        closer_pay,
        setter_pay,
        corp_margin: sale_amount - closer_pay - setter_pay,
    }
}

/// Distribute a deal's upfront and deferred cash independently and sum them.
#[must_use]
pub fn split_distribution(
    deal: &DealEconomics,
    band: AttainmentBand,
    has_speed_bonus: bool,
    has_followup_bonus: bool,
    config: &DistributionConfig,
) -> SplitDistribution {
    let immediate = per_deal_distribution(
        deal.upfront_cash,
        band,
        has_speed_bonus,
        has_followup_bonus,
        config,
    );
    let deferred = per_deal_distribution(
        deal.deferred_cash,
        band,
        has_speed_bonus,
        has_followup_bonus,
        config,
    );

    SplitDistribution {
        immediate,
        deferred,
        total: immediate + deferred,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_distribution_at_quota() {
        let dist = per_deal_distribution(
            dec!(10000),
            AttainmentBand::From70To100,
            false,
            false,
            &DistributionConfig::default(),
        );
        assert_eq!(dist.closer_pay, dec!(2000));
        assert_eq!(dist.setter_pay, dec!(500));
        assert_eq!(dist.corp_margin, dec!(7500));
    }

    #[test]
    fn test_distribution_with_bonuses_and_accelerator() {
        let dist = per_deal_distribution(
            dec!(10000),
            AttainmentBand::Above150,
            true,
            true,
            &DistributionConfig::default(),
        );
        // 10000 × 0.20 × 1.6 = 3200; 3200 × 0.25 × 1.15 = 920
        assert_eq!(dist.closer_pay, dec!(3200));
        assert_eq!(dist.setter_pay, dec!(920));
        assert_eq!(dist.corp_margin, dec!(5880));
    }

    #[test]
    fn test_split_sums_immediate_and_deferred() {
        let deal = DealEconomics::compute(dec!(3000), 25, dec!(0.027), dec!(0.7));
        let split = split_distribution(
            &deal,
            AttainmentBand::From70To100,
            true,
            false,
            &DistributionConfig::default(),
        );
        // 17010 × 0.2 = 3402; 7290 × 0.2 = 1458
        assert_eq!(split.immediate.closer_pay, dec!(3402));
        assert_eq!(split.deferred.closer_pay, dec!(1458));
        assert_eq!(split.total.closer_pay, dec!(4860));
        assert_eq!(
            split.total.closer_pay + split.total.setter_pay + split.total.corp_margin,
            deal.total_compensation
        );
    }

    proptest! {
        #[test]
        fn prop_distribution_conserves_sale_amount(
            cents in 0i64..10_000_000_000,
            band_idx in 0usize..5,
            speed in any::<bool>(),
            followup in any::<bool>(),
        ) {
            let amount = Decimal::new(cents, 2);
            let dist = per_deal_distribution(
                amount,
                AttainmentBand::ALL[band_idx],
                speed,
                followup,
                &DistributionConfig::default(),
            );
            prop_assert_eq!(dist.closer_pay + dist.setter_pay + dist.corp_margin, amount);
        }
    }
}
