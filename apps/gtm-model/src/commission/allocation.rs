//! Commission base and role pools.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::types::{
    AllocationMode, CommissionPolicy, Role, RoleCompensationConfig, SetterCascade, TeamCounts,
};
use crate::deal::DealEconomics;
use crate::shared::{clamp_rate, non_negative, safe_div};

/// Revenue the commission percentages apply to.
#[must_use]
pub fn commission_base(
    sales_count: Decimal,
    deal: &DealEconomics,
    policy: CommissionPolicy,
) -> Decimal {
    let per_deal = match policy {
        CommissionPolicy::Upfront => deal.upfront_cash,
        CommissionPolicy::Full => deal.total_compensation,
    };
    non_negative(sales_count) * per_deal
}

/// Pooled commission per role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionPools {
    /// Closer pool.
    pub closer: Decimal,
    /// Setter pool.
    pub setter: Decimal,
    /// Manager pool.
    pub manager: Decimal,
    /// Sum of all pools.
    pub total: Decimal,
}

/// Pool divided by headcount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerPersonPay {
    /// Commission per closer.
    pub closer: Decimal,
    /// Commission per setter.
    pub setter: Decimal,
    /// Commission per manager.
    pub manager: Decimal,
}

impl CommissionPools {
    /// Pool for a role; bench has none.
    #[must_use]
    pub const fn get(&self, role: Role) -> Decimal {
        match role {
            Role::Closer => self.closer,
            Role::Setter => self.setter,
            Role::Manager => self.manager,
            Role::Bench => Decimal::ZERO,
        }
    }

    /// Split each pool evenly across its role's headcount.
    ///
    /// Headcount never changes pool size; a role with nobody in it reports 0.
    #[must_use]
    pub fn per_person(&self, team: &TeamCounts) -> PerPersonPay {
        let share = |role: Role| {
            safe_div(self.get(role), Decimal::from(team.get(role)), Decimal::ZERO)
        };
        PerPersonPay {
            closer: share(Role::Closer),
            setter: share(Role::Setter),
            manager: share(Role::Manager),
        }
    }
}

/// Allocate a commission base to closer, setter and manager pools.
///
/// With [`AllocationMode::CascadedOfCloser`] the setter pool is
/// `closer_pool × setter_of_closer_pct × (1 + speed + followup)` and the
/// setter's own `commission_pct` is ignored.
#[must_use]
pub fn allocate_commission(
    commission_base: Decimal,
    roles: &RoleCompensationConfig,
    mode: AllocationMode,
    cascade: &SetterCascade,
) -> CommissionPools {
    let base = non_negative(commission_base);
    let pool = |role: Role| base * clamp_rate(roles.get(role).commission_pct);

    let closer = pool(Role::Closer);
    let setter = match mode {
        AllocationMode::DirectOfBase => pool(Role::Setter),
        AllocationMode::CascadedOfCloser => cascade.setter_pay(closer, true, true),
    };
    let manager = pool(Role::Manager);

    let pools = CommissionPools {
        closer,
        setter,
        manager,
        total: closer + setter + manager,
    };

    debug!(
        commission_base = %base,
        mode = ?mode,
        closer = %pools.closer,
        setter = %pools.setter,
        manager = %pools.manager,
        "Commission allocated"
    );

    pools
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn deal() -> DealEconomics {
        DealEconomics::compute(dec!(3000), 25, dec!(0.027), dec!(0.7))
    }

    #[test]
    fn test_commission_base_by_policy() {
        assert_eq!(
            commission_base(dec!(10), &deal(), CommissionPolicy::Upfront),
            dec!(170100)
        );
        assert_eq!(
            commission_base(dec!(10), &deal(), CommissionPolicy::Full),
            dec!(243000)
        );
        assert_eq!(
            commission_base(Decimal::ZERO, &deal(), CommissionPolicy::Full),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_direct_allocation() {
        let pools = allocate_commission(
            dec!(100000),
            &RoleCompensationConfig::default(),
            AllocationMode::DirectOfBase,
            &SetterCascade::default(),
        );
        assert_eq!(pools.closer, dec!(20000));
        assert_eq!(pools.setter, dec!(5000));
        assert_eq!(pools.manager, dec!(3000));
        assert_eq!(pools.total, dec!(28000));
    }

    #[test]
    fn test_cascaded_allocation() {
        let pools = allocate_commission(
            dec!(100000),
            &RoleCompensationConfig::default(),
            AllocationMode::CascadedOfCloser,
            &SetterCascade::default(),
        );
        // 20000 × 0.25 × 1.15
        assert_eq!(pools.closer, dec!(20000));
        assert_eq!(pools.setter, dec!(5750));
        assert_eq!(pools.total, dec!(28750));
    }

    #[test]
    fn test_per_person_split() {
        let pools = CommissionPools {
            closer: dec!(20000),
            setter: dec!(5000),
            manager: dec!(3000),
            total: dec!(28000),
        };
        let team = TeamCounts {
            closer: 4,
            setter: 0,
            manager: 1,
            bench: 2,
        };
        let pay = pools.per_person(&team);
        assert_eq!(pay.closer, dec!(5000));
        assert_eq!(pay.setter, Decimal::ZERO);
        assert_eq!(pay.manager, dec!(3000));
    }
}
