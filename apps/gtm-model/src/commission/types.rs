//! Core types for commission calculations.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::distribution::DistributionConfig;
use crate::error::{ModelError, ensure_amount, ensure_multiplier, ensure_rate};

/// Sales-team role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Runs the sales meeting and closes.
    Closer,
    /// Books meetings for closers.
    Setter,
    /// Team manager, paid an override on the base.
    Manager,
    /// Reps in training or on standby; salaried, no commission pool.
    Bench,
}

impl Role {
    /// All roles in reporting order.
    pub const ALL: [Self; 4] = [Self::Closer, Self::Setter, Self::Manager, Self::Bench];
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Closer => write!(f, "closer"),
            Self::Setter => write!(f, "setter"),
            Self::Manager => write!(f, "manager"),
            Self::Bench => write!(f, "bench"),
        }
    }
}

/// What the commission percentages are applied to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommissionPolicy {
    /// Upfront cash only.
    #[default]
    Upfront,
    /// Full carrier compensation (upfront + deferred).
    Full,
}

/// How the setter pool is derived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocationMode {
    /// Every role's pool is its commission percentage of the base.
    #[default]
    DirectOfBase,
    /// The setter pool is a share of the closer pool plus bonuses.
    CascadedOfCloser,
}

/// Compensation terms for one role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleCompensation {
    /// Monthly base salary per person.
    pub base_pay: Decimal,
    /// Share of the commission base.
    pub commission_pct: Decimal,
    /// Annual on-target earnings per person.
    pub ote: Decimal,
}

impl RoleCompensation {
    const fn new(base_pay: Decimal, commission_pct: Decimal, ote: Decimal) -> Self {
        Self {
            base_pay,
            commission_pct,
            ote,
        }
    }

    fn validate(&self, role: Role) -> Result<(), ModelError> {
        ensure_amount(&format!("roles.{role}.base_pay"), self.base_pay)?;
        ensure_rate(&format!("roles.{role}.commission_pct"), self.commission_pct)?;
        ensure_amount(&format!("roles.{role}.ote"), self.ote)
    }
}

/// Compensation terms for every role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleCompensationConfig {
    /// Closer terms.
    pub closer: RoleCompensation,
    /// Setter terms.
    pub setter: RoleCompensation,
    /// Manager terms.
    pub manager: RoleCompensation,
    /// Bench terms.
    #[serde(default)]
    pub bench: RoleCompensation,
}

impl Default for RoleCompensationConfig {
    fn default() -> Self {
        Self {
            closer: RoleCompensation::new(dec!(15000), dec!(0.20), dec!(600000)),
            setter: RoleCompensation::new(dec!(10000), dec!(0.05), dec!(300000)),
            manager: RoleCompensation::new(dec!(35000), dec!(0.03), dec!(700000)),
            bench: RoleCompensation::new(dec!(8000), Decimal::ZERO, dec!(120000)),
        }
    }
}

impl RoleCompensationConfig {
    /// Terms for a role.
    #[must_use]
    pub const fn get(&self, role: Role) -> &RoleCompensation {
        match role {
            Role::Closer => &self.closer,
            Role::Setter => &self.setter,
            Role::Manager => &self.manager,
            Role::Bench => &self.bench,
        }
    }

    /// Sum of commission percentages across roles.
    #[must_use]
    pub fn total_commission_pct(&self) -> Decimal {
        Role::ALL.iter().map(|r| self.get(*r).commission_pct).sum()
    }

    /// Monthly base salaries for the whole team.
    #[must_use]
    pub fn monthly_base_payroll(&self, team: &TeamCounts) -> Decimal {
        Role::ALL
            .iter()
            .map(|r| self.get(*r).base_pay * Decimal::from(team.get(*r)))
            .sum()
    }

    /// Validate per-role ranges.
    ///
    /// Percentages summing above 100% are a caller error that is reported
    /// but not rejected.
    pub fn validate(&self) -> Result<(), ModelError> {
        for role in Role::ALL {
            self.get(role).validate(role)?;
        }
        let total = self.total_commission_pct();
        if total > Decimal::ONE {
            warn!(total_commission_pct = %total, "Role commission percentages exceed 100% of base");
        }
        Ok(())
    }
}

/// Headcount per role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamCounts {
    /// Closers.
    #[serde(default)]
    pub closer: u32,
    /// Setters.
    #[serde(default)]
    pub setter: u32,
    /// Managers.
    #[serde(default)]
    pub manager: u32,
    /// Bench.
    #[serde(default)]
    pub bench: u32,
}

impl TeamCounts {
    /// Headcount for a role.
    #[must_use]
    pub const fn get(&self, role: Role) -> u32 {
        match role {
            Role::Closer => self.closer,
            Role::Setter => self.setter,
            Role::Manager => self.manager,
            Role::Bench => self.bench,
        }
    }
}

/// Setter pay derived from closer pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetterCascade {
    /// Setter share of closer pay.
    pub setter_of_closer_pct: Decimal,
    /// Bonus for booking within the speed window.
    pub speed_bonus_pct: Decimal,
    /// Bonus for follow-up discipline.
    pub followup_bonus_pct: Decimal,
}

impl Default for SetterCascade {
    fn default() -> Self {
        Self {
            setter_of_closer_pct: dec!(0.25),
            speed_bonus_pct: dec!(0.10),
            followup_bonus_pct: dec!(0.05),
        }
    }
}

impl SetterCascade {
    /// Setter pay for a given closer pay and earned bonuses.
    #[must_use]
    pub fn setter_pay(&self, closer_pay: Decimal, has_speed: bool, has_followup: bool) -> Decimal {
        let mut bonus = Decimal::ONE;
        if has_speed {
            bonus += self.speed_bonus_pct;
        }
        if has_followup {
            bonus += self.followup_bonus_pct;
        }
        closer_pay * self.setter_of_closer_pct * bonus
    }

    pub(crate) fn validate(&self) -> Result<(), ModelError> {
        ensure_rate("cascade.setter_of_closer_pct", self.setter_of_closer_pct)?;
        ensure_rate("cascade.speed_bonus_pct", self.speed_bonus_pct)?;
        ensure_rate("cascade.followup_bonus_pct", self.followup_bonus_pct)
    }
}

/// Commission section of a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionSettings {
    /// Commission base policy.
    #[serde(default)]
    pub policy: CommissionPolicy,
    /// Setter pool derivation.
    #[serde(default)]
    pub allocation_mode: AllocationMode,
    /// Per-deal split terms; its cascade also drives `CascadedOfCloser` pools.
    #[serde(default)]
    pub distribution: DistributionConfig,
    /// Expected closer attainment (fraction of quota).
    #[serde(default = "default_attainment")]
    pub expected_attainment: Decimal,
    /// Whether closers earn the speed bonus on each deal.
    #[serde(default = "default_bonus_enabled")]
    pub has_speed_bonus: bool,
    /// Whether setters earn the follow-up bonus on each deal.
    #[serde(default = "default_bonus_enabled")]
    pub has_followup_bonus: bool,
}

impl Default for CommissionSettings {
    fn default() -> Self {
        Self {
            policy: CommissionPolicy::default(),
            allocation_mode: AllocationMode::default(),
            distribution: DistributionConfig::default(),
            expected_attainment: default_attainment(),
            has_speed_bonus: default_bonus_enabled(),
            has_followup_bonus: default_bonus_enabled(),
        }
    }
}

const fn default_attainment() -> Decimal {
    Decimal::ONE
}

const fn default_bonus_enabled() -> bool {
    true
}

impl CommissionSettings {
    /// Validate distribution, cascade and attainment settings.
    pub fn validate(&self) -> Result<(), ModelError> {
        self.distribution.validate()?;
        ensure_multiplier("expected_attainment", self.expected_attainment)
    }
}
