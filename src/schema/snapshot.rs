//! Snapshot record types.
//!
//! One record per tier, fully populated: the reader fills every field from
//! the store or from its documented default, so code past the read boundary
//! never sees a partial snapshot. The `derive` constructors cover the
//! writer side, computing the remaining amount and the warning flag from
//! budget figures the way the application does before publishing.

use crate::schema::Tier;
use crate::threshold::recompute_warning;
use serde::{Deserialize, Serialize};

/// Snapshot backing the small tier: one budget at a glance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmallSnapshot {
    pub budget_name: String,
    /// Days until the budget period ends. Stored as written; display
    /// policy handles out-of-range values.
    pub remaining_days: i64,
    /// Remaining amount in whole currency units. May be negative when
    /// overspent.
    pub remaining: i64,
    pub is_warning: bool,
}

impl SmallSnapshot {
    /// Sample snapshot shown before the application has published data.
    pub fn placeholder() -> Self {
        Self {
            budget_name: "Budget".to_string(),
            remaining_days: 15,
            remaining: 150_000,
            is_warning: false,
        }
    }
}

/// Snapshot backing the medium tier: one budget with spending progress.
///
/// `remaining` is carried as written even though the writer derives it as
/// `total_budget - spent`; the fields may transiently disagree while a
/// write is in flight, and readers use each one as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediumSnapshot {
    pub budget_name: String,
    pub total_budget: i64,
    pub spent: i64,
    pub remaining: i64,
    pub is_warning: bool,
}

impl MediumSnapshot {
    /// Build a publishable snapshot from budget figures, deriving the
    /// remaining amount and the warning flag.
    pub fn derive(budget_name: impl Into<String>, total_budget: i64, spent: i64) -> Self {
        Self {
            budget_name: budget_name.into(),
            total_budget,
            spent,
            remaining: total_budget.saturating_sub(spent),
            is_warning: recompute_warning(spent, total_budget),
        }
    }

    /// Sample snapshot shown before the application has published data.
    pub fn placeholder() -> Self {
        Self::derive("Monthly Budget", 500_000, 200_000)
    }
}

/// One category slot of the large tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySnapshot {
    /// Category display name. Never empty in a read snapshot; an empty
    /// name marks the slot absent and the reader drops it.
    pub name: String,
    pub budget: i64,
    pub spent: i64,
    pub remaining: i64,
    pub is_warning: bool,
}

impl CategorySnapshot {
    /// Build a publishable category from budget figures, deriving the
    /// remaining amount and the warning flag.
    pub fn derive(name: impl Into<String>, budget: i64, spent: i64) -> Self {
        Self {
            name: name.into(),
            budget,
            spent,
            remaining: budget.saturating_sub(spent),
            is_warning: recompute_warning(spent, budget),
        }
    }
}

/// Snapshot backing the large tier: up to five category slots in
/// publication order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LargeSnapshot {
    pub categories: Vec<CategorySnapshot>,
}

impl LargeSnapshot {
    /// Sample snapshot shown before the application has published data.
    pub fn placeholder() -> Self {
        Self {
            categories: vec![
                CategorySnapshot::derive("Food", 300_000, 180_000),
                CategorySnapshot::derive("Transport", 100_000, 85_000),
                CategorySnapshot::derive("Entertainment", 150_000, 50_000),
                CategorySnapshot::derive("Shopping", 200_000, 190_000),
                CategorySnapshot::derive("Utilities", 80_000, 60_000),
            ],
        }
    }
}

/// A snapshot of any tier, tagged by tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tier", rename_all = "lowercase")]
pub enum TierSnapshot {
    Small(SmallSnapshot),
    Medium(MediumSnapshot),
    Large(LargeSnapshot),
}

impl TierSnapshot {
    /// Which tier this snapshot belongs to.
    pub fn tier(&self) -> Tier {
        match self {
            TierSnapshot::Small(_) => Tier::Small,
            TierSnapshot::Medium(_) => Tier::Medium,
            TierSnapshot::Large(_) => Tier::Large,
        }
    }

    /// Sample snapshot for a tier.
    pub fn placeholder(tier: Tier) -> Self {
        match tier {
            Tier::Small => TierSnapshot::Small(SmallSnapshot::placeholder()),
            Tier::Medium => TierSnapshot::Medium(MediumSnapshot::placeholder()),
            Tier::Large => TierSnapshot::Large(LargeSnapshot::placeholder()),
        }
    }
}
