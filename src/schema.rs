//! The per-tier snapshot schema.
//!
//! A snapshot is a flat set of key-value pairs the application writes for
//! each widget size tier, partitioned by key prefix: `small_*`, `medium_*`,
//! and `large_*` with up to five `large_cat{i}_*` category slots. This
//! module pins the contract down: the tier identifiers, the exact key
//! names, the snapshot record types, the defaulting readers, and the
//! publishers that write a tier's complete key set.
//!
//! The key names are shared verbatim with the deployed widget storage and
//! must not change; a renamed key silently degrades to default values on
//! the reading side.

use crate::error::GlanceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod publish;
pub mod reader;
pub mod snapshot;

pub use publish::{publish_large, publish_medium, publish_small, publish_tier};
pub use reader::{read_large, read_medium, read_small, read_tier};
pub use snapshot::{
    CategorySnapshot, LargeSnapshot, MediumSnapshot, SmallSnapshot, TierSnapshot,
};

/// Upper bound on category slots in the large tier.
pub const MAX_CATEGORIES: usize = 5;

/// Store key names, exactly as written by the application.
pub mod keys {
    pub const SMALL_BUDGET_NAME: &str = "small_budgetName";
    pub const SMALL_REMAINING_DAYS: &str = "small_remainingDays";
    pub const SMALL_REMAINING: &str = "small_remaining";
    pub const SMALL_IS_WARNING: &str = "small_isWarning";

    pub const MEDIUM_BUDGET_NAME: &str = "medium_budgetName";
    pub const MEDIUM_TOTAL_BUDGET: &str = "medium_totalBudget";
    pub const MEDIUM_SPENT: &str = "medium_spent";
    pub const MEDIUM_REMAINING: &str = "medium_remaining";
    pub const MEDIUM_IS_WARNING: &str = "medium_isWarning";

    pub const LARGE_CATEGORY_COUNT: &str = "large_categoryCount";
}

/// Widget size tier.
///
/// Each tier has its own key set and render description shape; the tiers
/// share nothing in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Small,
    Medium,
    Large,
}

impl Tier {
    /// The three tiers in display order.
    pub const ALL: [Tier; 3] = [Tier::Small, Tier::Medium, Tier::Large];

    /// Lowercase tier name, matching the key prefix in the store.
    pub fn name(self) -> &'static str {
        match self {
            Tier::Small => "small",
            Tier::Medium => "medium",
            Tier::Large => "large",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tier {
    type Err = GlanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(Tier::Small),
            "medium" => Ok(Tier::Medium),
            "large" => Ok(Tier::Large),
            other => Err(GlanceError::invalid_argument(format!(
                "unknown tier {other:?}, expected one of: small, medium, large"
            ))),
        }
    }
}

/// Per-category field suffixes within a large-tier slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryField {
    Name,
    Budget,
    Spent,
    Remaining,
    IsWarning,
}

impl CategoryField {
    /// All fields of one category slot.
    pub const ALL: [CategoryField; 5] = [
        CategoryField::Name,
        CategoryField::Budget,
        CategoryField::Spent,
        CategoryField::Remaining,
        CategoryField::IsWarning,
    ];

    fn suffix(self) -> &'static str {
        match self {
            CategoryField::Name => "name",
            CategoryField::Budget => "budget",
            CategoryField::Spent => "spent",
            CategoryField::Remaining => "remaining",
            CategoryField::IsWarning => "isWarning",
        }
    }
}

/// Store key for one field of a large-tier category slot.
///
/// Slot indices run `0..MAX_CATEGORIES`; the writer and reader both derive
/// keys through here so the `large_cat{i}_{field}` shape lives in one place.
pub fn category_key(slot: usize, field: CategoryField) -> String {
    format!("large_cat{}_{}", slot, field.suffix())
}
