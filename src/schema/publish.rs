//! Snapshot publishers.
//!
//! The application-side half of the contract: each publisher writes a
//! tier's complete key set in one pass, so a subsequent read resolves every
//! field from the store rather than from defaults. `publish_large` also
//! clears the slots above the published count, which keeps categories
//! removed in the app from lingering in the store.

use crate::schema::snapshot::{LargeSnapshot, MediumSnapshot, SmallSnapshot, TierSnapshot};
use crate::schema::{category_key, keys, CategoryField, MAX_CATEGORIES};
use crate::store::SnapshotStoreMut;

/// Write the small tier's complete key set.
pub fn publish_small(store: &dyn SnapshotStoreMut, snapshot: &SmallSnapshot) {
    store.put(keys::SMALL_BUDGET_NAME, snapshot.budget_name.as_str().into());
    store.put(keys::SMALL_REMAINING_DAYS, snapshot.remaining_days.into());
    store.put(keys::SMALL_REMAINING, snapshot.remaining.into());
    store.put(keys::SMALL_IS_WARNING, snapshot.is_warning.into());
}

/// Write the medium tier's complete key set.
pub fn publish_medium(store: &dyn SnapshotStoreMut, snapshot: &MediumSnapshot) {
    store.put(keys::MEDIUM_BUDGET_NAME, snapshot.budget_name.as_str().into());
    store.put(keys::MEDIUM_TOTAL_BUDGET, snapshot.total_budget.into());
    store.put(keys::MEDIUM_SPENT, snapshot.spent.into());
    store.put(keys::MEDIUM_REMAINING, snapshot.remaining.into());
    store.put(keys::MEDIUM_IS_WARNING, snapshot.is_warning.into());
}

/// Write the large tier's key set: the category count, every field of the
/// published slots, and removal of every field above the count.
///
/// Snapshots longer than five categories are truncated; the store never
/// carries a count above five.
pub fn publish_large(store: &dyn SnapshotStoreMut, snapshot: &LargeSnapshot) {
    let count = snapshot.categories.len().min(MAX_CATEGORIES);
    if count < snapshot.categories.len() {
        log::debug!(
            "large snapshot holds {} categories, publishing the first {count}",
            snapshot.categories.len()
        );
    }

    store.put(keys::LARGE_CATEGORY_COUNT, (count as i64).into());
    for (slot, category) in snapshot.categories.iter().take(count).enumerate() {
        store.put(&category_key(slot, CategoryField::Name), category.name.as_str().into());
        store.put(&category_key(slot, CategoryField::Budget), category.budget.into());
        store.put(&category_key(slot, CategoryField::Spent), category.spent.into());
        store.put(
            &category_key(slot, CategoryField::Remaining),
            category.remaining.into(),
        );
        store.put(
            &category_key(slot, CategoryField::IsWarning),
            category.is_warning.into(),
        );
    }
    for slot in count..MAX_CATEGORIES {
        for field in CategoryField::ALL {
            store.remove(&category_key(slot, field));
        }
    }
}

/// Write any tier's snapshot through one entry point.
pub fn publish_tier(store: &dyn SnapshotStoreMut, snapshot: &TierSnapshot) {
    match snapshot {
        TierSnapshot::Small(small) => publish_small(store, small),
        TierSnapshot::Medium(medium) => publish_medium(store, medium),
        TierSnapshot::Large(large) => publish_large(store, large),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::reader::{read_large, read_medium, read_small};
    use crate::schema::snapshot::CategorySnapshot;
    use crate::store::{MemoryStore, SnapshotStore};

    #[test]
    fn test_publish_small_round_trips() {
        let store = MemoryStore::new();
        let snapshot = SmallSnapshot {
            budget_name: "Food".to_string(),
            remaining_days: 12,
            remaining: 85_000,
            is_warning: false,
        };
        publish_small(&store, &snapshot);

        assert_eq!(read_small(&store), snapshot);
    }

    #[test]
    fn test_publish_medium_round_trips() {
        let store = MemoryStore::new();
        let snapshot = MediumSnapshot::derive("Monthly Budget", 300_000, 280_000);
        publish_medium(&store, &snapshot);

        assert_eq!(read_medium(&store), snapshot);
    }

    #[test]
    fn test_publish_large_round_trips() {
        let store = MemoryStore::new();
        let snapshot = LargeSnapshot::placeholder();
        publish_large(&store, &snapshot);

        assert_eq!(read_large(&store), snapshot);
        assert_eq!(store.int_or(keys::LARGE_CATEGORY_COUNT, -1), 5);
    }

    #[test]
    fn test_publish_large_clears_stale_slots() {
        let store = MemoryStore::new();
        publish_large(&store, &LargeSnapshot::placeholder());

        // Shrink from five categories to one; the other slots must vanish.
        let shrunk = LargeSnapshot {
            categories: vec![CategorySnapshot::derive("Food", 300_000, 180_000)],
        };
        publish_large(&store, &shrunk);

        assert_eq!(store.int_or(keys::LARGE_CATEGORY_COUNT, -1), 1);
        for slot in 1..MAX_CATEGORIES {
            for field in CategoryField::ALL {
                assert_eq!(store.get(&category_key(slot, field)), None);
            }
        }
        assert_eq!(read_large(&store), shrunk);
    }

    #[test]
    fn test_publish_large_truncates_past_five() {
        let store = MemoryStore::new();
        let oversized = LargeSnapshot {
            categories: (0..7)
                .map(|i| CategorySnapshot::derive(format!("Cat{i}"), 1_000, 100))
                .collect(),
        };
        publish_large(&store, &oversized);

        assert_eq!(store.int_or(keys::LARGE_CATEGORY_COUNT, -1), 5);
        assert_eq!(read_large(&store).categories.len(), 5);
    }

    #[test]
    fn test_publish_tier_dispatch() {
        let store = MemoryStore::new();
        publish_tier(&store, &TierSnapshot::placeholder(crate::schema::Tier::Small));
        publish_tier(&store, &TierSnapshot::placeholder(crate::schema::Tier::Medium));
        publish_tier(&store, &TierSnapshot::placeholder(crate::schema::Tier::Large));

        assert_eq!(read_small(&store), SmallSnapshot::placeholder());
        assert_eq!(read_medium(&store), MediumSnapshot::placeholder());
        assert_eq!(read_large(&store), LargeSnapshot::placeholder());
    }
}
