//! Defaulting snapshot readers.
//!
//! `read_tier` and the per-tier readers turn whatever is currently in the
//! store into a fully-populated snapshot record. They are total: a missing
//! key resolves to `""`, `0`, or `false`, a value of the wrong shape
//! resolves the same way, and no error ever reaches the caller. The writer
//! is external and may be stale, partially written, or absent entirely;
//! a widget must always have something to render.

use crate::schema::snapshot::{
    CategorySnapshot, LargeSnapshot, MediumSnapshot, SmallSnapshot, TierSnapshot,
};
use crate::schema::{category_key, keys, CategoryField, Tier, MAX_CATEGORIES};
use crate::store::SnapshotStore;

/// Read the small tier's snapshot, defaulting every absent field.
pub fn read_small(store: &dyn SnapshotStore) -> SmallSnapshot {
    SmallSnapshot {
        budget_name: store.string_or(keys::SMALL_BUDGET_NAME, ""),
        remaining_days: store.int_or(keys::SMALL_REMAINING_DAYS, 0),
        remaining: store.int_or(keys::SMALL_REMAINING, 0),
        is_warning: store.bool_or(keys::SMALL_IS_WARNING, false),
    }
}

/// Read the medium tier's snapshot, defaulting every absent field.
///
/// The `remaining` field is taken as stored and never recomputed from
/// `total_budget` and `spent`.
pub fn read_medium(store: &dyn SnapshotStore) -> MediumSnapshot {
    MediumSnapshot {
        budget_name: store.string_or(keys::MEDIUM_BUDGET_NAME, ""),
        total_budget: store.int_or(keys::MEDIUM_TOTAL_BUDGET, 0),
        spent: store.int_or(keys::MEDIUM_SPENT, 0),
        remaining: store.int_or(keys::MEDIUM_REMAINING, 0),
        is_warning: store.bool_or(keys::MEDIUM_IS_WARNING, false),
    }
}

/// Read the large tier's snapshot.
///
/// The stored category count is clamped to `0..=5` and slots at or beyond
/// it are never touched. A slot whose name is empty is dropped, which
/// defends against partial writes; publication order of the surviving
/// slots is preserved.
pub fn read_large(store: &dyn SnapshotStore) -> LargeSnapshot {
    let raw_count = store.int_or(keys::LARGE_CATEGORY_COUNT, 0);
    let count = raw_count.clamp(0, MAX_CATEGORIES as i64) as usize;
    if i64::try_from(count) != Ok(raw_count) {
        log::debug!("category count {raw_count} out of range, clamped to {count}");
    }

    let mut categories = Vec::with_capacity(count);
    for slot in 0..count {
        let name = store.string_or(&category_key(slot, CategoryField::Name), "");
        if name.is_empty() {
            continue;
        }
        categories.push(CategorySnapshot {
            name,
            budget: store.int_or(&category_key(slot, CategoryField::Budget), 0),
            spent: store.int_or(&category_key(slot, CategoryField::Spent), 0),
            remaining: store.int_or(&category_key(slot, CategoryField::Remaining), 0),
            is_warning: store.bool_or(&category_key(slot, CategoryField::IsWarning), false),
        });
    }
    LargeSnapshot { categories }
}

/// Read any tier's snapshot through one entry point.
pub fn read_tier(store: &dyn SnapshotStore, tier: Tier) -> TierSnapshot {
    match tier {
        Tier::Small => TierSnapshot::Small(read_small(store)),
        Tier::Medium => TierSnapshot::Medium(read_medium(store)),
        Tier::Large => TierSnapshot::Large(read_large(store)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, SnapshotStoreMut};

    #[test]
    fn test_read_small_empty_store_yields_defaults() {
        let store = MemoryStore::new();
        let snapshot = read_small(&store);

        assert_eq!(snapshot.budget_name, "");
        assert_eq!(snapshot.remaining_days, 0);
        assert_eq!(snapshot.remaining, 0);
        assert!(!snapshot.is_warning);
    }

    #[test]
    fn test_read_small_populated() {
        let store = MemoryStore::new();
        store.put(keys::SMALL_BUDGET_NAME, "Food".into());
        store.put(keys::SMALL_REMAINING_DAYS, 12i64.into());
        store.put(keys::SMALL_REMAINING, 85_000i64.into());
        store.put(keys::SMALL_IS_WARNING, false.into());

        let snapshot = read_small(&store);
        assert_eq!(snapshot.budget_name, "Food");
        assert_eq!(snapshot.remaining_days, 12);
        assert_eq!(snapshot.remaining, 85_000);
        assert!(!snapshot.is_warning);
    }

    #[test]
    fn test_read_medium_takes_remaining_as_stored() {
        let store = MemoryStore::new();
        store.put(keys::MEDIUM_TOTAL_BUDGET, 300_000i64.into());
        store.put(keys::MEDIUM_SPENT, 280_000i64.into());
        // Deliberately inconsistent with total - spent.
        store.put(keys::MEDIUM_REMAINING, 99i64.into());

        let snapshot = read_medium(&store);
        assert_eq!(snapshot.remaining, 99);
        assert_eq!(snapshot.total_budget, 300_000);
        assert_eq!(snapshot.spent, 280_000);
    }

    #[test]
    fn test_read_medium_type_mismatch_defaults() {
        let store = MemoryStore::new();
        store.put(keys::MEDIUM_TOTAL_BUDGET, "lots".into());
        store.put(keys::MEDIUM_IS_WARNING, 1i64.into());

        let snapshot = read_medium(&store);
        assert_eq!(snapshot.total_budget, 0);
        assert!(!snapshot.is_warning);
    }

    fn put_category(store: &MemoryStore, slot: usize, name: &str, budget: i64, spent: i64) {
        store.put(&category_key(slot, CategoryField::Name), name.into());
        store.put(&category_key(slot, CategoryField::Budget), budget.into());
        store.put(&category_key(slot, CategoryField::Spent), spent.into());
        store.put(
            &category_key(slot, CategoryField::Remaining),
            (budget - spent).into(),
        );
        store.put(&category_key(slot, CategoryField::IsWarning), false.into());
    }

    #[test]
    fn test_read_large_empty_store() {
        let store = MemoryStore::new();
        let snapshot = read_large(&store);
        assert!(snapshot.categories.is_empty());
    }

    #[test]
    fn test_read_large_skips_empty_names_preserving_order() {
        let store = MemoryStore::new();
        store.put(keys::LARGE_CATEGORY_COUNT, 3i64.into());
        put_category(&store, 0, "Food", 300_000, 180_000);
        put_category(&store, 1, "", 100_000, 85_000);
        put_category(&store, 2, "Utilities", 80_000, 60_000);

        let snapshot = read_large(&store);
        assert_eq!(snapshot.categories.len(), 2);
        assert_eq!(snapshot.categories[0].name, "Food");
        assert_eq!(snapshot.categories[1].name, "Utilities");
    }

    #[test]
    fn test_read_large_never_reads_past_count() {
        let store = MemoryStore::new();
        store.put(keys::LARGE_CATEGORY_COUNT, 1i64.into());
        put_category(&store, 0, "Food", 300_000, 180_000);
        // Slot 2 exists in the store but sits beyond the count.
        put_category(&store, 2, "Ghost", 1, 1);

        let snapshot = read_large(&store);
        assert_eq!(snapshot.categories.len(), 1);
        assert_eq!(snapshot.categories[0].name, "Food");
    }

    #[test]
    fn test_read_large_clamps_count() {
        let store = MemoryStore::new();
        store.put(keys::LARGE_CATEGORY_COUNT, 99i64.into());
        for slot in 0..MAX_CATEGORIES {
            put_category(&store, slot, &format!("Cat{slot}"), 1_000, 100);
        }

        let snapshot = read_large(&store);
        assert_eq!(snapshot.categories.len(), MAX_CATEGORIES);

        store.put(keys::LARGE_CATEGORY_COUNT, (-3i64).into());
        let snapshot = read_large(&store);
        assert!(snapshot.categories.is_empty());
    }

    #[test]
    fn test_read_tier_dispatch() {
        let store = MemoryStore::new();
        store.put(keys::SMALL_BUDGET_NAME, "Food".into());

        match read_tier(&store, Tier::Small) {
            TierSnapshot::Small(snapshot) => assert_eq!(snapshot.budget_name, "Food"),
            other => panic!("expected a small snapshot, got {other:?}"),
        }
        assert_eq!(read_tier(&store, Tier::Medium).tier(), Tier::Medium);
        assert_eq!(read_tier(&store, Tier::Large).tier(), Tier::Large);
    }
}
