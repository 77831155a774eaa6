//! Property tests for the arithmetic and round-trip guarantees: currency
//! parsing inverts formatting, the warning threshold matches its algebraic
//! form, progress ratios stay bounded, and snapshots survive a publish and
//! read cycle unchanged.

use budgetglance::format::{countdown, CurrencyFormat};
use budgetglance::render::progress_ratio;
use budgetglance::schema::{
    publish_large, publish_medium, publish_small, read_large, read_medium, read_small,
    CategorySnapshot, LargeSnapshot, MediumSnapshot, SmallSnapshot,
};
use budgetglance::store::MemoryStore;
use budgetglance::threshold::recompute_warning;
use proptest::prelude::*;

fn category_strategy() -> impl Strategy<Value = CategorySnapshot> {
    (
        "[A-Za-z]{1,12}",
        any::<i64>(),
        any::<i64>(),
        any::<i64>(),
        any::<bool>(),
    )
        .prop_map(|(name, budget, spent, remaining, is_warning)| CategorySnapshot {
            name,
            budget,
            spent,
            remaining,
            is_warning,
        })
}

proptest! {
    #[test]
    fn prop_currency_parse_inverts_format(amount in any::<i64>()) {
        let krw = CurrencyFormat::krw();
        prop_assert_eq!(krw.parse(&krw.format(amount)), Some(amount));
    }

    #[test]
    fn prop_currency_format_shape(amount in any::<i64>()) {
        let krw = CurrencyFormat::krw();
        let text = krw.format(amount);

        let unsigned = match text.strip_prefix('-') {
            Some(rest) => {
                prop_assert!(amount < 0);
                rest
            }
            None => {
                prop_assert!(amount >= 0);
                text.as_str()
            }
        };
        let digits = unsigned.strip_prefix('₩');
        prop_assert!(digits.is_some());
        let digits = digits.unwrap();

        let groups: Vec<&str> = digits.split(',').collect();
        prop_assert!((1..=3).contains(&groups[0].len()));
        for group in &groups[1..] {
            prop_assert_eq!(group.len(), 3);
        }
        for group in &groups {
            prop_assert!(group.chars().all(|ch| ch.is_ascii_digit()));
        }
        // No leading zero except for the literal zero amount.
        if amount != 0 {
            prop_assert!(!groups[0].starts_with('0'));
        }
    }

    #[test]
    fn prop_countdown_clamps_at_zero(days in any::<i64>()) {
        let label = countdown(days);
        prop_assert!(label.starts_with("D-"));
        let shown: i64 = label["D-".len()..].parse().unwrap();
        prop_assert_eq!(shown, days.max(0));
    }

    #[test]
    fn prop_warning_matches_four_fifths_rule(spent in any::<i64>(), budget in 1i64..) {
        // 5 * (budget - spent) <= budget rearranges to 5 * spent >= 4 * budget.
        let expected = 5 * i128::from(spent) >= 4 * i128::from(budget);
        prop_assert_eq!(recompute_warning(spent, budget), expected);
    }

    #[test]
    fn prop_no_warning_without_positive_budget(spent in any::<i64>(), budget in i64::MIN..=0) {
        prop_assert!(!recompute_warning(spent, budget));
    }

    #[test]
    fn prop_progress_ratio_stays_bounded(spent in any::<i64>(), budget in any::<i64>()) {
        let ratio = progress_ratio(spent, budget);
        prop_assert!((0.0..=1.0).contains(&ratio));
        if budget <= 0 {
            prop_assert_eq!(ratio, 0.0);
        } else if spent >= budget {
            prop_assert_eq!(ratio, 1.0);
        }
    }

    #[test]
    fn prop_small_snapshot_round_trips(
        budget_name in any::<String>(),
        remaining_days in any::<i64>(),
        remaining in any::<i64>(),
        is_warning in any::<bool>(),
    ) {
        let snapshot = SmallSnapshot { budget_name, remaining_days, remaining, is_warning };
        let store = MemoryStore::new();
        publish_small(&store, &snapshot);
        prop_assert_eq!(read_small(&store), snapshot);
    }

    #[test]
    fn prop_medium_snapshot_round_trips(
        budget_name in any::<String>(),
        total_budget in any::<i64>(),
        spent in any::<i64>(),
        remaining in any::<i64>(),
        is_warning in any::<bool>(),
    ) {
        // Fields round-trip as written, even when mutually inconsistent.
        let snapshot = MediumSnapshot { budget_name, total_budget, spent, remaining, is_warning };
        let store = MemoryStore::new();
        publish_medium(&store, &snapshot);
        prop_assert_eq!(read_medium(&store), snapshot);
    }

    #[test]
    fn prop_large_snapshot_round_trips(
        categories in prop::collection::vec(category_strategy(), 0..=5),
    ) {
        let snapshot = LargeSnapshot { categories };
        let store = MemoryStore::new();
        publish_large(&store, &snapshot);
        prop_assert_eq!(read_large(&store), snapshot);
    }

    #[test]
    fn prop_republishing_fewer_categories_leaves_no_residue(
        first in prop::collection::vec(category_strategy(), 0..=5),
        second in prop::collection::vec(category_strategy(), 0..=5),
    ) {
        let store = MemoryStore::new();
        publish_large(&store, &LargeSnapshot { categories: first });
        let replacement = LargeSnapshot { categories: second };
        publish_large(&store, &replacement);
        prop_assert_eq!(read_large(&store), replacement);
    }
}
