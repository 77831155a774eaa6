//! Warning threshold policy.
//!
//! The warning flag stored in a snapshot is ground truth for renderers;
//! they never re-derive it at display time. The policy that produces the
//! flag lives here so the writer helpers and the test suite share one
//! definition.

/// Decide whether a budget is in the warning state.
///
/// True when the budget is positive and the remaining amount has fallen to
/// one fifth of the budget or less, i.e. at least 80% is spent. A zero or
/// negative budget never warns; an unset budget reads as zero and stays
/// quiet rather than dividing by it.
///
/// The comparison is exact integer arithmetic in a wider type, so a spend
/// of exactly 80% trips the warning for every budget, with no rounding
/// seam.
pub fn recompute_warning(spent: i64, budget: i64) -> bool {
    if budget <= 0 {
        return false;
    }
    let remaining = budget as i128 - spent as i128;
    5 * remaining <= budget as i128
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_at_exact_boundary() {
        // remaining == 20% of budget is in warning.
        assert!(recompute_warning(80_000, 100_000));
        // One unit under the boundary is not.
        assert!(!recompute_warning(79_999, 100_000));
        // One unit over clearly is.
        assert!(recompute_warning(80_001, 100_000));
    }

    #[test]
    fn test_boundary_exact_for_budgets_that_do_not_divide_evenly() {
        // 80% of 333 is 266.4; spending 267 crosses it, 266 does not.
        assert!(recompute_warning(267, 333));
        assert!(!recompute_warning(266, 333));
    }

    #[test]
    fn test_zero_budget_never_warns() {
        assert!(!recompute_warning(0, 0));
        assert!(!recompute_warning(1_000_000, 0));
        assert!(!recompute_warning(-1_000_000, 0));
    }

    #[test]
    fn test_negative_budget_never_warns() {
        assert!(!recompute_warning(0, -100));
        assert!(!recompute_warning(500, -100));
    }

    #[test]
    fn test_overspent_budget_warns() {
        assert!(recompute_warning(150_000, 100_000));
    }

    #[test]
    fn test_negative_spend_is_far_from_warning() {
        // A refund-heavy month can leave spent below zero.
        assert!(!recompute_warning(-50_000, 100_000));
    }

    #[test]
    fn test_extreme_amounts_do_not_overflow() {
        assert!(recompute_warning(i64::MAX, i64::MAX));
        assert!(!recompute_warning(i64::MIN, i64::MAX));
        assert!(!recompute_warning(i64::MIN, 1));
        assert!(recompute_warning(i64::MAX, 1));
    }
}
