//! The render pipeline.
//!
//! One path serves all three tiers: read a snapshot through the store
//! handle, then shape it into a widget description with the shared
//! formatter. Renderers trust the snapshot. The warning flag and the
//! remaining amounts are displayed as given, never re-derived here; the
//! writer owns that arithmetic.

use crate::format::{countdown, CurrencyFormat};
use crate::render::description::{
    CategoryRow, ColorToken, LargeLayout, LargeWidget, MediumWidget, SmallWidget,
    WidgetDescription,
};
use crate::schema::snapshot::{LargeSnapshot, MediumSnapshot, SmallSnapshot, TierSnapshot};
use crate::schema::{read_tier, Tier, MAX_CATEGORIES};
use crate::store::SnapshotStore;

/// Header shown above the large tier's category list.
pub const LARGE_TITLE: &str = "Budget Categories";

/// Message shown when the large tier has no categories to display.
pub const EMPTY_MESSAGE: &str = "No budget data";

/// Fraction of a budget spent, normalized to `[0, 1]`.
///
/// A zero or negative budget yields `0` rather than a division artifact,
/// and any non-finite intermediate collapses to `0` as well; hosts can
/// always feed the result straight into bar geometry.
pub fn progress_ratio(spent: i64, budget: i64) -> f64 {
    if budget <= 0 {
        return 0.0;
    }
    let ratio = spent as f64 / budget as f64;
    if !ratio.is_finite() {
        return 0.0;
    }
    ratio.clamp(0.0, 1.0)
}

/// Render the small tier.
pub fn render_small(snapshot: &SmallSnapshot, currency: &CurrencyFormat) -> SmallWidget {
    SmallWidget {
        title: snapshot.budget_name.clone(),
        subtitle: countdown(snapshot.remaining_days),
        amount: currency.format(snapshot.remaining),
        amount_color: ColorToken::for_amount(snapshot.is_warning),
    }
}

/// Render the medium tier.
pub fn render_medium(snapshot: &MediumSnapshot, currency: &CurrencyFormat) -> MediumWidget {
    MediumWidget {
        title: snapshot.budget_name.clone(),
        total_label: currency.format(snapshot.total_budget),
        spent_label: currency.format(snapshot.spent),
        remaining_label: currency.format(snapshot.remaining),
        remaining_color: ColorToken::for_amount(snapshot.is_warning),
        progress_ratio: progress_ratio(snapshot.spent, snapshot.total_budget),
        progress_color: ColorToken::for_progress(snapshot.is_warning),
    }
}

/// Render the large tier.
///
/// An empty category list produces the empty-state layout, a first-class
/// output variant rather than an error or a zero-row list. Output is
/// capped at [`MAX_CATEGORIES`] rows however many entries the snapshot
/// carries; the store reader never yields more, but snapshots built in
/// code get the same ceiling.
pub fn render_large(snapshot: &LargeSnapshot, currency: &CurrencyFormat) -> LargeWidget {
    if snapshot.categories.is_empty() {
        return LargeWidget {
            title: LARGE_TITLE.to_string(),
            layout: LargeLayout::Empty {
                message: EMPTY_MESSAGE.to_string(),
            },
        };
    }

    let rows = snapshot
        .categories
        .iter()
        .take(MAX_CATEGORIES)
        .map(|category| CategoryRow {
            name: category.name.clone(),
            remaining_label: currency.format(category.remaining),
            remaining_color: ColorToken::for_amount(category.is_warning),
            progress_ratio: progress_ratio(category.spent, category.budget),
            progress_color: ColorToken::for_progress(category.is_warning),
            caption: format!(
                "{} / {}",
                currency.format(category.spent),
                currency.format(category.budget)
            ),
        })
        .collect();

    LargeWidget {
        title: LARGE_TITLE.to_string(),
        layout: LargeLayout::Categories { rows },
    }
}

/// Render any tier's snapshot through one entry point.
pub fn render_snapshot(snapshot: &TierSnapshot, currency: &CurrencyFormat) -> WidgetDescription {
    match snapshot {
        TierSnapshot::Small(small) => WidgetDescription::Small(render_small(small, currency)),
        TierSnapshot::Medium(medium) => {
            WidgetDescription::Medium(render_medium(medium, currency))
        }
        TierSnapshot::Large(large) => WidgetDescription::Large(render_large(large, currency)),
    }
}

/// Read the store and render a tier in one call.
///
/// This is the whole widget pipeline as a host invokes it on a refresh
/// event: a single best-effort read followed by a pure transform, with a
/// guaranteed description as the result.
pub fn render_widget(
    store: &dyn SnapshotStore,
    tier: Tier,
    currency: &CurrencyFormat,
) -> WidgetDescription {
    render_snapshot(&read_tier(store, tier), currency)
}
