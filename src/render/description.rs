//! Widget description types handed to hosts.
//!
//! Plain structured data: strings already formatted for display, abstract
//! color tokens, and progress ratios normalized to `[0, 1]`. A host maps
//! tokens to its own palette and ratios to its own bar geometry.

use serde::{Deserialize, Serialize};

/// Abstract display color, resolved by the host's palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorToken {
    /// Regular text and healthy amounts
    Normal,
    /// Low-budget warning emphasis
    Warning,
    /// Progress and highlights outside the warning state
    Accent,
}

impl ColorToken {
    /// Token for an amount: warning emphasis or regular text.
    pub fn for_amount(is_warning: bool) -> Self {
        if is_warning {
            ColorToken::Warning
        } else {
            ColorToken::Normal
        }
    }

    /// Token for a progress bar: warning emphasis or the accent color.
    pub fn for_progress(is_warning: bool) -> Self {
        if is_warning {
            ColorToken::Warning
        } else {
            ColorToken::Accent
        }
    }
}

/// Small tier output: one budget at a glance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmallWidget {
    /// Budget name
    pub title: String,
    /// Countdown label, e.g. `D-12`
    pub subtitle: String,
    /// Formatted remaining amount, e.g. `₩85,000`
    pub amount: String,
    pub amount_color: ColorToken,
}

/// Medium tier output: one budget with spending progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediumWidget {
    pub title: String,
    /// Formatted total budget
    pub total_label: String,
    /// Formatted spent amount
    pub spent_label: String,
    /// Formatted remaining amount
    pub remaining_label: String,
    pub remaining_color: ColorToken,
    /// Fraction of the budget spent, in `[0, 1]`
    pub progress_ratio: f64,
    pub progress_color: ColorToken,
}

/// One category row of the large tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRow {
    pub name: String,
    pub remaining_label: String,
    pub remaining_color: ColorToken,
    /// Fraction of the category budget spent, in `[0, 1]`
    pub progress_ratio: f64,
    pub progress_color: ColorToken,
    /// Spending summary, e.g. `₩180,000 / ₩300,000`
    pub caption: String,
}

/// Body of the large tier: category rows, or a first-class empty state
/// when no valid category survived the read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LargeLayout {
    /// Nothing to show yet; `message` explains, it is not an error
    Empty { message: String },
    /// Up to five rows in publication order
    Categories { rows: Vec<CategoryRow> },
}

/// Large tier output: a titled list of category rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LargeWidget {
    /// List header shown above the rows
    pub title: String,
    pub layout: LargeLayout,
}

/// Any tier's render output, tagged by tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tier", rename_all = "lowercase")]
pub enum WidgetDescription {
    Small(SmallWidget),
    Medium(MediumWidget),
    Large(LargeWidget),
}
