//! Tier renderers and their output descriptions.
//!
//! Each renderer is a pure function from a snapshot record to an
//! OS-agnostic widget description: text fields, color tokens, and
//! normalized progress ratios. The host (a home-screen widget runtime, the
//! terminal preview, a test) owns layout, fonts, and pixels; nothing in
//! here performs I/O or can fail.

pub mod description;
pub mod tier;

pub use description::{
    CategoryRow, ColorToken, LargeLayout, LargeWidget, MediumWidget, SmallWidget,
    WidgetDescription,
};
pub use tier::{
    progress_ratio, render_large, render_medium, render_small, render_snapshot, render_widget,
};
