//! # budgetglance - Budget Widget Snapshot Contract
//!
//! The shared snapshot schema and per-tier presentation contract behind a
//! budgeting app's home-screen widgets. The application writes a compact
//! key-value snapshot per widget size tier; stateless renderers read it
//! back, defaulting anything missing, and produce OS-agnostic widget
//! descriptions ready for a host to lay out.
//!
//! ## Features
//!
//! - **Total reads**: missing or malformed store values resolve to
//!   documented defaults; a widget always has something to render
//! - **Pure renderers**: snapshot in, description out, no I/O and no
//!   failure paths past the read boundary
//! - **Fixed-locale formatting**: Korean Won currency strings and `D-n`
//!   countdown labels
//! - **Explicit refresh contract**: displayed data may lag the app by at
//!   most one refresh interval, and reads never block
//! - **Terminal preview**: a ratatui host that stands in for the home
//!   screen during development
//!
//! ## Architecture
//!
//! The library is organized into focused modules following modern Rust patterns:
//!
//! - [`error`] - Centralized error types and handling
//! - [`store`] - Key-value store capability traits and implementations
//! - [`schema`] - Tier key contract, snapshot records, readers, publishers
//! - [`format`] - Currency and countdown formatting
//! - [`threshold`] - Warning threshold policy
//! - [`render`] - Tier renderers and widget descriptions
//! - [`refresh`] - Refresh cadence and staleness rules
//! - [`preview`] - Terminal preview host

// Core modules
pub mod error;
pub mod store;

// The snapshot contract
pub mod format;
pub mod schema;
pub mod threshold;

// Rendering and hosting
pub mod preview;
pub mod refresh;
pub mod render;

// Re-export commonly used types for convenience
pub use error::{GlanceError, Result};

// Public API surface for external usage
pub use format::CurrencyFormat;
pub use render::{render_widget, WidgetDescription};
pub use schema::{read_tier, Tier, TierSnapshot};
pub use store::{JsonFileStore, MemoryStore, SnapshotStore, SnapshotStoreMut};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
