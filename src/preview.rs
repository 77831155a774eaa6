//! Terminal stand-in for the platform widget host.
//!
//! The real widgets live on a phone home screen; during development this
//! module plays the host instead. It maps color tokens to terminal colors,
//! draws each tier's description with ratatui, renders descriptions to
//! plain text for non-interactive use, and runs an interactive loop that
//! re-reads the store on the refresh cadence.

pub mod terminal;
pub mod text;
pub mod theme;
pub mod widgets;

pub use terminal::{PreviewAction, PreviewHost};
pub use text::render_to_text;
pub use theme::WidgetTheme;
