//! Plain-text rendering of widget descriptions.
//!
//! The non-interactive display path: a description becomes the lines a
//! terminal or a log can show, with color tokens reduced to a trailing
//! `(!)` warning marker. Backs the `show` command and keeps the full
//! pipeline assertable in tests without a terminal.

use crate::preview::widgets::fill_bar;
use crate::render::{ColorToken, LargeLayout, WidgetDescription};

const BAR_WIDTH: usize = 20;

/// Render a description as display text, one field per line, with a
/// trailing newline.
pub fn render_to_text(description: &WidgetDescription) -> String {
    let mut lines = Vec::new();
    match description {
        WidgetDescription::Small(widget) => {
            lines.push(widget.title.clone());
            lines.push(widget.subtitle.clone());
            lines.push(format!(
                "{}{}",
                widget.amount,
                warning_marker(widget.amount_color)
            ));
        }
        WidgetDescription::Medium(widget) => {
            lines.push(widget.title.clone());
            lines.push(format!("{} / {}", widget.spent_label, widget.total_label));
            lines.push(format!(
                "remaining {}{}",
                widget.remaining_label,
                warning_marker(widget.remaining_color)
            ));
            lines.push(format!(
                "[{}] {:.0}%",
                fill_bar(widget.progress_ratio, BAR_WIDTH),
                widget.progress_ratio * 100.0
            ));
        }
        WidgetDescription::Large(widget) => {
            lines.push(widget.title.clone());
            match &widget.layout {
                LargeLayout::Empty { message } => lines.push(message.clone()),
                LargeLayout::Categories { rows } => {
                    for row in rows {
                        lines.push(format!(
                            "{}  {}{}",
                            row.name,
                            row.remaining_label,
                            warning_marker(row.remaining_color)
                        ));
                        lines.push(format!(
                            "  [{}] {}",
                            fill_bar(row.progress_ratio, BAR_WIDTH),
                            row.caption
                        ));
                    }
                }
            }
        }
    }
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn warning_marker(color: ColorToken) -> &'static str {
    match color {
        ColorToken::Warning => " (!)",
        _ => "",
    }
}
