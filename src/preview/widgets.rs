//! Tier frames for the terminal preview.
//!
//! One draw function per widget description, each painting into a
//! rectangular area: a bordered frame in place of the widget chrome, the
//! description's text in theme colors, and a block-character progress bar
//! in place of the platform gauge. Degrades to drawing nothing when the
//! area is too small, never panicking on tight terminals.

use crate::preview::theme::WidgetTheme;
use crate::render::{
    CategoryRow, LargeLayout, LargeWidget, MediumWidget, SmallWidget, WidgetDescription,
};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Progress bar string of `width` cells, filled proportionally to `ratio`.
///
/// The ratio is clamped to `[0, 1]`, so callers can pass a description's
/// ratio straight through.
pub fn fill_bar(ratio: f64, width: usize) -> String {
    let clamped = ratio.clamp(0.0, 1.0);
    let filled = ((clamped * width as f64).round() as usize).min(width);
    format!(
        "{}{}",
        "\u{2588}".repeat(filled),
        "\u{2591}".repeat(width - filled)
    )
}

/// Draw several descriptions side by side, splitting the area evenly.
pub fn draw_descriptions(
    frame: &mut Frame,
    area: Rect,
    descriptions: &[WidgetDescription],
    theme: &WidgetTheme,
) {
    if descriptions.is_empty() {
        return;
    }
    let constraints: Vec<Constraint> = descriptions
        .iter()
        .map(|_| Constraint::Ratio(1, descriptions.len() as u32))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);
    for (description, chunk) in descriptions.iter().zip(chunks.iter()) {
        draw_description(frame, *chunk, description, theme);
    }
}

/// Draw one description of any tier.
pub fn draw_description(
    frame: &mut Frame,
    area: Rect,
    description: &WidgetDescription,
    theme: &WidgetTheme,
) {
    match description {
        WidgetDescription::Small(widget) => draw_small(frame, area, widget, theme),
        WidgetDescription::Medium(widget) => draw_medium(frame, area, widget, theme),
        WidgetDescription::Large(widget) => draw_large(frame, area, widget, theme),
    }
}

/// Draw the small tier: title, countdown, remaining amount.
pub fn draw_small(frame: &mut Frame, area: Rect, widget: &SmallWidget, theme: &WidgetTheme) {
    let Some(inner) = framed(frame, area, " small ", theme) else {
        return;
    };

    let lines = vec![
        Line::from(Span::styled(
            widget.title.clone(),
            Style::default().fg(theme.normal).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            widget.subtitle.clone(),
            Style::default().fg(theme.caption),
        )),
        Line::from(Span::styled(
            widget.amount.clone(),
            Style::default().fg(theme.color_for(widget.amount_color)),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Draw the medium tier: title, spending summary, remaining amount, bar.
pub fn draw_medium(frame: &mut Frame, area: Rect, widget: &MediumWidget, theme: &WidgetTheme) {
    let Some(inner) = framed(frame, area, " medium ", theme) else {
        return;
    };

    let bar_width = inner.width.saturating_sub(2) as usize;
    let lines = vec![
        Line::from(Span::styled(
            widget.title.clone(),
            Style::default().fg(theme.normal).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} / {}", widget.spent_label, widget.total_label),
            Style::default().fg(theme.caption),
        )),
        Line::from(vec![
            Span::styled("remaining ", Style::default().fg(theme.caption)),
            Span::styled(
                widget.remaining_label.clone(),
                Style::default().fg(theme.color_for(widget.remaining_color)),
            ),
        ]),
        Line::from(Span::styled(
            fill_bar(widget.progress_ratio, bar_width),
            Style::default().fg(theme.color_for(widget.progress_color)),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Draw the large tier: a titled list of category rows, or its empty state.
pub fn draw_large(frame: &mut Frame, area: Rect, widget: &LargeWidget, theme: &WidgetTheme) {
    let title = format!(" {} ", widget.title);
    let Some(inner) = framed(frame, area, &title, theme) else {
        return;
    };

    let lines = match &widget.layout {
        LargeLayout::Empty { message } => vec![Line::from(Span::styled(
            message.clone(),
            Style::default().fg(theme.caption),
        ))],
        LargeLayout::Categories { rows } => {
            let bar_width = (inner.width.saturating_sub(4) as usize).min(16);
            rows.iter()
                .flat_map(|row| category_lines(row, bar_width, theme))
                .collect()
        }
    };
    frame.render_widget(Paragraph::new(lines), inner);
}

fn category_lines(row: &CategoryRow, bar_width: usize, theme: &WidgetTheme) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled(
                row.name.clone(),
                Style::default().fg(theme.normal).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                row.remaining_label.clone(),
                Style::default().fg(theme.color_for(row.remaining_color)),
            ),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                fill_bar(row.progress_ratio, bar_width),
                Style::default().fg(theme.color_for(row.progress_color)),
            ),
            Span::raw("  "),
            Span::styled(row.caption.clone(), Style::default().fg(theme.caption)),
        ]),
    ]
}

/// Render the widget frame and hand back the drawable interior, or `None`
/// when the area is too small to hold any content.
fn framed(frame: &mut Frame, area: Rect, title: &str, theme: &WidgetTheme) -> Option<Rect> {
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width < 4 || inner.height < 1 {
        None
    } else {
        Some(inner)
    }
}
