//! Line-based layout helpers.
//!
//! The scrolling body is a single `Paragraph`, so boxes and multi-column
//! rows are composed as `Line`s here instead of as nested widgets.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

/// Pads a line with trailing spaces up to `width` columns.
pub fn pad_line(mut line: Line<'static>, width: usize) -> Line<'static> {
    let current = line.width();
    if current < width {
        line.spans.push(Span::raw(" ".repeat(width - current)));
    }
    line
}

/// Places columns side by side, each padded to `width`, separated by `gap`.
///
/// Shorter columns are padded with blank lines.
pub fn join_columns(columns: &[Vec<Line<'static>>], width: usize, gap: usize) -> Vec<Line<'static>> {
    let height = columns.iter().map(Vec::len).max().unwrap_or(0);
    (0..height)
        .map(|row| {
            let mut spans = Vec::new();
            for (i, column) in columns.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" ".repeat(gap)));
                }
                let line = column.get(row).cloned().unwrap_or_default();
                spans.extend(pad_line(line, width).spans);
            }
            Line::from(spans)
        })
        .collect()
}

/// Draws a box of `width` columns around `body`, with `title` in the top border.
///
/// Body lines must already fit in `width - 4` columns.
pub fn boxed(
    title: Vec<Span<'static>>,
    body: Vec<Line<'static>>,
    width: usize,
    border: Style,
) -> Vec<Line<'static>> {
    if width < 4 {
        return Vec::new();
    }
    let inner = width - 4;

    let title_width = Line::from(title.clone()).width();
    let fill = width.saturating_sub(3 + title_width);
    let mut top = vec![Span::styled("┌─", border)];
    top.extend(title);
    top.push(Span::styled(format!("{}┐", "─".repeat(fill)), border));

    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(Line::from(top));
    for line in body {
        let mut spans = vec![Span::styled("│ ", border)];
        spans.extend(pad_line(line, inner).spans);
        spans.push(Span::styled(" │", border));
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(Span::styled(
        format!("└{}┘", "─".repeat(width - 2)),
        border,
    )));
    lines
}
