//! Feed rendering: tab navigation, hero card, card grid.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;
use vestnik_core::feed::FeedLayout;
use vestnik_core::format::{format_optional_views, icon, tab_label};
use vestnik_core::{NewsItem, NewsType, Tab};

use crate::common::{boxed, join_columns, truncate_with_ellipsis, wrap_clamped, wrap_text};

/// Columns between grid cards.
const GRID_GAP: usize = 2;
/// Title lines reserved per card.
const CARD_TITLE_LINES: usize = 2;
/// Excerpt lines reserved per card.
const CARD_EXCERPT_LINES: usize = 3;

const ACCENT: Color = Color::Green;

/// Number of grid columns for a body width (1 / 2 / 3 like md and lg breakpoints).
pub fn grid_columns(width: usize) -> usize {
    if width < 80 {
        1
    } else if width < 120 {
        2
    } else {
        3
    }
}

/// Renders the tab navigation bar.
pub fn render_tab_nav(frame: &mut Frame, area: Rect, active: Tab) {
    let mut spans = Vec::new();
    for (i, &tab) in Tab::all().iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let label = format!(" {} {} ", i + 1, tab_label(tab));
        let style = if tab == active {
            Style::default()
                .fg(Color::Black)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(label, style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Hero card followed by a blank line; empty when the layout has no hero.
pub fn hero_section(feed: &FeedLayout<'_>, width: usize) -> Vec<Line<'static>> {
    let Some(hero) = feed.hero else {
        return Vec::new();
    };
    let mut lines = hero_lines(hero, width);
    lines.push(Line::default());
    lines
}

/// Section heading and the card grid, or a placeholder when the grid is empty.
pub fn grid_section(feed: &FeedLayout<'_>, tab: Tab, width: usize) -> Vec<Line<'static>> {
    let heading = format!("{} · {}", tab_label(tab), count_label(feed.grid.len()));
    let mut lines = vec![
        Line::from(Span::styled(
            heading,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];

    if feed.grid.is_empty() {
        lines.push(Line::from(Span::styled(
            "В этом разделе пока нет материалов",
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::default());
        return lines;
    }

    let columns = grid_columns(width);
    let card_width = width.saturating_sub(GRID_GAP * (columns - 1)) / columns;
    for row in feed.grid.chunks(columns) {
        let cards: Vec<Vec<Line<'static>>> =
            row.iter().map(|item| card_lines(item, card_width)).collect();
        lines.extend(join_columns(&cards, card_width, GRID_GAP));
        lines.push(Line::default());
    }
    lines
}

fn count_label(count: usize) -> String {
    let noun = match (count % 10, count % 100) {
        (1, n) if n != 11 => "материал",
        (2..=4, n) if !(12..=14).contains(&n) => "материала",
        _ => "материалов",
    };
    format!("{count} {noun}")
}

fn badge(text: &str, max_width: usize) -> Span<'static> {
    Span::styled(
        format!(" {} ", truncate_with_ellipsis(text, max_width.saturating_sub(2))),
        Style::default()
            .fg(Color::Black)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD),
    )
}

/// Meta line with the author on the left and `right` flush right.
fn meta_line(author: &str, right: &str, width: usize) -> Line<'static> {
    let style = Style::default().fg(Color::DarkGray);
    let left = format!("{} {author}", icon("User"));
    let right_width = right.width();

    if right_width + 4 >= width {
        return Line::from(Span::styled(truncate_with_ellipsis(&left, width), style));
    }
    let left = truncate_with_ellipsis(&left, width - right_width - 1);
    let gap = width - right_width - left.width();
    Line::from(vec![
        Span::styled(left, style),
        Span::raw(" ".repeat(gap)),
        Span::styled(right.to_string(), style),
    ])
}

fn text_lines(text: &str, width: usize, max_lines: usize, style: Style) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = wrap_clamped(text, width, max_lines)
        .into_iter()
        .map(|l| Line::from(Span::styled(l, style)))
        .collect();
    lines.resize(max_lines, Line::default());
    lines
}

/// A fixed-height grid card.
fn card_lines(item: &NewsItem, width: usize) -> Vec<Line<'static>> {
    let inner = width.saturating_sub(4);
    let border = Style::default().fg(Color::DarkGray);

    let mut title = vec![Span::raw(" "), badge(&item.category, inner.saturating_sub(6))];
    if item.kind == NewsType::Video {
        title.push(Span::styled(
            format!(" {}", icon("Play")),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ));
    }
    title.push(Span::raw(" "));

    let mut body = text_lines(
        &item.title,
        inner,
        CARD_TITLE_LINES,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );
    body.push(Line::default());
    body.extend(text_lines(
        &item.excerpt,
        inner,
        CARD_EXCERPT_LINES,
        Style::default().fg(Color::Gray),
    ));
    body.push(Line::default());

    let right = match item.views {
        Some(_) => format!(
            "{} {}  {}",
            icon("Eye"),
            format_optional_views(item.views),
            item.date
        ),
        None => item.date.clone(),
    };
    body.push(meta_line(&item.author, &right, inner));

    boxed(title, body, width, border)
}

/// The full-width featured card shown on the main tab.
fn hero_lines(item: &NewsItem, width: usize) -> Vec<Line<'static>> {
    let inner = width.saturating_sub(4);
    let border = Style::default().fg(ACCENT);
    let dim = Style::default().fg(Color::DarkGray);

    let title = vec![
        Span::raw(" "),
        Span::styled(
            format!("{} Главная тема", icon("Leaf")),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
    ];

    let mut body = vec![Line::from(badge(&item.category, inner)), Line::default()];
    body.extend(wrap_text(&item.title, inner).into_iter().map(|l| {
        Line::from(Span::styled(
            l,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
    }));
    body.push(Line::default());
    body.extend(
        wrap_text(&item.excerpt, inner)
            .into_iter()
            .map(|l| Line::from(Span::styled(l, Style::default().fg(Color::Gray)))),
    );
    body.push(Line::default());

    let mut meta = format!(
        "{} {}   {} {}",
        icon("User"),
        item.author,
        icon("Calendar"),
        item.date
    );
    if item.views.is_some() {
        meta.push_str(&format!(
            "   {} {}",
            icon("Eye"),
            format_optional_views(item.views)
        ));
    }
    body.push(Line::from(Span::styled(
        truncate_with_ellipsis(&meta, inner),
        dim,
    )));
    body.push(Line::from(Span::styled(
        truncate_with_ellipsis(&format!("{} {}", icon("Image"), item.image), inner),
        dim,
    )));
    body.push(Line::default());
    body.push(Line::from(Span::styled(
        format!("[ Читать полностью {} ]", icon("ArrowRight")),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )));

    boxed(title, body, width, border)
}
