//! Static footer appended to the scrolled body.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;
use vestnik_core::format::{BRAND, COPYRIGHT, icon};

use crate::common::{join_columns, wrap_text};

const COLUMN_GAP: usize = 4;
const ABOUT: &str = "Ваш источник актуальных новостей, аналитики и событий";
const SECTIONS: &[(&str, &[&str])] = &[
    ("Разделы", &["Новости", "Статьи", "Видео", "Фоторепортажи"]),
    ("О портале", &["Редакция", "Контакты", "Реклама", "Правила"]),
];

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

fn muted(text: String) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)))
}

fn brand_column(width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::styled(format!("{} ", icon("Leaf")), Style::default().fg(Color::Green)),
        Span::styled(
            BRAND,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
    ])];
    lines.push(Line::default());
    lines.extend(wrap_text(ABOUT, width).into_iter().map(muted));
    lines
}

fn link_column(title: &str, links: &[&str]) -> Vec<Line<'static>> {
    let mut lines = vec![heading(title), Line::default()];
    lines.extend(links.iter().map(|link| muted((*link).to_string())));
    lines
}

fn subscribe_column(width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![heading("Подписка"), Line::default()];
    lines.extend(
        wrap_text("Получайте свежие новости на почту", width)
            .into_iter()
            .map(muted),
    );
    lines.push(Line::default());
    let field_width = width.saturating_sub(6).clamp(5, 24);
    lines.push(Line::from(vec![
        Span::styled(
            format!("[Email{}]", " ".repeat(field_width.saturating_sub(5))),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(" "),
        Span::styled(
            format!("[{}]", icon("Send")),
            Style::default().fg(Color::Black).bg(Color::Green),
        ),
    ]));
    lines
}

/// Footer lines: brand, link sections, subscription box and copyright.
///
/// Four columns on wide bodies, two otherwise.
pub fn footer_lines(width: usize) -> Vec<Line<'static>> {
    let per_row = if width >= 100 { 4 } else { 2 };
    let column_width = width.saturating_sub(COLUMN_GAP * (per_row - 1)) / per_row;

    let mut columns = vec![brand_column(column_width)];
    columns.extend(
        SECTIONS
            .iter()
            .map(|(title, links)| link_column(title, links)),
    );
    columns.push(subscribe_column(column_width));

    let rule = Style::default().fg(Color::DarkGray);
    let mut lines = vec![Line::from(Span::styled("─".repeat(width), rule))];
    lines.push(Line::default());
    for row in columns.chunks(per_row) {
        lines.extend(join_columns(row, column_width, COLUMN_GAP));
        lines.push(Line::default());
    }
    lines.push(Line::from(Span::styled("─".repeat(width), rule)));

    let pad = width.saturating_sub(COPYRIGHT.width()) / 2;
    lines.push(Line::from(vec![
        Span::raw(" ".repeat(pad)),
        Span::styled(COPYRIGHT, Style::default().fg(Color::DarkGray)),
    ]));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_text(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_footer_contains_sections_and_copyright() {
        let text = all_text(&footer_lines(120));
        for needle in [
            BRAND,
            "Разделы",
            "Фоторепортажи",
            "О портале",
            "Правила",
            "Подписка",
            "© 2025 Зелёный вестник. Все права защищены.",
        ] {
            assert!(text.contains(needle), "missing {needle}");
        }
    }

    #[test]
    fn test_narrow_footer_stacks_two_columns() {
        let wide = footer_lines(120);
        let narrow = footer_lines(60);
        assert!(narrow.len() > wide.len());
        assert!(narrow.iter().all(|l| l.width() <= 60));
    }
}
