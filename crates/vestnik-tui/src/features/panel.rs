//! Staff panel shown above the grid for admins and moderators.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;
use vestnik_core::format::icon;
use vestnik_core::panel::{PanelAction, PanelVariant};

use crate::common::{boxed, wrap_text};

const BUTTON_GAP: usize = 2;

fn button_label(action: &PanelAction) -> String {
    format!("[ {} {} ]", icon(action.icon), action.label)
}

/// Flows action buttons into rows no wider than `width`.
fn button_rows(actions: &[PanelAction], width: usize, style: Style) -> Vec<Line<'static>> {
    let mut rows = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut used = 0;

    for action in actions {
        let label = button_label(action);
        let label_width = label.width();
        if used > 0 && used + BUTTON_GAP + label_width > width {
            rows.push(Line::from(std::mem::take(&mut spans)));
            used = 0;
        }
        if used > 0 {
            spans.push(Span::raw(" ".repeat(BUTTON_GAP)));
            used += BUTTON_GAP;
        }
        spans.push(Span::styled(label, style));
        used += label_width;
    }
    if !spans.is_empty() {
        rows.push(Line::from(spans));
    }
    rows
}

/// Lines of the panel for `variant`; empty when the user gets no panel.
pub fn panel_lines(variant: PanelVariant, width: usize) -> Vec<Line<'static>> {
    let Some(content) = variant.content() else {
        return Vec::new();
    };
    let accent = match variant {
        PanelVariant::Moderator => Color::Cyan,
        _ => Color::Green,
    };
    let inner = width.saturating_sub(4);

    let title = vec![
        Span::raw(" "),
        Span::styled(
            format!("{} {}", icon(content.icon), content.title),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
    ];

    let mut body: Vec<Line<'static>> = wrap_text(content.description, inner)
        .into_iter()
        .map(|l| Line::from(Span::styled(l, Style::default().fg(Color::Gray))))
        .collect();
    body.push(Line::default());
    body.extend(button_rows(
        content.actions,
        inner,
        Style::default().fg(accent),
    ));

    let mut lines = boxed(title, body, width, Style::default().fg(accent));
    lines.push(Line::default());
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
    fn test_no_panel_for_readers() {
        assert!(panel_lines(PanelVariant::None, 100).is_empty());
    }

    #[test]
    fn test_admin_panel_lists_all_actions() {
        let text = all_text(&panel_lines(PanelVariant::Admin, 120));
        assert!(text.contains("Панель администратора"));
        for label in ["Новая статья", "Добавить видео", "Фоторепортаж", "Афиша", "Погода"] {
            assert!(text.contains(label), "missing {label}");
        }
    }

    #[test]
    fn test_moderator_panel() {
        let text = all_text(&panel_lines(PanelVariant::Moderator, 80));
        assert!(text.contains("Панель модератора"));
        assert!(text.contains("Новые комментарии (8)"));
        assert!(!text.contains("Новая статья"));
    }

    #[test]
    fn test_buttons_wrap_on_narrow_width() {
        let content = PanelVariant::Admin.content().unwrap();
        let rows = button_rows(content.actions, 40, Style::default());
        assert!(rows.len() > 1);
        assert!(rows.iter().all(|row| row.width() <= 40));
    }
}
