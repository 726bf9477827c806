//! Display strings for the portal: labels, counts, icons.

use crate::models::{Role, Tab};

/// Brand shown in the header.
pub const BRAND: &str = "Честные Новости";
/// Subtitle under the brand.
pub const TAGLINE: &str = "Новости, события, аналитика";
/// Footer copyright line.
pub const COPYRIGHT: &str = "© 2025 Зелёный вестник. Все права защищены.";

pub fn role_label(role: Role) -> &'static str {
    match role {
        Role::Admin => "Администратор",
        Role::Moderator => "Модератор",
        Role::Reader => "Читатель",
    }
}

pub fn tab_label(tab: Tab) -> &'static str {
    match tab {
        Tab::Main => "Главное",
        Tab::Video => "Видео",
        Tab::Regional => "В области",
        Tab::Popular => "Популярное",
    }
}

/// Formats a view count with ru-RU digit grouping (no-break space).
pub fn format_views(views: u64) -> String {
    let digits = views.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * 2);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('\u{a0}');
        }
        out.push(ch);
    }
    out
}

/// Formats an optional view count; a missing count renders as nothing.
pub fn format_optional_views(views: Option<u64>) -> String {
    views.map(format_views).unwrap_or_default()
}

/// First character of the name, uppercased. `"?"` for an empty name.
pub fn avatar_initial(name: &str) -> String {
    name.chars()
        .next()
        .map_or_else(|| "?".to_string(), |c| c.to_uppercase().collect())
}

/// Text glyph for a symbolic icon name. Unknown names render as a bullet.
pub fn icon(name: &str) -> &'static str {
    match name {
        "Leaf" => "❦",
        "User" => "◉",
        "Eye" => "◎",
        "Calendar" => "▦",
        "Play" => "▶",
        "LogOut" => "⇥",
        "ArrowRight" => "→",
        "Plus" => "+",
        "Shield" => "◈",
        "FileText" => "≡",
        "Video" => "▶",
        "Image" => "▣",
        "Cloud" => "☁",
        "MessageSquare" => "✉",
        "Send" => "➤",
        _ => "•",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_views_groups_thousands() {
        assert_eq!(format_views(0), "0");
        assert_eq!(format_views(980), "980");
        assert_eq!(format_views(2840), "2\u{a0}840");
        assert_eq!(format_views(1_234_567), "1\u{a0}234\u{a0}567");
        assert_eq!(format_views(100_000), "100\u{a0}000");
    }

    #[test]
    fn test_format_optional_views() {
        assert_eq!(format_optional_views(None), "");
        assert_eq!(format_optional_views(Some(1520)), "1\u{a0}520");
    }

    #[test]
    fn test_avatar_initial() {
        assert_eq!(avatar_initial("jane"), "J");
        assert_eq!(avatar_initial("иван"), "И");
        assert_eq!(avatar_initial(""), "?");
    }

    #[test]
    fn test_labels() {
        assert_eq!(role_label(Role::Admin), "Администратор");
        assert_eq!(role_label(Role::Reader), "Читатель");
        assert_eq!(tab_label(Tab::Regional), "В области");
        assert_eq!(icon("Eye"), "◎");
        assert_eq!(icon("Unknown"), "•");
    }
}
