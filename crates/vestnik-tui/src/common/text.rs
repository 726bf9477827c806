//! Text utilities for TUI rendering.
//!
//! All widths are terminal columns (unicode-aware), never byte lengths.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Truncates a string with ellipsis if it exceeds `max_width` (unicode-aware).
///
/// Returns the original string if it fits, or a truncated version ending
/// with `…`.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    with_trailing_ellipsis(text, max_width)
}

/// Cuts `text` so that it plus a trailing `…` fits in `max_width`.
///
/// Unlike [`truncate_with_ellipsis`] the ellipsis is always appended; used
/// when lines were dropped after wrapping.
pub fn with_trailing_ellipsis(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width + 1 > max_width {
            break;
        }
        out.push(ch);
        width += ch_width;
    }
    let trimmed = out.trim_end().len();
    out.truncate(trimmed);
    out.push(ELLIPSIS);
    out
}

/// Word-wraps `text` to `width` columns.
///
/// Words wider than a line are split at character boundaries.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        if current_width > 0 && current_width + 1 + word_width > width {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width > width {
            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if current_width + ch_width > width {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += ch_width;
            }
            continue;
        }

        if current_width > 0 {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Keeps the end of `text`, prefixing `…` when the start was cut.
///
/// Used for input fields where the cursor sits at the end.
pub fn truncate_start_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut tail: Vec<char> = Vec::new();
    let mut width = 1;
    for ch in text.chars().rev() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width {
            break;
        }
        tail.push(ch);
        width += ch_width;
    }
    std::iter::once(ELLIPSIS).chain(tail.into_iter().rev()).collect()
}

/// Word-wraps to at most `max_lines`, marking dropped text with `…`.
pub fn wrap_clamped(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    let mut lines = wrap_text(text, width);
    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            *last = with_trailing_ellipsis(last, width);
        }
    }
    lines
}
