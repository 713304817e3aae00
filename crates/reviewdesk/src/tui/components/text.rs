//! Display-width aware text helpers for fixed-width terminal rows.
//!
//! Widths are terminal columns as reported by `unicode-width`: CJK and most
//! emoji take two columns, combining marks take none.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Number of terminal columns `text` occupies.
#[must_use]
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

fn char_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

/// Truncate or pad `line` so it occupies exactly `width` columns.
///
/// A wide character that would straddle the right edge is dropped and its
/// column filled with a space.
#[must_use]
pub fn pad_or_truncate(line: &str, width: usize) -> String {
    let mut output = String::with_capacity(width);
    let mut visible_width = 0usize;

    for ch in line.chars() {
        let w = char_width(ch);
        if w == 0 {
            output.push(ch);
            continue;
        }
        if visible_width + w > width {
            break;
        }
        output.push(ch);
        visible_width += w;
    }

    output.extend(std::iter::repeat_n(' ', width - visible_width));
    output
}

/// Center `text` in a row of `width` columns.
#[must_use]
pub fn center(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(text)) / 2;
    pad_or_truncate(&format!("{}{text}", " ".repeat(pad)), width)
}

/// Center `label` in a horizontal rule of `width` columns.
#[must_use]
pub fn rule(label: &str, width: usize) -> String {
    let label_width = display_width(label);
    let left = width.saturating_sub(label_width) / 2;
    let right = width.saturating_sub(label_width + left);
    pad_or_truncate(
        &format!("{}{label}{}", "-".repeat(left), "-".repeat(right)),
        width,
    )
}

/// The longest suffix of `text` that fits in `width` columns.
#[must_use]
pub fn tail_to_width(text: &str, width: usize) -> &str {
    let mut used = 0usize;
    let mut start = text.len();

    for (index, ch) in text.char_indices().rev() {
        let w = char_width(ch);
        if used + w > width {
            break;
        }
        used += w;
        start = index;
    }

    &text[start..]
}

/// Hard-wrap every line of `text` into rows of at most `max_width` columns.
///
/// Empty lines are kept as empty rows. A character wider than `max_width`
/// gets a row of its own.
#[must_use]
pub fn wrap_to_width(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut rows = Vec::new();

    for line in text.lines() {
        let mut current = String::new();
        let mut current_width = 0usize;

        for ch in line.chars() {
            let w = char_width(ch);
            if current_width + w > max_width && !current.is_empty() {
                rows.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(ch);
            current_width += w;
        }

        rows.push(current);
    }

    rows
}
