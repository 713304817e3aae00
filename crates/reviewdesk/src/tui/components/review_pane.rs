//! Scrollable, read-only pane showing the display blocks of all reviews.
//!
//! The pane text is hard-wrapped to the terminal width before scrolling, so
//! the scroll offset counts wrapped rows, not lines of pane text.

use super::text::{pad_or_truncate, rule, wrap_to_width};

/// Context for rendering the review pane.
#[derive(Debug, Clone)]
pub struct ReviewPaneViewContext<'a> {
    /// Pane text, one display block after another.
    pub text: &'a str,
    /// Number of wrapped rows scrolled past.
    pub scroll_offset: usize,
    /// Rows available below the title rule.
    pub visible_height: usize,
    /// Terminal width in columns.
    pub max_width: usize,
}

/// Component for the review pane.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReviewPaneComponent;

impl ReviewPaneComponent {
    /// Rows of `text` once wrapped to `max_width` columns.
    #[must_use]
    pub fn wrapped_rows(text: &str, max_width: usize) -> Vec<String> {
        wrap_to_width(text, max_width)
    }

    /// Largest useful scroll offset for `row_count` rows in a pane of
    /// `visible_height` rows.
    #[must_use]
    pub fn max_scroll(row_count: usize, visible_height: usize) -> usize {
        row_count.saturating_sub(visible_height.max(1))
    }

    /// Render the title rule followed by exactly `visible_height` rows.
    ///
    /// An offset past the end is clamped, so the last page stays visible.
    #[must_use]
    pub fn view(ctx: &ReviewPaneViewContext<'_>) -> Vec<String> {
        let visible_height = ctx.visible_height.max(1);
        let rows = Self::wrapped_rows(ctx.text, ctx.max_width);
        let scroll = ctx
            .scroll_offset
            .min(Self::max_scroll(rows.len(), visible_height));

        let title = format!(
            " Reviews ({}-{} of {}) ",
            (scroll + 1).min(rows.len()),
            (scroll + visible_height).min(rows.len()),
            rows.len()
        );

        let mut output = Vec::with_capacity(visible_height + 1);
        output.push(rule(&title, ctx.max_width));
        output.extend(
            (0..visible_height)
                .map(|row| rows.get(scroll + row).map_or("", String::as_str))
                .map(|row| pad_or_truncate(row, ctx.max_width)),
        );
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::components::text::display_width;

    fn ctx(
        text: &str,
        scroll_offset: usize,
        visible_height: usize,
        max_width: usize,
    ) -> ReviewPaneViewContext<'_> {
        ReviewPaneViewContext {
            text,
            scroll_offset,
            visible_height,
            max_width,
        }
    }

    #[test]
    fn test_max_scroll() {
        assert_eq!(ReviewPaneComponent::max_scroll(10, 4), 6);
        assert_eq!(ReviewPaneComponent::max_scroll(3, 4), 0);
        assert_eq!(ReviewPaneComponent::max_scroll(3, 0), 2);
    }

    #[test]
    fn test_view_empty_pane() {
        let rows = ReviewPaneComponent::view(&ctx("", 0, 3, 20));
        assert_eq!(rows.len(), 4);
        assert!(rows[0].contains("Reviews (0-0 of 0)"));
        assert!(rows[1..].iter().all(|row| row.trim().is_empty()));
    }

    #[test]
    fn test_view_wraps_before_scrolling() {
        let text = "aaaaaaaaaa\nbbbb\n";
        let rows = ReviewPaneComponent::view(&ctx(text, 0, 2, 4));
        assert_eq!(rows[1..], ["aaaa", "aaaa"]);

        let rows = ReviewPaneComponent::view(&ctx(text, 2, 2, 4));
        assert!(rows[0].contains("(3-4 of 4)"));
        assert_eq!(rows[1..], ["aa  ", "bbbb"]);
    }

    #[test]
    fn test_view_clamps_offset_to_last_page() {
        let text = "a\nb\nc\nd\n";
        let rows = ReviewPaneComponent::view(&ctx(text, 50, 2, 10));
        assert_eq!(rows[1].trim_end(), "c");
        assert_eq!(rows[2].trim_end(), "d");
    }

    #[test]
    fn test_view_rows_fill_width_with_wide_chars() {
        let text = "☕☕☕☕☕☕☕☕☕☕\n";
        let rows = ReviewPaneComponent::view(&ctx(text, 0, 3, 7));
        assert!(rows.iter().all(|row| display_width(row) == 7));
    }
}
