//! Rendering of the review form into screen lines.
//!
//! Rendering is a pure function of the app state and terminal size, so the
//! layout can be checked without a terminal. [`super::run`] paints the
//! result.

use crate::form::{Field, Notification, WINDOW_TITLE};
use crate::storage::ReviewStore;

use super::app::{Focus, FormApp};
use super::components::text::{center, display_width, pad_or_truncate, tail_to_width};
use super::components::{ReviewPaneComponent, ReviewPaneViewContext};
use super::messages::Button;

/// Width reserved for input labels.
const LABEL_WIDTH: usize = 22;

/// Rows that are not part of the review pane.
const FIXED_ROWS: usize = 13;

const KEY_HINTS: &str =
    "Tab move  Enter press  ^S submit  ^E export  ^L display  ^D delete  PgUp/PgDn scroll  ^Q quit";

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Row text, exactly as wide as the screen in terminal columns.
    pub text: String,
    /// Draw in reverse video.
    pub highlighted: bool,
}

impl Line {
    fn plain(text: String) -> Self {
        Self {
            text,
            highlighted: false,
        }
    }
}

/// A fully rendered frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    /// Rows from top to bottom.
    pub lines: Vec<Line>,
    /// Terminal cursor position (column, row) when an input has focus.
    pub cursor: Option<(u16, u16)>,
}

impl Screen {
    /// Row texts with trailing padding removed.
    #[must_use]
    pub fn text_rows(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|line| line.text.trim_end().to_string())
            .collect()
    }
}

/// Rows left for the review pane on a terminal `height` rows tall.
#[must_use]
pub fn pane_height(height: usize) -> usize {
    height.saturating_sub(FIXED_ROWS).max(1)
}

/// A labeled input row, plus the cursor column when it has focus.
fn input_row(label: &str, value: &str, focused: bool, width: usize) -> (Line, Option<usize>) {
    let box_width = width.saturating_sub(LABEL_WIDTH + 2);
    // Show the tail of long values so the cursor stays visible.
    let visible = tail_to_width(value, box_width.saturating_sub(1));
    let marker = if focused { '>' } else { ' ' };
    let text = format!(
        "{marker}{}[{}]",
        pad_or_truncate(label, LABEL_WIDTH - 1),
        pad_or_truncate(visible, box_width)
    );
    let cursor = focused.then(|| LABEL_WIDTH + 1 + display_width(visible));
    (Line::plain(pad_or_truncate(&text, width)), cursor)
}

fn button_row(button: Button, focused: bool, width: usize) -> Line {
    let text = if focused {
        format!("> {} <", button.label())
    } else {
        format!("[ {} ]", button.label())
    };
    Line {
        text: center(&text, width),
        highlighted: focused,
    }
}

/// Render the app into a frame the size of the terminal.
#[must_use]
pub fn render<S: ReviewStore>(app: &FormApp<S>) -> Screen {
    let (width, height) = app.size();
    let width = usize::from(width);
    let height = usize::from(height);
    let focus = app.focus();
    let mut lines = Vec::with_capacity(height);
    let mut cursor = None;

    let mut push_input = |lines: &mut Vec<Line>, field: Field| {
        let focused = focus == Focus::Input(field);
        let value = app.controller().field(field);
        let (line, column) = input_row(field.label(), value, focused, width);
        if let Some(column) = column {
            cursor = u16::try_from(column)
                .ok()
                .zip(u16::try_from(lines.len()).ok());
        }
        lines.push(line);
    };

    lines.push(Line {
        text: center(WINDOW_TITLE, width),
        highlighted: true,
    });
    for field in Field::REVIEW_FIELDS {
        push_input(&mut lines, field);
    }
    for button in [Button::Submit, Button::Export, Button::Display] {
        lines.push(button_row(button, focus == Focus::Button(button), width));
    }

    let pane = ReviewPaneComponent::view(&ReviewPaneViewContext {
        text: app.controller().pane(),
        scroll_offset: app.scroll(),
        visible_height: pane_height(height),
        max_width: width,
    });
    let mut pane = pane.into_iter();
    if let Some(title) = pane.next() {
        lines.push(Line {
            text: title,
            highlighted: focus == Focus::Pane,
        });
    }
    lines.extend(pane.map(Line::plain));

    push_input(&mut lines, Field::DeleteId);
    lines.push(button_row(Button::Delete, focus == Focus::Button(Button::Delete), width));

    let status = app.status().unwrap_or(KEY_HINTS);
    lines.push(Line {
        text: pad_or_truncate(status, width),
        highlighted: app.status().is_some(),
    });

    if let Some(notification) = app.modal() {
        overlay_modal(&mut lines, notification, width);
        cursor = None;
    }

    lines.truncate(height);
    if cursor.is_some_and(|(_, row)| usize::from(row) >= height) {
        cursor = None;
    }
    Screen { lines, cursor }
}

/// Paint a centered dialog box over the middle rows.
fn overlay_modal(lines: &mut [Line], notification: &Notification, width: usize) {
    let title = format!(" {} ", notification.title());
    let inner = display_width(&notification.message)
        .max(display_width(&title))
        .max(6)
        + 4;
    let inner = inner.min(width.saturating_sub(2));
    let dashes = |n: usize| "-".repeat(n);

    let rows = [
        format!("+{}+", pad_or_truncate(&format!("-{title}{}", dashes(inner)), inner)),
        format!("|{}|", center(&notification.message, inner)),
        format!("|{}|", center("[ OK ]", inner)),
        format!("+{}+", dashes(inner)),
    ];

    let top = lines.len().saturating_sub(rows.len()) / 2;
    for (offset, row) in rows.iter().enumerate() {
        if let Some(line) = lines.get_mut(top + offset) {
            *line = Line {
                text: center(row, width),
                highlighted: true,
            };
        }
    }
}
