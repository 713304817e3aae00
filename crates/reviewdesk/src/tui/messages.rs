//! Message types for the form's update loop.
//!
//! Every key press the form reacts to is translated into one [`AppMsg`]
//! before it reaches [`super::app::FormApp::update`].

/// A push button on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Store the review typed into the form.
    Submit,
    /// Write all reviews to the CSV file.
    Export,
    /// Refresh the review pane.
    Display,
    /// Delete the review named by the id input.
    Delete,
}

impl Button {
    /// Text shown on the button.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Submit => "Submit Review",
            Self::Export => "Export to CSV",
            Self::Display => "Display Reviews",
            Self::Delete => "Delete Review",
        }
    }
}

/// Messages for the review form application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMsg {
    // Focus
    /// Move focus to the next widget.
    FocusNext,
    /// Move focus to the previous widget.
    FocusPrev,

    // Editing
    /// Type a character into the focused input.
    Insert(char),
    /// Remove the last character of the focused input.
    Backspace,

    // Actions
    /// Press the focused button, or dismiss the open dialog.
    Activate,
    /// Press a button regardless of focus.
    Press(Button),
    /// Close the open dialog or clear the status line.
    Dismiss,

    // Review pane
    /// Scroll the review pane up one page.
    PageUp,
    /// Scroll the review pane down one page.
    PageDown,

    // Window events
    /// The terminal was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },

    // Application lifecycle
    /// Quit the application.
    Quit,
}
