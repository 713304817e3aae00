//! Application model for the review form.
//!
//! [`FormApp`] wraps a [`FormController`] with the state only the terminal
//! needs: which widget has focus, the open dialog, the status line and the
//! pane's scroll offset.

use tracing::error;

use crate::form::{Field, FormController, Notification};
use crate::storage::ReviewStore;

use super::components::ReviewPaneComponent;
use super::messages::{AppMsg, Button};
use super::view::pane_height;

/// Number of pane rows moved by `PageUp` / `PageDown`.
pub const PAGE_SCROLL: usize = 5;

/// Terminal size assumed until the first resize message arrives.
pub const DEFAULT_SIZE: (u16, u16) = (80, 24);

/// A focusable widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// A text input.
    Input(Field),
    /// A push button.
    Button(Button),
    /// The review pane.
    Pane,
}

/// Widgets in the order Tab visits them, matching the on-screen layout.
pub const FOCUS_ORDER: [Focus; 11] = [
    Focus::Input(Field::FirstName),
    Focus::Input(Field::LastName),
    Focus::Input(Field::PurchasedItem),
    Focus::Input(Field::Rating),
    Focus::Input(Field::Reason),
    Focus::Button(Button::Submit),
    Focus::Button(Button::Export),
    Focus::Button(Button::Display),
    Focus::Pane,
    Focus::Input(Field::DeleteId),
    Focus::Button(Button::Delete),
];

impl Focus {
    fn position(self) -> usize {
        FOCUS_ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// The widget after this one, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        FOCUS_ORDER[(self.position() + 1) % FOCUS_ORDER.len()]
    }

    /// The widget before this one, wrapping around.
    #[must_use]
    pub fn prev(self) -> Self {
        FOCUS_ORDER[(self.position() + FOCUS_ORDER.len() - 1) % FOCUS_ORDER.len()]
    }
}

/// The review form as shown in the terminal.
#[derive(Debug)]
pub struct FormApp<S> {
    controller: FormController<S>,
    focus: Focus,
    modal: Option<Notification>,
    status: Option<String>,
    scroll: usize,
    width: u16,
    height: u16,
    should_quit: bool,
}

impl<S: ReviewStore> FormApp<S> {
    /// Create the app with focus on the first input.
    pub fn new(controller: FormController<S>) -> Self {
        Self {
            controller,
            focus: FOCUS_ORDER[0],
            modal: None,
            status: None,
            scroll: 0,
            width: DEFAULT_SIZE.0,
            height: DEFAULT_SIZE.1,
            should_quit: false,
        }
    }

    /// The wrapped controller.
    #[must_use]
    pub fn controller(&self) -> &FormController<S> {
        &self.controller
    }

    /// Consume the app and return its controller.
    pub fn into_controller(self) -> FormController<S> {
        self.controller
    }

    /// The focused widget.
    #[must_use]
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// The open dialog, if any.
    #[must_use]
    pub fn modal(&self) -> Option<&Notification> {
        self.modal.as_ref()
    }

    /// The status line message, if any.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// First wrapped pane row to show.
    #[must_use]
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Terminal size as (width, height).
    #[must_use]
    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Largest scroll offset that still fills the pane at the current size.
    fn max_scroll(&self) -> usize {
        let rows = ReviewPaneComponent::wrapped_rows(
            self.controller.pane(),
            usize::from(self.width),
        );
        ReviewPaneComponent::max_scroll(rows.len(), pane_height(usize::from(self.height)))
    }

    /// Whether the event loop should stop.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Apply one message.
    pub fn update(&mut self, msg: AppMsg) {
        match msg {
            AppMsg::Quit => {
                self.should_quit = true;
                return;
            }
            AppMsg::WindowResized { width, height } => {
                self.width = width;
                self.height = height;
                self.scroll = self.scroll.min(self.max_scroll());
                return;
            }
            _ => {}
        }

        // An open dialog swallows everything except closing it.
        if self.modal.is_some() {
            if matches!(msg, AppMsg::Activate | AppMsg::Dismiss) {
                self.modal = None;
            }
            return;
        }

        match msg {
            AppMsg::FocusNext => self.focus = self.focus.next(),
            AppMsg::FocusPrev => self.focus = self.focus.prev(),
            AppMsg::Insert(c) => {
                if let Focus::Input(field) = self.focus {
                    self.controller.field_mut(field).push(c);
                }
            }
            AppMsg::Backspace => {
                if let Focus::Input(field) = self.focus {
                    self.controller.field_mut(field).pop();
                }
            }
            AppMsg::Activate => match self.focus {
                Focus::Button(button) => self.press(button),
                Focus::Input(_) => self.focus = self.focus.next(),
                Focus::Pane => {}
            },
            AppMsg::Press(button) => self.press(button),
            AppMsg::Dismiss => self.status = None,
            AppMsg::PageUp => self.scroll = self.scroll.saturating_sub(PAGE_SCROLL),
            AppMsg::PageDown => {
                self.scroll = (self.scroll + PAGE_SCROLL).min(self.max_scroll());
            }
            AppMsg::Quit | AppMsg::WindowResized { .. } => {}
        }
    }

    fn press(&mut self, button: Button) {
        let result = match button {
            Button::Submit => self.controller.submit().map(Some),
            Button::Export => self.controller.export().map(Some),
            Button::Display => self.controller.display().map(|()| None),
            Button::Delete => self.controller.delete().map(Some),
        };

        match result {
            Ok(notification) => {
                self.status = None;
                if matches!(button, Button::Display | Button::Delete) {
                    self.scroll = 0;
                }
                self.modal = notification;
            }
            Err(err) => {
                error!("{} failed: {err}", button.label());
                self.status = Some(format!("{} failed: {err}", button.label()));
            }
        }
    }
}
