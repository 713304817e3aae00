//! Input handling for the review form.
//!
//! This module translates terminal key events into application messages.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::messages::{AppMsg, Button};

/// Maps a key event to an application message.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
pub fn map_key_to_message(key: &KeyEvent) -> Option<AppMsg> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('q' | 'c') => Some(AppMsg::Quit),
            KeyCode::Char('s') => Some(AppMsg::Press(Button::Submit)),
            KeyCode::Char('e') => Some(AppMsg::Press(Button::Export)),
            KeyCode::Char('l') => Some(AppMsg::Press(Button::Display)),
            KeyCode::Char('d') => Some(AppMsg::Press(Button::Delete)),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => Some(AppMsg::FocusNext),
        KeyCode::BackTab | KeyCode::Up => Some(AppMsg::FocusPrev),
        KeyCode::Enter => Some(AppMsg::Activate),
        KeyCode::Esc => Some(AppMsg::Dismiss),
        KeyCode::Backspace => Some(AppMsg::Backspace),
        KeyCode::PageUp => Some(AppMsg::PageUp),
        KeyCode::PageDown => Some(AppMsg::PageDown),
        KeyCode::Char(c) => Some(AppMsg::Insert(c)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(map_key_to_message(&key(KeyCode::Tab)), Some(AppMsg::FocusNext));
        assert_eq!(map_key_to_message(&key(KeyCode::Down)), Some(AppMsg::FocusNext));
        assert_eq!(map_key_to_message(&key(KeyCode::BackTab)), Some(AppMsg::FocusPrev));
        assert_eq!(map_key_to_message(&key(KeyCode::Up)), Some(AppMsg::FocusPrev));
        assert_eq!(map_key_to_message(&key(KeyCode::Enter)), Some(AppMsg::Activate));
        assert_eq!(map_key_to_message(&key(KeyCode::Esc)), Some(AppMsg::Dismiss));
    }

    #[test]
    fn test_characters_are_inserted() {
        assert_eq!(map_key_to_message(&key(KeyCode::Char('q'))), Some(AppMsg::Insert('q')));
        let shifted = KeyEvent::new(KeyCode::Char('J'), KeyModifiers::SHIFT);
        assert_eq!(map_key_to_message(&shifted), Some(AppMsg::Insert('J')));
    }

    #[test]
    fn test_control_shortcuts() {
        assert_eq!(map_key_to_message(&ctrl('q')), Some(AppMsg::Quit));
        assert_eq!(map_key_to_message(&ctrl('c')), Some(AppMsg::Quit));
        assert_eq!(map_key_to_message(&ctrl('s')), Some(AppMsg::Press(Button::Submit)));
        assert_eq!(map_key_to_message(&ctrl('e')), Some(AppMsg::Press(Button::Export)));
        assert_eq!(map_key_to_message(&ctrl('l')), Some(AppMsg::Press(Button::Display)));
        assert_eq!(map_key_to_message(&ctrl('d')), Some(AppMsg::Press(Button::Delete)));
        assert_eq!(map_key_to_message(&ctrl('x')), None);
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(map_key_to_message(&key(KeyCode::F(5))), None);
        assert_eq!(map_key_to_message(&key(KeyCode::Home)), None);
    }
}
