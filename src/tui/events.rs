use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// User actions from keyboard events
#[derive(Debug, PartialEq)]
pub enum Action {
    Quit,
    ClearField,
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    Submit,
    ShowMore,
    CopyLink,
    ToggleFilter,
    FocusNext,
    InsertChar(char),
    DeleteChar,
    None,
}

/// Poll for keyboard events and convert to actions
pub fn poll_event(timeout: Duration) -> anyhow::Result<Action> {
    if event::poll(timeout)?
        && let Event::Key(key) = event::read()?
        && key.kind != KeyEventKind::Release
    {
        return Ok(key_to_action(key));
    }
    Ok(Action::None)
}

fn key_to_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, _) => Action::ClearField,

        // Result navigation (Vim/Emacs style)
        (KeyCode::Char('p'), KeyModifiers::CONTROL) => Action::MoveUp,
        (KeyCode::Char('n'), KeyModifiers::CONTROL) => Action::MoveDown,
        (KeyCode::Up, _) => Action::MoveUp,
        (KeyCode::Down, _) => Action::MoveDown,
        (KeyCode::PageUp, _) => Action::PageUp,
        (KeyCode::PageDown, _) => Action::PageDown,

        // Actions
        (KeyCode::Enter, _) => Action::Submit,
        (KeyCode::Char('l'), KeyModifiers::CONTROL) => Action::ShowMore,
        (KeyCode::Char('y'), KeyModifiers::CONTROL) => Action::CopyLink,
        (KeyCode::Char('f'), KeyModifiers::CONTROL) => Action::ToggleFilter,
        (KeyCode::Tab, _) => Action::FocusNext,

        // Text input into the focused field
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            Action::InsertChar(c)
        }
        (KeyCode::Backspace, _) => Action::DeleteChar,

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Action {
        key_to_action(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_quit_and_clear() {
        assert_eq!(key(KeyCode::Char('c'), KeyModifiers::CONTROL), Action::Quit);
        assert_eq!(key(KeyCode::Esc, KeyModifiers::NONE), Action::ClearField);
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(key(KeyCode::Char('p'), KeyModifiers::CONTROL), Action::MoveUp);
        assert_eq!(key(KeyCode::Char('n'), KeyModifiers::CONTROL), Action::MoveDown);
        assert_eq!(key(KeyCode::Up, KeyModifiers::NONE), Action::MoveUp);
        assert_eq!(key(KeyCode::Down, KeyModifiers::NONE), Action::MoveDown);
        assert_eq!(key(KeyCode::PageUp, KeyModifiers::NONE), Action::PageUp);
        assert_eq!(key(KeyCode::PageDown, KeyModifiers::NONE), Action::PageDown);
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(key(KeyCode::Enter, KeyModifiers::NONE), Action::Submit);
        assert_eq!(key(KeyCode::Char('l'), KeyModifiers::CONTROL), Action::ShowMore);
        assert_eq!(key(KeyCode::Char('y'), KeyModifiers::CONTROL), Action::CopyLink);
        assert_eq!(key(KeyCode::Char('f'), KeyModifiers::CONTROL), Action::ToggleFilter);
        assert_eq!(key(KeyCode::Tab, KeyModifiers::NONE), Action::FocusNext);
    }

    #[test]
    fn test_text_input() {
        assert_eq!(key(KeyCode::Char('b'), KeyModifiers::NONE), Action::InsertChar('b'));
        assert_eq!(key(KeyCode::Char('B'), KeyModifiers::SHIFT), Action::InsertChar('B'));
        assert_eq!(key(KeyCode::Char('/'), KeyModifiers::NONE), Action::InsertChar('/'));
        assert_eq!(key(KeyCode::Backspace, KeyModifiers::NONE), Action::DeleteChar);
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(key(KeyCode::F(1), KeyModifiers::NONE), Action::None);
        assert_eq!(key(KeyCode::Char('x'), KeyModifiers::ALT), Action::None);
    }
}
