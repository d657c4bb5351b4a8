use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    OpenFolderPrompt,
    CursorUp,
    CursorDown,
    ToggleAtCursor,
    SelectAll,
    DeselectAll,
    CycleModel,
    ProcessAll,
    ProcessSelected,
    PromptChar(char),
    PromptBackspace,
    PromptSubmit,
    PromptCancel,
}

/// Maps a key press to an action. `prompt_open` switches to text entry.
pub fn map_key(key: KeyEvent, prompt_open: bool) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    if prompt_open {
        return match key.code {
            KeyCode::Enter => Some(Action::PromptSubmit),
            KeyCode::Esc => Some(Action::PromptCancel),
            KeyCode::Backspace => Some(Action::PromptBackspace),
            KeyCode::Char(c) => Some(Action::PromptChar(c)),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('o') => Some(Action::OpenFolderPrompt),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::CursorUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::CursorDown),
        KeyCode::Char(' ') | KeyCode::Enter => Some(Action::ToggleAtCursor),
        KeyCode::Char('a') => Some(Action::SelectAll),
        KeyCode::Char('d') => Some(Action::DeselectAll),
        KeyCode::Char('m') => Some(Action::CycleModel),
        KeyCode::Char('p') => Some(Action::ProcessAll),
        KeyCode::Char('s') => Some(Action::ProcessSelected),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn browse_keys_map_to_actions() {
        assert_eq!(map_key(press(KeyCode::Char(' ')), false), Some(Action::ToggleAtCursor));
        assert_eq!(map_key(press(KeyCode::Char('a')), false), Some(Action::SelectAll));
        assert_eq!(map_key(press(KeyCode::Char('s')), false), Some(Action::ProcessSelected));
        assert_eq!(map_key(press(KeyCode::Esc), false), Some(Action::Quit));
        assert_eq!(map_key(press(KeyCode::Char('z')), false), None);
    }

    #[test]
    fn prompt_captures_letters_that_are_shortcuts_elsewhere() {
        assert_eq!(map_key(press(KeyCode::Char('q')), true), Some(Action::PromptChar('q')));
        assert_eq!(map_key(press(KeyCode::Esc), true), Some(Action::PromptCancel));
        assert_eq!(map_key(press(KeyCode::Enter), true), Some(Action::PromptSubmit));
    }

    #[test]
    fn ctrl_c_always_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key, true), Some(Action::Quit));
        assert_eq!(map_key(key, false), Some(Action::Quit));
    }
}
