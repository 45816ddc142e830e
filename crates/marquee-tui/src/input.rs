use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    TogglePlayback, // Space: pause or resume autoplay
    NextTheme,      // 't'
    PrevTheme,      // 'T'
    Faster,         // '+' / '='
    Slower,         // '-'
    Reload,         // 'r': re-read the items file
    ToggleIdle,     // 'i': enable/disable idle auto-resume
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Esc, _) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        (KeyCode::Char(' '), KeyModifiers::NONE) => Action::TogglePlayback,

        (KeyCode::Char('t'), KeyModifiers::NONE) => Action::NextTheme,
        (KeyCode::Char('T'), _) => Action::PrevTheme,

        (KeyCode::Char('+'), _) | (KeyCode::Char('='), KeyModifiers::NONE) => Action::Faster,
        (KeyCode::Char('-'), KeyModifiers::NONE) => Action::Slower,

        (KeyCode::Char('r'), KeyModifiers::NONE) => Action::Reload,
        (KeyCode::Char('i'), KeyModifiers::NONE) => Action::ToggleIdle,

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(handle_key_event(key(KeyCode::Char('q'), KeyModifiers::NONE)), Action::Quit);
        assert_eq!(handle_key_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)), Action::Quit);
        assert_eq!(handle_key_event(key(KeyCode::Esc, KeyModifiers::NONE)), Action::Quit);
    }

    #[test]
    fn test_theme_keys() {
        assert_eq!(handle_key_event(key(KeyCode::Char('t'), KeyModifiers::NONE)), Action::NextTheme);
        assert_eq!(handle_key_event(key(KeyCode::Char('T'), KeyModifiers::SHIFT)), Action::PrevTheme);
    }

    #[test]
    fn test_speed_keys() {
        assert_eq!(handle_key_event(key(KeyCode::Char('+'), KeyModifiers::SHIFT)), Action::Faster);
        assert_eq!(handle_key_event(key(KeyCode::Char('='), KeyModifiers::NONE)), Action::Faster);
        assert_eq!(handle_key_event(key(KeyCode::Char('-'), KeyModifiers::NONE)), Action::Slower);
    }

    #[test]
    fn test_unbound_key() {
        assert_eq!(handle_key_event(key(KeyCode::Char('z'), KeyModifiers::NONE)), Action::None);
    }
}
