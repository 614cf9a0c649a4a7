use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextTab,
    PrevTab,
    /// Jump straight to a tab (0-based)
    SelectTab(usize),
    NextMode,
    PrevMode,
    Restart,
    StopAll,
    ToggleHelp,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, help_visible: bool) -> Action {
    // Any key closes help, except quitting
    if help_visible {
        return match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
            _ => Action::ToggleHelp,
        };
    }

    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Tabs
        (KeyCode::Char('l'), KeyModifiers::NONE) => Action::NextTab,
        (KeyCode::Char('h'), KeyModifiers::NONE) => Action::PrevTab,
        (KeyCode::Right, KeyModifiers::NONE) => Action::NextTab,
        (KeyCode::Left, KeyModifiers::NONE) => Action::PrevTab,
        (KeyCode::Tab, KeyModifiers::NONE) => Action::NextTab,
        (KeyCode::BackTab, _) => Action::PrevTab,
        (KeyCode::Char(c @ '1'..='9'), KeyModifiers::NONE) => {
            Action::SelectTab(c as usize - '1' as usize)
        }

        // Chat modes
        (KeyCode::Char('j'), KeyModifiers::NONE) => Action::NextMode,
        (KeyCode::Char('k'), KeyModifiers::NONE) => Action::PrevMode,
        (KeyCode::Down, KeyModifiers::NONE) => Action::NextMode,
        (KeyCode::Up, KeyModifiers::NONE) => Action::PrevMode,

        // Playback
        (KeyCode::Char('r'), KeyModifiers::NONE) => Action::Restart,
        (KeyCode::Char('s'), KeyModifiers::NONE) => Action::StopAll,

        (KeyCode::Char('?'), _) => Action::ToggleHelp,

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digit_selects_tab() {
        assert_eq!(handle_key_event(key(KeyCode::Char('1')), false), Action::SelectTab(0));
        assert_eq!(handle_key_event(key(KeyCode::Char('7')), false), Action::SelectTab(6));
        assert_eq!(handle_key_event(key(KeyCode::Char('0')), false), Action::None);
    }

    #[test]
    fn test_arrows() {
        assert_eq!(handle_key_event(key(KeyCode::Right), false), Action::NextTab);
        assert_eq!(handle_key_event(key(KeyCode::Left), false), Action::PrevTab);
        assert_eq!(handle_key_event(key(KeyCode::Down), false), Action::NextMode);
        assert_eq!(handle_key_event(key(KeyCode::Up), false), Action::PrevMode);
    }

    #[test]
    fn test_help_swallows_keys() {
        assert_eq!(handle_key_event(key(KeyCode::Char('q')), true), Action::ToggleHelp);
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), true),
            Action::Quit
        );
    }

    #[test]
    fn test_ctrl_c_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(ctrl_c, false), Action::Quit);
    }
}
