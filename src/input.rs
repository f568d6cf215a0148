use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    Refresh,
    CycleTheme,
    ShowHelp,
    Back,
    None,
}

pub fn handle_key(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _)
        | (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        (KeyCode::Char('r'), _)
        | (KeyCode::F(5), _)    => Action::Refresh,

        (KeyCode::Char('t'), _) => Action::CycleTheme,

        (KeyCode::Char('?'), _)
        | (KeyCode::F(1), _)    => Action::ShowHelp,

        (KeyCode::Esc, _)       => Action::Back,

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    #[test]
    fn refresh_keys() {
        assert_eq!(handle_key(KeyEvent::from(KeyCode::Char('r'))), Action::Refresh);
        assert_eq!(handle_key(KeyEvent::from(KeyCode::F(5))), Action::Refresh);
    }

    #[test]
    fn quit_keys() {
        assert_eq!(handle_key(KeyEvent::from(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(
            handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
    }

    #[test]
    fn unmapped_key_is_none() {
        assert_eq!(handle_key(KeyEvent::from(KeyCode::Char('z'))), Action::None);
    }
}
