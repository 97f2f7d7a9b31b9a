use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::Timestamp;
use crate::tui::app::{App, Intent, Mode};

/// Map a navigate-mode key to an intent
pub fn key_to_intent(key: KeyEvent) -> Option<Intent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Intent::Quit),
            KeyCode::Char('p') => Some(Intent::MoveUp),
            KeyCode::Char('n') => Some(Intent::MoveDown),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Intent::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Intent::MoveDown),
        KeyCode::Right | KeyCode::Enter | KeyCode::Char('l') => Some(Intent::Advance),
        KeyCode::Left | KeyCode::Char('h') => Some(Intent::Reset),
        KeyCode::Char('p') | KeyCode::Char('!') => Some(Intent::MarkPriority),
        KeyCode::Char('q') | KeyCode::Esc => Some(Intent::Quit),
        _ => None,
    }
}

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent, now: Timestamp) {
    // Help overlay intercepts ?, q and Esc
    if app.show_help {
        if matches!(
            key.code,
            KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Esc
        ) {
            app.show_help = false;
        }
        return;
    }

    // Clear any transient status message on keypress
    app.status_message = None;

    match key.code {
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('a') if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.edit_buffer.clear();
            app.mode = Mode::Add;
        }
        _ => {
            if let Some(intent) = key_to_intent(key) {
                app.apply(intent, now);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_and_vim_keys() {
        assert_eq!(key_to_intent(press(KeyCode::Up)), Some(Intent::MoveUp));
        assert_eq!(key_to_intent(press(KeyCode::Char('j'))), Some(Intent::MoveDown));
        assert_eq!(key_to_intent(press(KeyCode::Right)), Some(Intent::Advance));
        assert_eq!(key_to_intent(press(KeyCode::Left)), Some(Intent::Reset));
        assert_eq!(key_to_intent(press(KeyCode::Char('!'))), Some(Intent::MarkPriority));
        assert_eq!(key_to_intent(press(KeyCode::Char('q'))), Some(Intent::Quit));
        assert_eq!(key_to_intent(press(KeyCode::Char('z'))), None);
    }

    #[test]
    fn ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_intent(key), Some(Intent::Quit));
    }
}
