use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::Timestamp;
use crate::tui::app::{App, Intent, Mode};

pub(super) fn handle_add(app: &mut App, key: KeyEvent, now: Timestamp) {
    match key.code {
        KeyCode::Enter => {
            let text = std::mem::take(&mut app.edit_buffer);
            app.mode = Mode::Navigate;
            app.apply(Intent::Append(text), now);
        }
        KeyCode::Esc => {
            app.edit_buffer.clear();
            app.mode = Mode::Navigate;
        }
        KeyCode::Backspace => {
            app.edit_buffer.pop();
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.edit_buffer.clear();
        }
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.edit_buffer.push(c);
        }
        KeyCode::Tab => app.edit_buffer.push('\t'),
        _ => {}
    }
}
