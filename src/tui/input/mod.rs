mod add;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent};

use crate::model::Timestamp;

use super::app::{App, Mode};

pub use navigate::key_to_intent;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent, now: Timestamp) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    match app.mode {
        Mode::Navigate => navigate::handle_navigate(app, key, now),
        Mode::Add => add::handle_add(app, key, now),
    }
}
