use std::collections::HashMap;

use ratatui::style::Color;

use crate::model::TaskState;
use crate::util::color::parse_hex_color;

/// Parsed color theme for the TUI
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub not_started: Color,
    pub priority: Color,
    pub doing: Color,
    pub review: Color,
    pub done: Color,
    pub selection_bg: Color,
    pub selection_border: Color,
    /// Draw Unicode state glyphs instead of ASCII
    pub unicode: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x0C, 0x00, 0x1B),
            text: Color::Rgb(0xB0, 0xAA, 0xFF),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0xFB, 0x41, 0x96),
            dim: Color::Rgb(0x7D, 0x78, 0xBF),
            not_started: Color::Rgb(0xB0, 0xAA, 0xFF),
            priority: Color::Rgb(0xFF, 0x44, 0x44),
            doing: Color::Rgb(0x44, 0xDD, 0xFF),
            review: Color::Rgb(0xFF, 0xD7, 0x00),
            done: Color::Rgb(0x44, 0xFF, 0x88),
            selection_bg: Color::Rgb(0x3D, 0x14, 0x38),
            selection_border: Color::Rgb(0xFB, 0x41, 0x96),
            unicode: false,
        }
    }
}

impl Theme {
    /// Create a theme from config overrides, falling back to defaults.
    /// Config loading has already rejected unknown names and bad values.
    pub fn from_config(colors: &HashMap<String, String>, unicode: bool) -> Self {
        let mut theme = Theme {
            unicode,
            ..Theme::default()
        };

        for (key, value) in colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "highlight" => theme.highlight = color,
                    "dim" => theme.dim = color,
                    "not_started" => theme.not_started = color,
                    "priority" => theme.priority = color,
                    "doing" => theme.doing = color,
                    "review" => theme.review = color,
                    "done" => theme.done = color,
                    "selection_bg" => theme.selection_bg = color,
                    "selection_border" => theme.selection_border = color,
                    _ => {}
                }
            }
        }

        theme
    }

    /// Get the color for a task state
    pub fn state_color(&self, state: TaskState) -> Color {
        match state {
            TaskState::NotStarted => self.not_started,
            TaskState::Priority => self.priority,
            TaskState::Doing => self.doing,
            TaskState::InReview => self.review,
            TaskState::Done => self.done,
        }
    }

    /// Three-cell state glyph
    pub fn state_glyph(&self, state: TaskState) -> &'static str {
        if self.unicode {
            match state {
                TaskState::NotStarted => " \u{25CB} ", // ○
                TaskState::Priority => " \u{2605} ",   // ★
                TaskState::Doing => " \u{25D0} ",      // ◐
                TaskState::InReview => " \u{25CE} ",   // ◎
                TaskState::Done => " \u{2714} ",       // ✔
            }
        } else {
            match state {
                TaskState::NotStarted => " . ",
                TaskState::Priority => " ! ",
                TaskState::Doing => " O ",
                TaskState::InReview => " ? ",
                TaskState::Done => " X ",
            }
        }
    }

    /// Four-cell selection marker
    pub fn selection_marker(&self, selected: bool) -> &'static str {
        match (selected, self.unicode) {
            (false, _) => "    ",
            (true, false) => " >  ",
            (true, true) => " \u{25B6}  ", // ▶
        }
    }
}
