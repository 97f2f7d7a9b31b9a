use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode::{display_width, expand_tabs};

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let (mut spans, hint) = match app.mode {
        Mode::Navigate => {
            let left = match app.status_message {
                Some(ref message) => Span::styled(
                    format!(" {}", message),
                    Style::default().fg(app.theme.priority).bg(bg),
                ),
                None => {
                    let (open, active, done) = app.summary();
                    Span::styled(
                        format!(" {} open \u{00B7} {} active \u{00B7} {} done", open, active, done),
                        Style::default().fg(app.theme.dim).bg(bg),
                    )
                }
            };
            (vec![left], "a add  ? help  q quit")
        }
        Mode::Add => {
            // Add prompt: add: text▌
            let spans = vec![
                Span::styled(" add: ", Style::default().fg(app.theme.highlight).bg(bg)),
                Span::styled(
                    expand_tabs(&app.edit_buffer),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ),
                Span::styled("\u{258C}", Style::default().fg(app.theme.highlight).bg(bg)), // ▌ cursor
            ];
            (spans, "Enter add  Esc cancel")
        }
    };

    let content_width: usize = spans.iter().map(|s| display_width(&s.content)).sum();
    let hint_width = display_width(hint);
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
