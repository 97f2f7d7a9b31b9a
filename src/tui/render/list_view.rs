use chrono::{DateTime, Datelike, IsoWeek};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::{Task, TaskState, Timestamp};
use crate::ops::order::time_key;
use crate::tui::app::App;
use crate::util::unicode::{display_width, expand_tabs, truncate_to_width};

/// Marker (4) + date (10) + glyph (3)
const PREFIX_WIDTH: usize = 4 + DATE_WIDTH + 3;
const DATE_WIDTH: usize = 10;

/// Render the task list content area
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let height = area.height as usize;
    let len = app.list.len();
    app.visible_rows = height.max(1);
    app.view.clamp(len, app.visible_rows);

    if len == 0 {
        let empty = Paragraph::new(" No tasks. Press a to add one.")
            .style(Style::default().fg(app.theme.dim).bg(app.theme.background));
        frame.render_widget(empty, area);
        return;
    }

    // Week headers take rows too; scroll further until the selection fits
    while rows_needed(app, app.view.scroll_offset, app.view.selection_index) > height
        && app.view.nudge_scroll()
    {}

    let width = area.width as usize;
    let scroll = app.view.scroll_offset;
    let mut lines: Vec<Line> = Vec::with_capacity(height);

    for idx in scroll..len {
        if lines.len() >= height {
            break;
        }
        if let Some(week) = header_week(app, idx, scroll) {
            if lines.len() + 2 > height {
                break;
            }
            lines.push(render_week_header(app, week, width));
        }
        if let Ok(task) = app.list.get(idx) {
            let is_cursor = idx == app.view.selection_index;
            lines.push(render_task_line(app, task, is_cursor, width));
        }
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}

/// Screen rows used from `scroll` down to and including `selection`
fn rows_needed(app: &App, scroll: usize, selection: usize) -> usize {
    let headers = (scroll..=selection)
        .filter(|&idx| header_week(app, idx, scroll).is_some())
        .count();
    selection.saturating_sub(scroll) + 1 + headers
}

/// The ISO week to announce above row `idx`, if it starts a new week
/// relative to the row rendered before it
fn header_week(app: &App, idx: usize, first_rendered: usize) -> Option<IsoWeek> {
    if !app.week_headers || idx <= first_rendered {
        return None;
    }
    let prev = app.list.get(idx - 1).ok()?;
    let cur = app.list.get(idx).ok()?;
    let week = week_of(cur)?;
    if week_of(prev) == Some(week) {
        None
    } else {
        Some(week)
    }
}

fn week_of(task: &Task) -> Option<IsoWeek> {
    DateTime::from_timestamp(time_key(task), 0).map(|dt| dt.iso_week())
}

/// `yy-mm Day ` in UTC, blank for unset timestamps
fn format_date(ts: Timestamp) -> String {
    match DateTime::from_timestamp(ts, 0) {
        Some(dt) if ts != 0 => dt.format("%y-%m %a ").to_string(),
        _ => " ".repeat(DATE_WIDTH),
    }
}

fn render_week_header(app: &App, week: IsoWeek, width: usize) -> Line<'static> {
    let label = format!("\u{2500}\u{2500} week {}, {} ", week.week(), week.year());
    let fill = width.saturating_sub(display_width(&label));
    Line::from(Span::styled(
        format!("{}{}", label, "\u{2500}".repeat(fill)),
        Style::default().fg(app.theme.dim).bg(app.theme.background),
    ))
}

fn render_task_line(app: &App, task: &Task, is_cursor: bool, width: usize) -> Line<'static> {
    let theme = &app.theme;
    let bg = if is_cursor {
        theme.selection_bg
    } else {
        theme.background
    };
    let base = Style::default().bg(bg);

    let mut spans: Vec<Span> = vec![
        Span::styled(
            theme.selection_marker(is_cursor),
            base.fg(theme.selection_border),
        ),
        Span::styled(format_date(time_key(task)), base.fg(theme.dim)),
        Span::styled(
            theme.state_glyph(task.state),
            base.fg(theme.state_color(task.state))
                .add_modifier(Modifier::BOLD),
        ),
    ];

    let text = truncate_to_width(
        &expand_tabs(&task.text),
        width.saturating_sub(PREFIX_WIDTH),
    );
    let text_width = display_width(&text);
    let text_style = if task.state == TaskState::Done {
        base.fg(theme.dim)
    } else if is_cursor {
        base.fg(theme.text_bright)
    } else {
        base.fg(theme.text)
    };
    spans.push(Span::styled(text, text_style));

    // Selection background runs to the right edge
    if is_cursor {
        let pad = width.saturating_sub(PREFIX_WIDTH + text_width);
        spans.push(Span::styled(" ".repeat(pad), base));
    }

    Line::from(spans)
}
