use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::{Config, Task, TaskList};
use crate::parse::parse_list;
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Build an App over the given tasks with default config.
pub fn app_with_tasks(tasks: Vec<Task>) -> App {
    app_with_config(tasks, &Config::default())
}

pub fn app_with_config(tasks: Vec<Task>, config: &Config) -> App {
    let mut app = App::new(TaskList::from_tasks(tasks), config);
    app.visible_rows = TERM_H as usize - 1;
    app
}

/// Build an App from list-file text.
pub fn app_from_lines(source: &str) -> App {
    let list = parse_list(source).unwrap();
    let mut app = App::new(list, &Config::default());
    app.visible_rows = TERM_H as usize - 1;
    app
}

/// One record per state except review, all on 2023-11-14.
pub const SIMPLE_LIST: &str = "\
6553F100 0 0 0 Plan the week
6553E2F0 6553E2F0 0 1 Fix the build
65529F80 6553D4E0 0 2 Write report
65529F80 6553D4E0 6553F100 3 File expenses
";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::render;

    #[test]
    fn full_screen_render() {
        let mut app = app_from_lines(SIMPLE_LIST);
        let output = render_to_string(60, 6, |frame, _area| render(frame, &mut app));
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], " >  23-11 Tue  ! Fix the build");
        assert_eq!(lines[1], "    23-11 Tue  O Write report");
        assert_eq!(lines[2], "    23-11 Tue  . Plan the week");
        assert_eq!(lines[3], "    23-11 Tue  X File expenses");
        assert!(lines[5].contains("q quit"));
        assert_eq!(app.visible_rows, 5);
    }
}
