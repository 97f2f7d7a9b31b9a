use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::{Config, TaskList, Timestamp, ViewState};
use crate::ops::order::{new_position, sort_tasks};
use crate::ops::task_ops;

use super::input;
use super::render;
use super::theme::Theme;

/// How long one loop iteration waits for a key before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing the text of a new task in the status row
    Add,
}

/// A user action, decoded from a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    MoveUp,
    MoveDown,
    Advance,
    Reset,
    MarkPriority,
    Append(String),
    Quit,
}

/// Main application state
pub struct App {
    /// The list, always in canonical order between intents
    pub list: TaskList,
    pub view: ViewState,
    pub theme: Theme,
    pub week_headers: bool,
    pub mode: Mode,
    pub should_quit: bool,
    /// Help overlay visible
    pub show_help: bool,
    /// Text typed in Add mode
    pub edit_buffer: String,
    /// Transient message shown in the status row
    pub status_message: Option<String>,
    /// Rows available to the list, updated on every render
    pub visible_rows: usize,
}

impl App {
    pub fn new(mut list: TaskList, config: &Config) -> Self {
        sort_tasks(&mut list);
        App {
            list,
            view: ViewState::new(),
            theme: Theme::from_config(&config.colors, config.unicode),
            week_headers: config.week_headers,
            mode: Mode::Navigate,
            should_quit: false,
            show_help: false,
            edit_buffer: String::new(),
            status_message: None,
            visible_rows: 1,
        }
    }

    /// Apply one intent. At most one task changes per call.
    pub fn apply(&mut self, intent: Intent, now: Timestamp) {
        let len = self.list.len();
        match intent {
            Intent::MoveUp => self.view.move_up(len),
            Intent::MoveDown => self.view.move_down(len, self.visible_rows),
            Intent::Advance => self.update_selected(|task| task_ops::advance(task, now)),
            Intent::Reset => self.update_selected(task_ops::reset),
            Intent::MarkPriority => {
                self.update_selected(|task| task_ops::mark_priority(task, now))
            }
            Intent::Append(text) => match task_ops::append(&mut self.list, &text, now) {
                Ok(()) => {
                    tracing::info!(text = %text, "task added");
                    self.resort_following(0);
                }
                Err(e) => self.status_message = Some(e.to_string()),
            },
            Intent::Quit => self.should_quit = true,
        }
    }

    /// Mutate the highlighted task, then re-sort keeping it highlighted
    fn update_selected(&mut self, f: impl FnOnce(&mut crate::model::Task)) {
        let Ok(idx) = self.view.selected(self.list.len()) else {
            return;
        };
        if let Ok(task) = self.list.get_mut(idx) {
            let before = task.state;
            f(&mut *task);
            tracing::debug!(from = ?before, to = ?task.state, "state change");
        }
        self.resort_following(idx);
    }

    fn resort_following(&mut self, old_idx: usize) {
        let perm = sort_tasks(&mut self.list);
        let new_idx = new_position(&perm, old_idx).unwrap_or(old_idx);
        self.view.select(new_idx, self.list.len(), self.visible_rows);
    }

    /// Counts per state for the status row: (open, doing or in review, done)
    pub fn summary(&self) -> (usize, usize, usize) {
        use crate::model::TaskState;
        let mut open = 0;
        let mut active = 0;
        let mut done = 0;
        for task in &self.list {
            match task.state {
                TaskState::Done => done += 1,
                TaskState::Doing | TaskState::InReview => active += 1,
                TaskState::NotStarted | TaskState::Priority => open += 1,
            }
        }
        (open, active, done)
    }
}

/// Current time in seconds since the epoch
pub fn now() -> Timestamp {
    chrono::Utc::now().timestamp()
}

/// Run the TUI over `list`. The list comes back even when the terminal
/// fails, carrying every change made before the failure.
pub fn run(list: TaskList, config: &Config) -> (TaskList, Result<(), Box<dyn std::error::Error>>) {
    let mut app = App::new(list, config);
    let result = run_terminal(&mut app);
    if let Err(ref e) = result {
        tracing::warn!(error = %e, "terminal session failed");
    }
    (app.list, result)
}

fn run_terminal(app: &mut App) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal
    enable_raw_mode()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_alternate_screen(app);

    // Restore terminal
    disable_raw_mode()?;
    result
}

fn run_alternate_screen(app: &mut App) -> Result<(), Box<dyn std::error::Error>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let result = run_session(app);
    execute!(io::stdout(), LeaveAlternateScreen)?;
    result
}

fn run_session(app: &mut App) -> Result<(), Box<dyn std::error::Error>> {
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;
    let result = run_event_loop(&mut terminal, app);
    terminal.show_cursor()?;
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key, now());
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
