use serde::{Deserialize, Serialize};

/// Seconds since the Unix epoch. Zero means "not yet reached".
pub type Timestamp = i64;

/// Lifecycle state of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskState {
    NotStarted,
    Priority,
    Doing,
    InReview,
    Done,
}

impl TaskState {
    /// All states, in lifecycle order
    pub const ALL: [TaskState; 5] = [
        TaskState::NotStarted,
        TaskState::Priority,
        TaskState::Doing,
        TaskState::InReview,
        TaskState::Done,
    ];

    /// The decimal ordinal written to the list file.
    ///
    /// `Done` keeps 3 and `InReview` takes 4 so lists written before the
    /// review state existed load unchanged.
    pub fn ordinal(self) -> u8 {
        match self {
            TaskState::NotStarted => 0,
            TaskState::Priority => 1,
            TaskState::Doing => 2,
            TaskState::Done => 3,
            TaskState::InReview => 4,
        }
    }

    /// Map a file ordinal back to a state
    pub fn from_ordinal(n: i64) -> Option<TaskState> {
        match n {
            0 => Some(TaskState::NotStarted),
            1 => Some(TaskState::Priority),
            2 => Some(TaskState::Doing),
            3 => Some(TaskState::Done),
            4 => Some(TaskState::InReview),
            _ => None,
        }
    }

    /// Short lowercase label, used by the plain listing and the help overlay
    pub fn label(self) -> &'static str {
        match self {
            TaskState::NotStarted => "todo",
            TaskState::Priority => "priority",
            TaskState::Doing => "doing",
            TaskState::InReview => "review",
            TaskState::Done => "done",
        }
    }
}

/// A single task record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub added_at: Timestamp,
    pub started_at: Timestamp,
    pub completed_at: Timestamp,
    pub state: TaskState,
    /// Free-form text, never contains a newline
    pub text: String,
}

impl Task {
    /// Create a fresh not-started task added at `now`
    pub fn new(text: String, now: Timestamp) -> Self {
        Task {
            added_at: now,
            started_at: 0,
            completed_at: 0,
            state: TaskState::NotStarted,
            text,
        }
    }
}
