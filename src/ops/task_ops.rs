use crate::model::list::TaskList;
use crate::model::task::{Task, TaskState, Timestamp};

/// Error type for task operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    #[error("task text is empty")]
    EmptyText,
}

// ---------------------------------------------------------------------------
// State transitions
// ---------------------------------------------------------------------------

/// Advance one step: not started/priority → doing → in review → done
pub fn advance(task: &mut Task, now: Timestamp) {
    match task.state {
        TaskState::NotStarted | TaskState::Priority => {
            task.state = TaskState::Doing;
            task.started_at = now;
        }
        TaskState::Doing => task.state = TaskState::InReview,
        TaskState::InReview => {
            task.state = TaskState::Done;
            task.completed_at = now;
        }
        TaskState::Done => {}
    }
}

/// Back to not started. Timestamps are kept as history.
pub fn reset(task: &mut Task) {
    task.state = TaskState::NotStarted;
}

/// Any non-done state → priority, restamping `started_at`
pub fn mark_priority(task: &mut Task, now: Timestamp) {
    if task.state == TaskState::Done {
        return;
    }
    task.state = TaskState::Priority;
    task.started_at = now;
}

// ---------------------------------------------------------------------------
// Append
// ---------------------------------------------------------------------------

/// Collapse line breaks to spaces and trim, so the text fits on one record line
pub fn normalize_text(text: &str) -> String {
    text.replace("\r\n", " ")
        .replace(['\n', '\r'], " ")
        .trim()
        .to_string()
}

/// Add a new not-started task at the front of the list
pub fn append(list: &mut TaskList, text: &str, now: Timestamp) -> Result<(), TaskError> {
    let text = normalize_text(text);
    if text.is_empty() {
        return Err(TaskError::EmptyText);
    }
    list.prepend(Task::new(text, now));
    Ok(())
}
