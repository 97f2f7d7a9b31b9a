use chrono::DateTime;
use serde::Serialize;

use crate::model::{Task, TaskList, TaskState, Timestamp};
use crate::ops::order::time_key;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub text: String,
    pub state: TaskState,
    pub added: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<String>,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn task_to_json(task: &Task) -> TaskJson {
    TaskJson {
        text: task.text.clone(),
        state: task.state,
        added: rfc3339(task.added_at).unwrap_or_default(),
        started: nonzero(task.started_at).and_then(rfc3339),
        completed: nonzero(task.completed_at).and_then(rfc3339),
    }
}

pub fn list_to_json(list: &TaskList) -> Vec<TaskJson> {
    list.iter().map(task_to_json).collect()
}

fn nonzero(ts: Timestamp) -> Option<Timestamp> {
    (ts != 0).then_some(ts)
}

fn rfc3339(ts: Timestamp) -> Option<String> {
    DateTime::from_timestamp(ts, 0).map(|dt| dt.to_rfc3339())
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// Format a single task as `state date text`
pub fn format_task_line(task: &Task) -> String {
    let ts = time_key(task);
    let date = match DateTime::from_timestamp(ts, 0) {
        Some(dt) if ts != 0 => dt.format("%Y-%m-%d").to_string(),
        _ => "-".to_string(),
    };
    format!("{:<8} {:<10} {}", task.state.label(), date, task.text)
}

/// One line per task, in list order
pub fn format_listing(list: &TaskList) -> String {
    list.iter()
        .map(format_task_line)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::order::sort_tasks;

    /// 2023-11-14 22:13:20 UTC
    const T: i64 = 1_700_000_000;

    fn sample() -> TaskList {
        let mut list = TaskList::from_tasks([
            Task::new("Plan the week".into(), T),
            Task {
                added_at: T - 86_400,
                started_at: T - 7_200,
                completed_at: T,
                state: TaskState::Done,
                text: "File expenses".into(),
            },
            Task {
                added_at: T - 86_400,
                started_at: T - 3_600,
                completed_at: 0,
                state: TaskState::Priority,
                text: "Fix the build".into(),
            },
            Task {
                added_at: 0,
                started_at: 0,
                completed_at: 0,
                state: TaskState::InReview,
                text: "Legacy entry".into(),
            },
        ]);
        sort_tasks(&mut list);
        list
    }

    #[test]
    fn plain_listing() {
        insta::assert_snapshot!(format_listing(&sample()), @r"
        review   -          Legacy entry
        priority 2023-11-14 Fix the build
        todo     2023-11-14 Plan the week
        done     2023-11-14 File expenses
        ");
    }

    #[test]
    fn empty_listing() {
        assert_eq!(format_listing(&TaskList::new()), "");
    }

    #[test]
    fn json_omits_unset_timestamps() {
        let list = sample();
        let value = serde_json::to_value(list_to_json(&list)).unwrap();
        let fix = &value[1];
        assert_eq!(fix["text"], "Fix the build");
        assert_eq!(fix["state"], "priority");
        assert_eq!(fix["added"], "2023-11-13T22:13:20+00:00");
        assert_eq!(fix["started"], "2023-11-14T21:13:20+00:00");
        assert!(fix.get("completed").is_none());

        let done = &value[3];
        assert_eq!(done["state"], "done");
        assert_eq!(done["completed"], "2023-11-14T22:13:20+00:00");
    }
}
