use std::cmp::Ordering;

use crate::model::list::TaskList;
use crate::model::task::{Task, TaskState, Timestamp};

/// Urgency rank; lower sorts first
fn precedence(state: TaskState) -> u8 {
    match state {
        TaskState::InReview => 0,
        TaskState::Priority => 1,
        TaskState::Doing => 2,
        TaskState::NotStarted => 3,
        TaskState::Done => 4,
    }
}

/// The timestamp that orders tasks within a state
pub fn time_key(task: &Task) -> Timestamp {
    match task.state {
        TaskState::Priority | TaskState::Doing | TaskState::InReview => task.started_at,
        TaskState::NotStarted => task.added_at,
        TaskState::Done => task.completed_at,
    }
}

/// Canonical order: by state precedence, then newest time key first
pub fn compare(a: &Task, b: &Task) -> Ordering {
    precedence(a.state)
        .cmp(&precedence(b.state))
        .then_with(|| time_key(b).cmp(&time_key(a)))
}

/// Stable sort of the list into canonical order.
///
/// Returns the permutation applied: `perm[new_index] == old_index`.
pub fn sort_tasks(list: &mut TaskList) -> Vec<usize> {
    let tasks = list.as_mut_slice();
    let mut perm: Vec<usize> = (0..tasks.len()).collect();
    perm.sort_by(|&a, &b| compare(&tasks[a], &tasks[b]));

    let sorted: Vec<Task> = perm.iter().map(|&i| tasks[i].clone()).collect();
    for (slot, task) in tasks.iter_mut().zip(sorted) {
        *slot = task;
    }
    perm
}

/// New position of the task that was at `old_index` before a sort
pub fn new_position(perm: &[usize], old_index: usize) -> Option<usize> {
    perm.iter().position(|&i| i == old_index)
}
