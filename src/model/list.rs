use std::collections::VecDeque;

use crate::model::task::Task;

/// Position outside the bounds of a list
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("index {index} out of bounds for list of {len} tasks")]
pub struct IndexError {
    pub index: usize,
    pub len: usize,
}

/// Ordered collection that owns every task record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: VecDeque<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        TaskList::default()
    }

    /// Build a list in the given order
    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        TaskList {
            tasks: tasks.into_iter().collect(),
        }
    }

    /// Insert a task at the front
    pub fn prepend(&mut self, task: Task) {
        self.tasks.push_front(task);
    }

    pub fn get(&self, index: usize) -> Result<&Task, IndexError> {
        let len = self.tasks.len();
        self.tasks.get(index).ok_or(IndexError { index, len })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut Task, IndexError> {
        let len = self.tasks.len();
        self.tasks.get_mut(index).ok_or(IndexError { index, len })
    }

    /// Take the task at `index` out of the list
    pub fn remove(&mut self, index: usize) -> Result<Task, IndexError> {
        let len = self.tasks.len();
        self.tasks.remove(index).ok_or(IndexError { index, len })
    }

    pub fn count(&self) -> usize {
        self.tasks.len()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Contiguous mutable view, for in-place sorting
    pub fn as_mut_slice(&mut self) -> &mut [Task] {
        self.tasks.make_contiguous()
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::collections::vec_deque::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
