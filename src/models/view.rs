#[cfg(test)]
#[path = "view_test.rs"]
mod tests;

use super::{Task, TaskId, TaskStatus};

/// Shown when the store replied but the payload was not a task list.
pub const MALFORMED_LIST_TEXT: &str = "Error loading tasks";

/// Shown when the list request itself failed.
pub const LOAD_FAILED_TEXT: &str = "Could not load tasks";

/// What the task container displays. Always replaced wholesale, never
/// patched in place.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskListView {
    Rows(Vec<TaskRow>),
    Placeholder(&'static str),
}

impl TaskListView {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        TaskListView::Rows(tasks.iter().map(TaskRow::from).collect())
    }

    /// Rows to render; a placeholder view has none.
    pub fn rows(&self) -> &[TaskRow] {
        match self {
            TaskListView::Rows(rows) => rows,
            TaskListView::Placeholder(_) => &[],
        }
    }
}

impl Default for TaskListView {
    fn default() -> Self {
        TaskListView::Rows(vec![])
    }
}

/// One rendered task with its two controls.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRow {
    pub id: TaskId,
    pub label: String,
    pub status: TaskStatus,
    pub done: bool,
    pub toggle_label: &'static str,
}

impl From<&Task> for TaskRow {
    fn from(task: &Task) -> Self {
        let done = task.status.is_done();
        Self {
            id: task.id.clone(),
            label: format!("{} ({})", task.title, task.status),
            status: task.status,
            done,
            toggle_label: if done { "Undo" } else { "Done" },
        }
    }
}
