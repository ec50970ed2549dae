use super::{TaskId, TaskStatus};

/// User intents, sent from the UI to the action service. Mutating actions
/// always end in a full reload of the task list.
#[derive(Debug)]
pub enum Action {
    ReloadTasks,
    SubmitTask(String), // raw input; the service trims it
    ToggleTask { id: TaskId, status: TaskStatus },
    RemoveTask(TaskId),

    FetchWeather(String), // city name
}
