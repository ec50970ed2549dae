#[cfg(test)]
#[path = "task_test.rs"]
mod tests;

use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt::Display;

/// Identifier assigned by the store. Kept opaque on the client: the backend
/// may encode it as a JSON number or a string, and it is only ever echoed
/// back in request paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for TaskId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(TaskId(s)),
            Value::Number(n) => Ok(TaskId(n.to_string())),
            other => Err(D::Error::custom(format!("invalid task id: {}", other))),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Pending,
    Done,
}

impl TaskStatus {
    pub fn is_done(self) -> bool {
        self == TaskStatus::Done
    }

    /// The status a toggle control moves the task to.
    pub fn toggled(self) -> TaskStatus {
        match self {
            TaskStatus::Done => TaskStatus::Pending,
            TaskStatus::Pending => TaskStatus::Done,
        }
    }
}

impl<'de> Deserialize<'de> for TaskStatus {
    // The store is free to hold status values this client never writes;
    // anything that is not "done" renders and toggles as pending.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "done" => TaskStatus::Done,
            _ => TaskStatus::Pending,
        })
    }
}

impl Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskStatus::Pending => write!(f, "pending"),
            TaskStatus::Done => write!(f, "done"),
        }
    }
}

/// A task record as the store returns it. The client never holds these
/// between reloads.
#[derive(Debug, Clone, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub description: Option<String>,
}

/// Create request body. Status defaults to pending at the store.
#[derive(Debug, Serialize)]
pub struct NewTask {
    pub title: String,
}

impl NewTask {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// Update request body. The only field this client ever changes.
#[derive(Debug, Serialize)]
pub struct StatusPatch {
    pub status: TaskStatus,
}
