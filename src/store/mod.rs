pub mod rest;

pub use rest::RestStore;

#[cfg(test)]
use mockall::automock;

use crate::config::StoreConfig;
use crate::models::{NewTask, Task, TaskId, TaskStatus};
use async_trait::async_trait;
use serde_json::Value;
use std::{sync::Arc, time::Duration};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The store replied, but the payload was not a list of tasks.
    #[error("task store returned a non-list payload: {payload}")]
    UnexpectedPayload { payload: Value },

    /// The store replied with a list whose records do not decode as tasks.
    #[error("decoding task records: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request never produced a usable reply (connection failure,
    /// timeout, non-OK status, unreadable body).
    #[error("task store request failed: {0}")]
    Request(eyre::Report),
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        StoreError::Request(err.into())
    }
}

impl StoreError {
    /// True when the store was reachable but the payload shape was wrong.
    pub fn is_payload_error(&self) -> bool {
        matches!(
            self,
            StoreError::UnexpectedPayload { .. } | StoreError::Decode(_)
        )
    }
}

#[async_trait]
#[cfg_attr(test, automock)]
pub trait TaskStore {
    async fn list(&self) -> Result<Vec<Task>, StoreError>;
    async fn create(&self, task: NewTask) -> Result<(), StoreError>;
    async fn set_status(&self, id: TaskId, status: TaskStatus) -> Result<(), StoreError>;
    async fn remove(&self, id: TaskId) -> Result<(), StoreError>;
}

pub type ArcStore = Arc<dyn TaskStore + Send + Sync>;

pub fn new_store(config: &StoreConfig) -> ArcStore {
    let mut store = RestStore::default().with_endpoint(&config.endpoint);
    if let Some(timeout) = config.timeout_secs {
        store = store.with_timeout(Duration::from_secs(timeout as u64));
    }
    Arc::new(store)
}
