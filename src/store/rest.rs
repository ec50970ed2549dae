#[cfg(test)]
#[path = "rest_test.rs"]
mod tests;

use crate::config::constants::STORE_ENDPOINT;
use crate::config::user_agent;
use crate::models::{NewTask, StatusPatch, Task, TaskId, TaskStatus};
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use std::time;

use super::{StoreError, TaskStore};

/// Task store client over the backend's REST surface (`/tasks`).
pub struct RestStore {
    endpoint: String,
    timeout: Option<time::Duration>,
    client: reqwest::Client,
}

impl RestStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: time::Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn timeout(&self) -> Option<time::Duration> {
        self.timeout
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let mut req = self
            .client
            .request(method, format!("{}{}", self.endpoint, path))
            .header("User-Agent", user_agent());
        if let Some(timeout) = self.timeout {
            req = req.timeout(timeout);
        }
        req
    }
}

#[async_trait]
impl TaskStore for RestStore {
    async fn list(&self) -> Result<Vec<Task>, StoreError> {
        let res = self
            .request(Method::GET, "/tasks")
            .send()
            .await?
            .error_for_status()?;

        // Decode in two steps: the shape check on the whole payload is a
        // recognized failure kind of its own.
        let payload: Value = res.json().await?;
        let records = match payload {
            Value::Array(records) => records,
            other => return Err(StoreError::UnexpectedPayload { payload: other }),
        };

        records
            .into_iter()
            .map(|record| serde_json::from_value(record).map_err(StoreError::from))
            .collect()
    }

    async fn create(&self, task: NewTask) -> Result<(), StoreError> {
        self.request(Method::POST, "/tasks")
            .json(&task)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn set_status(&self, id: TaskId, status: TaskStatus) -> Result<(), StoreError> {
        self.request(Method::PUT, &format!("/tasks/{}", id))
            .json(&StatusPatch { status })
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn remove(&self, id: TaskId) -> Result<(), StoreError> {
        self.request(Method::DELETE, &format!("/tasks/{}", id))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

impl Default for RestStore {
    fn default() -> Self {
        Self {
            endpoint: STORE_ENDPOINT.to_string(),
            timeout: None,
            client: reqwest::Client::new(),
        }
    }
}
