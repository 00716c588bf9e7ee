//! The task API seam and its HTTP implementation
//!
//! Consumers program against [`TaskApi`]; the store and all controllers
//! only ever see the trait. [`HttpTaskApi`] is the reqwest-backed
//! production implementation. No operation retries; failures surface
//! directly as [`ApiError`].

use crate::config::ApiConfig;
use crate::decode::decode_list;
use crate::error::ApiError;
use async_trait::async_trait;
use taskboard_model::{NewTask, TaskId, TaskPatch, WireTask};
use url::Url;

/// The five REST operations the backend offers
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait TaskApi: Send + Sync {
    /// Fetch the full task collection.
    async fn list_tasks(&self) -> Result<Vec<WireTask>, ApiError>;

    /// Create a task; the returned record is informational only.
    async fn create_task(&self, new_task: NewTask) -> Result<WireTask, ApiError>;

    /// Replace the editable fields of an existing task.
    async fn update_task(&self, id: &TaskId, patch: TaskPatch) -> Result<WireTask, ApiError>;

    /// Flip the completion flag server-side; the client cannot pick a
    /// target value, only invert the current one.
    async fn toggle_completion(&self, id: &TaskId) -> Result<WireTask, ApiError>;

    /// Remove a task. Repeat deletion of the same id is the server's
    /// contract, not checked here.
    async fn delete_task(&self, id: &TaskId) -> Result<(), ApiError>;
}

/// reqwest-backed [`TaskApi`] implementation
#[derive(Debug, Clone)]
pub struct HttpTaskApi {
    base_url: Url,
    http: reqwest::Client,
}

impl HttpTaskApi {
    /// Build a client from validated configuration.
    #[must_use]
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url().clone(),
            http: reqwest::Client::new(),
        }
    }

    /// Join path segments onto the configured base URL.
    fn endpoint<'a, I>(&self, segments: I) -> Url
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut url = self.base_url.clone();
        // Config validation guarantees the URL can be a base.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl TaskApi for HttpTaskApi {
    async fn list_tasks(&self) -> Result<Vec<WireTask>, ApiError> {
        let url = self.endpoint(["tasks"]);
        tracing::debug!(%url, "listing tasks");
        let response = Self::check_status(self.http.get(url).send().await?).await?;
        let value: serde_json::Value = response.json().await?;
        decode_list(value)
    }

    async fn create_task(&self, new_task: NewTask) -> Result<WireTask, ApiError> {
        let url = self.endpoint(["tasks"]);
        tracing::debug!(%url, title = %new_task.title, "creating task");
        let response =
            Self::check_status(self.http.post(url).json(&new_task).send().await?).await?;
        Ok(response.json().await?)
    }

    async fn update_task(&self, id: &TaskId, patch: TaskPatch) -> Result<WireTask, ApiError> {
        let url = self.endpoint(["tasks", id.as_str()]);
        tracing::debug!(%url, %id, "updating task");
        let response = Self::check_status(self.http.put(url).json(&patch).send().await?).await?;
        Ok(response.json().await?)
    }

    async fn toggle_completion(&self, id: &TaskId) -> Result<WireTask, ApiError> {
        let url = self.endpoint(["tasks", "change-task-completion", id.as_str()]);
        tracing::debug!(%url, %id, "toggling completion");
        let response = Self::check_status(self.http.put(url).send().await?).await?;
        Ok(response.json().await?)
    }

    async fn delete_task(&self, id: &TaskId) -> Result<(), ApiError> {
        let url = self.endpoint(["tasks", id.as_str()]);
        tracing::debug!(%url, %id, "deleting task");
        Self::check_status(self.http.delete(url).send().await?).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> HttpTaskApi {
        HttpTaskApi::new(&ApiConfig::from_base_url(base).unwrap())
    }

    #[test]
    fn endpoint_joins_collection_path() {
        let api = client("http://localhost:3333");
        assert_eq!(api.endpoint(["tasks"]).as_str(), "http://localhost:3333/tasks");
    }

    #[test]
    fn endpoint_keeps_base_path_prefix() {
        let api = client("http://localhost:3333/api/v1");
        assert_eq!(
            api.endpoint(["tasks", "abc"]).as_str(),
            "http://localhost:3333/api/v1/tasks/abc"
        );
    }

    #[test]
    fn endpoint_tolerates_trailing_slash_on_base() {
        let api = client("http://localhost:3333/api/");
        assert_eq!(
            api.endpoint(["tasks"]).as_str(),
            "http://localhost:3333/api/tasks"
        );
    }

    #[test]
    fn toggle_endpoint_uses_dedicated_segment() {
        let api = client("http://localhost:3333");
        assert_eq!(
            api.endpoint(["tasks", "change-task-completion", "42"]).as_str(),
            "http://localhost:3333/tasks/change-task-completion/42"
        );
    }
}
