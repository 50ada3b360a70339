use crate::{
    api::BoardApi,
    config::ApiConfig,
    domain::{ColumnOrder, Project, ProjectDraft, ProjectId, Todo, TodoDraft, TodoId, TodoPatch},
    error::{BoardError, Result},
};
use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE},
    Method, RequestBuilder, StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::json;

/// REST backend talking JSON to the project board server
pub struct HttpApi {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpApi {
    const REORDER_PATH: &'static str = "/projects/reorder";

    /// Creates a client for the given config
    pub fn new(config: ApiConfig) -> Result<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()?;

        Ok(Self { client, config })
    }

    /// Creates a client configured from the environment
    pub fn from_env() -> Result<Self> {
        Self::new(ApiConfig::from_env()?)
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        tracing::debug!(%method, path, "api request");
        self.client.request(method, self.config.endpoint(path))
    }

    /// Sends a request and returns the body, or `None` for 204 No Content
    async fn execute(&self, request: RequestBuilder) -> Result<Option<String>> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "api error response");
            return Err(error_from_body(status.as_u16(), response.text().await));
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        Ok(Some(response.text().await?))
    }

    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let body = self.execute(request).await?.unwrap_or_default();
        Ok(serde_json::from_str(&body)?)
    }
}

/// Builds the error for a non-2xx response. An unreadable body is logged and
/// replaced by the generic status message.
fn error_from_body<E: std::fmt::Display>(status: u16, body: std::result::Result<String, E>) -> BoardError {
    match body {
        Ok(body) => BoardError::api(status, body),
        Err(e) => {
            tracing::debug!(status, error = %e, "failed to read error body");
            BoardError::api(status, "")
        }
    }
}

#[async_trait]
impl BoardApi for HttpApi {
    async fn list_projects(&self) -> Result<Vec<Project>> {
        self.fetch(self.request(Method::GET, "/projects")).await
    }

    async fn get_project(&self, id: ProjectId) -> Result<Option<Project>> {
        let path = format!("/projects/{}", id);
        match self.fetch(self.request(Method::GET, &path)).await {
            Ok(project) => Ok(Some(project)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn create_project(&self, draft: &ProjectDraft) -> Result<Project> {
        self.fetch(self.request(Method::POST, "/projects").json(draft))
            .await
    }

    async fn update_project(&self, id: ProjectId, draft: &ProjectDraft) -> Result<Project> {
        let path = format!("/projects/{}", id);
        self.fetch(self.request(Method::PUT, &path).json(draft)).await
    }

    async fn delete_project(&self, id: ProjectId) -> Result<()> {
        let path = format!("/projects/{}", id);
        self.execute(self.request(Method::DELETE, &path)).await?;
        Ok(())
    }

    async fn patch_status(&self, id: ProjectId, status: &str) -> Result<Project> {
        let path = format!("/projects/{}/status", id);
        let body = json!({ "status": status });
        self.fetch(self.request(Method::PATCH, &path).json(&body))
            .await
    }

    async fn patch_priority(&self, id: ProjectId, priority: i64) -> Result<Project> {
        let path = format!("/projects/{}/priority", id);
        let body = json!({ "priority": priority });
        self.fetch(self.request(Method::PATCH, &path).json(&body))
            .await
    }

    async fn reorder(&self, order: &ColumnOrder) -> Result<Vec<Project>> {
        self.fetch(self.request(Method::PUT, Self::REORDER_PATH).json(order))
            .await
    }

    async fn list_todos(&self, project_id: ProjectId) -> Result<Vec<Todo>> {
        let path = format!("/todos?project_id={}", project_id);
        self.fetch(self.request(Method::GET, &path)).await
    }

    async fn create_todo(&self, draft: &TodoDraft) -> Result<Todo> {
        self.fetch(self.request(Method::POST, "/todos").json(draft))
            .await
    }

    async fn update_todo(&self, id: TodoId, patch: &TodoPatch) -> Result<Todo> {
        let path = format!("/todos/{}", id);
        self.fetch(self.request(Method::PUT, &path).json(patch)).await
    }

    async fn delete_todo(&self, id: TodoId) -> Result<()> {
        let path = format!("/todos/{}", id);
        self.execute(self.request(Method::DELETE, &path)).await?;
        Ok(())
    }
}
