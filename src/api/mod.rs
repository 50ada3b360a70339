use crate::{
    domain::{ColumnOrder, Project, ProjectDraft, ProjectId, Todo, TodoDraft, TodoId, TodoPatch},
    error::Result,
};
use async_trait::async_trait;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "http")]
pub use http::HttpApi;

/// Remote persistence for projects and todos
///
/// The server owns ids, ordering rules and status values; implementations
/// only move records across the wire.
#[async_trait]
pub trait BoardApi: Send + Sync {
    /// Lists every project
    async fn list_projects(&self) -> Result<Vec<Project>>;

    /// Loads a project by ID; a missing project is `None`, not an error
    async fn get_project(&self, id: ProjectId) -> Result<Option<Project>>;

    async fn create_project(&self, draft: &ProjectDraft) -> Result<Project>;

    async fn update_project(&self, id: ProjectId, draft: &ProjectDraft) -> Result<Project>;

    async fn delete_project(&self, id: ProjectId) -> Result<()>;

    /// Replaces the raw status of a project
    async fn patch_status(&self, id: ProjectId, status: &str) -> Result<Project>;

    async fn patch_priority(&self, id: ProjectId, priority: i64) -> Result<Project>;

    /// Persists a full board layout and returns the authoritative project list
    async fn reorder(&self, order: &ColumnOrder) -> Result<Vec<Project>>;

    /// Lists the todos of one project
    async fn list_todos(&self, project_id: ProjectId) -> Result<Vec<Todo>>;

    async fn create_todo(&self, draft: &TodoDraft) -> Result<Todo>;

    async fn update_todo(&self, id: TodoId, patch: &TodoPatch) -> Result<Todo>;

    async fn delete_todo(&self, id: TodoId) -> Result<()>;
}
