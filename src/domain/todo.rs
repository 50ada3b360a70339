use crate::domain::project::ProjectId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned identifier of a todo
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(i64);

impl TodoId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A checklist entry attached to a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: i64,
    /// Soft-delete flag; deleted todos stay on the server
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub project_id: Option<ProjectId>,
}

/// Body of a create-todo request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoDraft {
    pub description: String,
    pub priority: i64,
    pub project_id: ProjectId,
    pub deleted: bool,
}

impl TodoDraft {
    pub fn new(project_id: ProjectId, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            priority: 0,
            project_id,
            deleted: false,
        }
    }
}

/// Partial todo for update requests
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TodoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
}

impl TodoPatch {
    pub fn deleted(deleted: bool) -> Self {
        Self {
            deleted: Some(deleted),
            ..Self::default()
        }
    }
}

/// Todo panel for the project currently opened on the board
#[derive(Debug, Clone)]
pub struct Checklist {
    pub project_id: ProjectId,
    todos: Vec<Todo>,
}

impl Checklist {
    pub fn new(project_id: ProjectId, todos: Vec<Todo>) -> Self {
        Self { project_id, todos }
    }

    /// Every todo the server returned, including soft-deleted ones
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Todos still shown in the panel, in insertion order
    pub fn active(&self) -> impl Iterator<Item = &Todo> {
        self.todos.iter().filter(|t| !t.deleted)
    }

    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    pub(crate) fn push(&mut self, todo: Todo) {
        self.todos.push(todo);
    }

    /// Replaces a todo in place, keeping its slot
    pub(crate) fn replace(&mut self, todo: Todo) {
        if let Some(slot) = self.todos.iter_mut().find(|t| t.id == todo.id) {
            *slot = todo;
        } else {
            self.todos.push(todo);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: i64, deleted: bool) -> Todo {
        Todo {
            id: TodoId::new(id),
            description: format!("todo {}", id),
            priority: 0,
            deleted,
            project_id: Some(ProjectId::new(1)),
        }
    }

    #[test]
    fn test_draft_body_shape() {
        let draft = TodoDraft::new(ProjectId::new(9), "write README");
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "description": "write README",
                "priority": 0,
                "project_id": 9,
                "deleted": false
            })
        );
    }

    #[test]
    fn test_todo_without_project() {
        let todo: Todo =
            serde_json::from_str(r#"{"id": 1, "description": "x", "project_id": null}"#).unwrap();
        assert_eq!(todo.project_id, None);
        assert!(!todo.deleted);
    }

    #[test]
    fn test_checklist_hides_deleted() {
        let list = Checklist::new(ProjectId::new(1), vec![todo(1, false), todo(2, true), todo(3, false)]);

        let ids: Vec<_> = list.active().map(|t| t.id.get()).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(list.active_count(), 2);
        assert_eq!(list.todos().len(), 3);
    }

    #[test]
    fn test_checklist_replace_keeps_slot() {
        let mut list = Checklist::new(ProjectId::new(1), vec![todo(1, false), todo(2, false)]);
        list.replace(todo(1, true));

        assert!(list.todos()[0].deleted);
        assert_eq!(list.todos()[1].id.get(), 2);
    }
}
