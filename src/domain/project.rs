use crate::domain::column::Column;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Server-assigned identifier of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(i64);

impl ProjectId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl FromStr for ProjectId {
    type Err = crate::error::BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| crate::error::BoardError::InvalidProjectId(s.to_string()))
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A side-project tracked on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub file: String,
    #[serde(default)]
    pub priority: i64,
    /// Raw status as the server reports it
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub language: String,
    /// Rank within the column; older records only carry a priority
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
}

impl Project {
    pub fn new(id: ProjectId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            path: String::new(),
            file: String::new(),
            priority: 0,
            status: Column::Backlog.as_str().to_string(),
            language: String::new(),
            position: None,
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn with_position(mut self, position: i64) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Column this project is displayed in
    pub fn column(&self) -> Column {
        Column::normalize(&self.status)
    }

    /// Moves the project to a slot, rewriting status to the canonical name
    pub fn place(&mut self, column: Column, position: usize) {
        self.status = column.as_str().to_string();
        self.position = Some(position as i64);
    }
}

/// Partial project used for create and update requests.
///
/// Unset fields are left out of the request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl ProjectDraft {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_id_parsing() {
        let id: ProjectId = " 42 ".parse().unwrap();
        assert_eq!(id.get(), 42);
        assert_eq!(id.to_string(), "42");
        assert!(matches!(
            "HLA1".parse::<ProjectId>(),
            Err(crate::error::BoardError::InvalidProjectId(raw)) if raw == "HLA1"
        ));
    }

    #[test]
    fn test_project_deserializes_sparse_record() {
        let project: Project =
            serde_json::from_str(r#"{"id": 3, "name": "dotfiles", "status": "Done", "priority": 2}"#)
                .unwrap();

        assert_eq!(project.id, ProjectId::new(3));
        assert_eq!(project.column(), Column::Completed);
        assert_eq!(project.position, None);
        assert!(project.language.is_empty());
    }

    #[test]
    fn test_place_rewrites_status() {
        let mut project = Project::new(ProjectId::new(1), "p").with_status("in_progress");
        project.place(Column::Completed, 4);

        assert_eq!(project.status, "completed");
        assert_eq!(project.position, Some(4));
    }

    #[test]
    fn test_draft_omits_unset_fields() {
        let draft = ProjectDraft::named("raytracer").priority(3);
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json, serde_json::json!({"name": "raytracer", "priority": 3}));
    }
}
