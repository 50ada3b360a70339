use crate::domain::project::ProjectId;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt};

/// Canonical kanban column a project lives in
///
/// Declaration order is the board's left-to-right display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    Abandoned,
    Backlog,
    Active,
    Completed,
}

impl Column {
    pub const ALL: [Column; 4] = [
        Column::Abandoned,
        Column::Backlog,
        Column::Active,
        Column::Completed,
    ];

    /// Maps a free-text server status onto a column.
    ///
    /// Never fails: anything unrecognized lands in the backlog.
    pub fn normalize(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "done" | "completed" | "finished" => Self::Completed,
            "abandoned" | "archived" => Self::Abandoned,
            "backlog" | "ready" | "paused" => Self::Backlog,
            "active" | "in_progress" | "in-progress" => Self::Active,
            _ => Self::Backlog,
        }
    }

    /// Wire name, as written back into a project's `status`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Abandoned => "abandoned",
            Self::Backlog => "backlog",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Abandoned => "Abandoned",
            Self::Backlog => "Backlog",
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }
}

impl From<&str> for Column {
    fn from(raw: &str) -> Self {
        Self::normalize(raw)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Full board layout: every column mapped to its ordered project ids.
///
/// This is also the body of the reorder request, e.g.
/// `{"abandoned":[],"backlog":[3],"active":[2,1],"completed":[]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnOrder(BTreeMap<Column, Vec<ProjectId>>);

impl ColumnOrder {
    /// Creates a layout with every column present and empty
    pub fn new() -> Self {
        Self(Column::ALL.iter().map(|c| (*c, Vec::new())).collect())
    }

    pub fn column(&self, column: Column) -> &[ProjectId] {
        self.0.get(&column).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn column_mut(&mut self, column: Column) -> &mut Vec<ProjectId> {
        self.0.entry(column).or_default()
    }

    /// Column and index of a project, if it is placed anywhere
    pub fn locate(&self, id: ProjectId) -> Option<(Column, usize)> {
        self.0.iter().find_map(|(column, ids)| {
            ids.iter().position(|p| *p == id).map(|idx| (*column, idx))
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (Column, &[ProjectId])> {
        self.0.iter().map(|(c, ids)| (*c, ids.as_slice()))
    }

    /// Total number of placed ids across all columns
    pub fn len(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ColumnOrder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_canonical_names() {
        for column in Column::ALL {
            assert_eq!(Column::normalize(column.as_str()), column);
        }
    }

    #[test]
    fn test_normalize_aliases() {
        assert_eq!(Column::normalize("done"), Column::Completed);
        assert_eq!(Column::normalize("finished"), Column::Completed);
        assert_eq!(Column::normalize("archived"), Column::Abandoned);
        assert_eq!(Column::normalize("ready"), Column::Backlog);
        assert_eq!(Column::normalize("paused"), Column::Backlog);
        assert_eq!(Column::normalize("in_progress"), Column::Active);
        assert_eq!(Column::normalize("in-progress"), Column::Active);
    }

    #[test]
    fn test_normalize_case_and_whitespace() {
        assert_eq!(Column::normalize("  Done "), Column::Completed);
        assert_eq!(Column::normalize("ACTIVE"), Column::Active);
        assert_eq!(Column::normalize("\tIn_Progress\n"), Column::Active);
    }

    #[test]
    fn test_normalize_unknown_defaults_to_backlog() {
        assert_eq!(Column::normalize("foobar"), Column::Backlog);
        assert_eq!(Column::normalize(""), Column::Backlog);
        assert_eq!(Column::normalize("in progress"), Column::Backlog);
    }

    #[test]
    fn test_display_order_and_labels() {
        let labels: Vec<_> = Column::ALL.iter().map(|c| c.to_string()).collect();
        assert_eq!(labels, vec!["Abandoned", "Backlog", "Active", "Completed"]);
        assert!(Column::Abandoned < Column::Completed);
    }

    #[test]
    fn test_column_order_serializes_as_map() {
        let mut order = ColumnOrder::new();
        order.column_mut(Column::Active).extend([ProjectId::new(2), ProjectId::new(1)]);
        order.column_mut(Column::Backlog).push(ProjectId::new(3));

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "abandoned": [],
                "backlog": [3],
                "active": [2, 1],
                "completed": []
            })
        );
    }

    #[test]
    fn test_column_order_locate() {
        let mut order = ColumnOrder::new();
        order.column_mut(Column::Completed).extend([ProjectId::new(7), ProjectId::new(9)]);

        assert_eq!(order.locate(ProjectId::new(9)), Some((Column::Completed, 1)));
        assert_eq!(order.locate(ProjectId::new(1)), None);
        assert_eq!(order.len(), 2);
    }
}
