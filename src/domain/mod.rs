pub mod column;
pub mod project;
pub mod sorting;
pub mod todo;

pub use column::{Column, ColumnOrder};
pub use project::{Project, ProjectDraft, ProjectId};
pub use sorting::{column_order, group_by_column, sort_column};
pub use todo::{Checklist, Todo, TodoDraft, TodoId, TodoPatch};
