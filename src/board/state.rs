use crate::{
    board::drag::{DragTarget, HoveredCard, Placement},
    domain::{sorting, Column, ColumnOrder, Project, ProjectId},
};
use chrono::{DateTime, Utc};

/// Result of the local half of a drop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropPlan {
    /// The dragged project is no longer on the board
    Ignored,
    /// The drop leaves every column as it was
    Unchanged,
    /// New layout, already applied to the board
    Apply(ColumnOrder),
}

/// Local cache of the board plus the in-progress drag gesture
#[derive(Debug, Clone, Default)]
pub struct Board {
    projects: Vec<Project>,
    dragged: Option<ProjectId>,
    drag_target: Option<DragTarget>,
    synced_at: Option<DateTime<Utc>>,
    stale: bool,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from an authoritative project list
    pub fn from_projects(projects: Vec<Project>) -> Self {
        let mut board = Self::new();
        board.replace_projects(projects);
        board
    }

    /// All projects in the order the server returned them
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Every column with its projects in display order
    pub fn columns(&self) -> Vec<(Column, Vec<&Project>)> {
        sorting::group_by_column(&self.projects)
    }

    pub fn column(&self, column: Column) -> Vec<&Project> {
        self.columns()
            .into_iter()
            .find(|(c, _)| *c == column)
            .map(|(_, members)| members)
            .unwrap_or_default()
    }

    /// Current layout as ids per column
    pub fn layout(&self) -> ColumnOrder {
        sorting::column_order(&self.projects)
    }

    pub fn dragged(&self) -> Option<ProjectId> {
        self.dragged
    }

    pub fn drag_target(&self) -> Option<DragTarget> {
        self.drag_target
    }

    /// When the cache last matched the server
    pub fn synced_at(&self) -> Option<DateTime<Utc>> {
        self.synced_at
    }

    /// True when an optimistic change could not be reconciled or reloaded
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Starts dragging a project, replacing any drag already in progress
    pub fn begin_drag(&mut self, id: ProjectId) {
        self.dragged = Some(id);
        self.drag_target = None;
    }

    /// Records the insertion point under the pointer.
    ///
    /// With a card hovered, the pointer's position against the card's
    /// vertical midpoint picks before or after. Without one the project
    /// would be appended to the column.
    pub fn update_drag_target(&mut self, column: Column, hovered: Option<HoveredCard>, pointer_y: f64) {
        let target = match hovered {
            Some(card) => DragTarget::at_card(column, card.id, card.bounds.placement_for(pointer_y)),
            None => DragTarget::end_of(column),
        };
        self.set_target(target);
    }

    /// Records an insertion point computed by the caller
    pub fn set_drag_target(&mut self, column: Column, card: Option<ProjectId>, placement: Placement) {
        self.set_target(DragTarget {
            column,
            card,
            placement,
        });
    }

    fn set_target(&mut self, target: DragTarget) {
        if self.dragged.is_none() {
            return;
        }
        self.drag_target = Some(target);
    }

    pub fn clear_drag(&mut self) {
        self.dragged = None;
        self.drag_target = None;
    }

    /// Computes the layout a drop would produce without touching the board
    pub fn plan_drop(&self, column: Column, dragged: ProjectId) -> DropPlan {
        if self.project(dragged).is_none() {
            return DropPlan::Ignored;
        }

        let current = self.layout();
        let mut order = ColumnOrder::new();
        for (c, ids) in current.iter() {
            order
                .column_mut(c)
                .extend(ids.iter().copied().filter(|id| *id != dragged));
        }

        let index = self.insertion_index(&current, &order, column, dragged);
        order.column_mut(column).insert(index, dragged);

        if order == current {
            DropPlan::Unchanged
        } else {
            DropPlan::Apply(order)
        }
    }

    fn insertion_index(
        &self,
        current: &ColumnOrder,
        remaining: &ColumnOrder,
        column: Column,
        dragged: ProjectId,
    ) -> usize {
        let list = remaining.column(column);
        let target = match self.drag_target {
            Some(target) if target.column == column => target,
            _ => return list.len(),
        };

        match target.card {
            // Dropped onto itself: stay put if it was already in this column
            Some(card) if card == dragged => current
                .locate(dragged)
                .filter(|(c, _)| *c == column)
                .map(|(_, idx)| idx)
                .unwrap_or(list.len()),
            Some(card) => match list.iter().position(|id| *id == card) {
                Some(idx) => match target.placement {
                    Placement::Before => idx,
                    Placement::After => idx + 1,
                },
                None => list.len(),
            },
            None => list.len(),
        }
    }

    /// Local half of a drop: plans it, applies the new layout and ends the
    /// drag. Always succeeds.
    pub fn apply_drop(&mut self, column: Column, dragged: ProjectId) -> DropPlan {
        let plan = self.plan_drop(column, dragged);
        if let DropPlan::Apply(order) = &plan {
            self.apply_order(order);
            tracing::debug!(project = %dragged, column = column.as_str(), "applied drop locally");
        }
        self.clear_drag();
        plan
    }

    /// Rewrites status and position of every project from a layout
    pub fn apply_order(&mut self, order: &ColumnOrder) {
        for (column, ids) in order.iter() {
            for (idx, id) in ids.iter().enumerate() {
                if let Some(project) = self.projects.iter_mut().find(|p| p.id == *id) {
                    project.place(column, idx);
                }
            }
        }
    }

    /// Swaps in an authoritative snapshot from the server
    pub(crate) fn replace_projects(&mut self, projects: Vec<Project>) {
        self.projects = projects;
        self.synced_at = Some(Utc::now());
        self.stale = false;
    }

    /// Inserts or replaces a single project the server returned
    pub(crate) fn upsert(&mut self, project: Project) {
        match self.projects.iter_mut().find(|p| p.id == project.id) {
            Some(slot) => *slot = project,
            None => self.projects.push(project),
        }
    }

    pub(crate) fn remove(&mut self, id: ProjectId) -> Option<Project> {
        let idx = self.projects.iter().position(|p| p.id == id)?;
        if self.dragged == Some(id) {
            self.clear_drag();
        }
        Some(self.projects.remove(idx))
    }

    pub(crate) fn mark_stale(&mut self) {
        self.stale = true;
    }
}
