use crate::{
    api::BoardApi,
    board::{
        drag::{HoveredCard, Placement},
        state::{Board, DropPlan},
    },
    domain::{Checklist, Column, Project, ProjectDraft, ProjectId, Todo, TodoDraft, TodoId, TodoPatch},
    error::{BoardError, Result},
};

/// How a committed drop ended up
#[derive(Debug)]
pub enum DropOutcome {
    /// The dragged project was gone; nothing happened
    Ignored,
    /// The drop did not change the layout; nothing was sent
    Unchanged,
    /// The server accepted the layout and its project list is now the board
    Confirmed,
    /// The server rejected the layout and the board was reloaded
    Resynced { cause: BoardError },
}

/// Owns the board and routes every change through the API
pub struct BoardSession<A> {
    api: A,
    board: Board,
    checklist: Option<Checklist>,
}

impl<A: BoardApi> BoardSession<A> {
    /// Creates an empty session; call [`load`](Self::load) to fill it
    pub fn new(api: A) -> Self {
        Self {
            api,
            board: Board::new(),
            checklist: None,
        }
    }

    /// Creates a session and loads the board
    pub async fn connect(api: A) -> Result<Self> {
        let mut session = Self::new(api);
        session.load().await?;
        Ok(session)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Replaces the cache with a fresh fetch of every project
    pub async fn load(&mut self) -> Result<()> {
        let projects = self.api.list_projects().await?;
        tracing::info!(count = projects.len(), "loaded board");
        self.board.replace_projects(projects);
        Ok(())
    }

    pub fn begin_drag(&mut self, id: ProjectId) {
        self.board.begin_drag(id);
    }

    pub fn update_drag_target(&mut self, column: Column, hovered: Option<HoveredCard>, pointer_y: f64) {
        self.board.update_drag_target(column, hovered, pointer_y);
    }

    pub fn set_drag_target(&mut self, column: Column, card: Option<ProjectId>, placement: Placement) {
        self.board.set_drag_target(column, card, placement);
    }

    pub fn clear_drag(&mut self) {
        self.board.clear_drag();
    }

    /// Drops a project into a column.
    ///
    /// The new layout is applied locally before the reorder request goes
    /// out. The server's answer then replaces the board; if the request
    /// fails the board is reloaded from scratch. An error is returned only
    /// when that reload fails too, in which case the board is marked stale.
    pub async fn commit_drop(&mut self, column: Column, dragged: ProjectId) -> Result<DropOutcome> {
        let order = match self.board.apply_drop(column, dragged) {
            DropPlan::Ignored => {
                tracing::debug!(project = %dragged, "drop for unknown project ignored");
                return Ok(DropOutcome::Ignored);
            }
            DropPlan::Unchanged => return Ok(DropOutcome::Unchanged),
            DropPlan::Apply(order) => order,
        };

        let cause = match self.api.reorder(&order).await {
            Ok(projects) => {
                self.board.replace_projects(projects);
                return Ok(DropOutcome::Confirmed);
            }
            Err(e) => e,
        };

        tracing::warn!(error = %cause, "reorder rejected, reloading board");
        match self.api.list_projects().await {
            Ok(projects) => {
                tracing::info!(count = projects.len(), "board resynced");
                self.board.replace_projects(projects);
                Ok(DropOutcome::Resynced { cause })
            }
            Err(reload) => {
                tracing::error!(error = %reload, "board resync failed");
                self.board.mark_stale();
                Err(BoardError::ResyncFailed {
                    reorder: Box::new(cause),
                    reload: Box::new(reload),
                })
            }
        }
    }

    pub async fn create_project(&mut self, draft: &ProjectDraft) -> Result<Project> {
        let project = self.api.create_project(draft).await?;
        self.board.upsert(project.clone());
        Ok(project)
    }

    pub async fn update_project(&mut self, id: ProjectId, draft: &ProjectDraft) -> Result<Project> {
        let project = self.api.update_project(id, draft).await?;
        self.board.upsert(project.clone());
        Ok(project)
    }

    pub async fn delete_project(&mut self, id: ProjectId) -> Result<()> {
        self.api.delete_project(id).await?;
        self.board.remove(id);
        if self.checklist.as_ref().map(|c| c.project_id) == Some(id) {
            self.checklist = None;
        }
        Ok(())
    }

    /// Moves a project to a column without touching its position
    pub async fn set_status(&mut self, id: ProjectId, column: Column) -> Result<Project> {
        let project = self.api.patch_status(id, column.as_str()).await?;
        self.board.upsert(project.clone());
        Ok(project)
    }

    pub async fn set_priority(&mut self, id: ProjectId, priority: i64) -> Result<Project> {
        let project = self.api.patch_priority(id, priority).await?;
        self.board.upsert(project.clone());
        Ok(project)
    }

    /// Opens the todo panel of a project, fetching project and todos together.
    ///
    /// Returns `None` when the server no longer has the project.
    pub async fn open_project(&mut self, id: ProjectId) -> Result<Option<&Checklist>> {
        let (project, todos) = tokio::try_join!(self.api.get_project(id), self.api.list_todos(id))?;

        let Some(project) = project else {
            self.board.remove(id);
            self.checklist = None;
            return Ok(None);
        };

        self.board.upsert(project);
        self.checklist = Some(Checklist::new(id, todos));
        Ok(self.checklist.as_ref())
    }

    pub fn checklist(&self) -> Option<&Checklist> {
        self.checklist.as_ref()
    }

    pub fn close_project(&mut self) {
        self.checklist = None;
    }

    /// Todos of the open project that are not soft-deleted
    pub fn active_todos(&self) -> Vec<&Todo> {
        self.checklist
            .as_ref()
            .map(|c| c.active().collect())
            .unwrap_or_default()
    }

    /// Adds a todo to the open project
    pub async fn add_todo(&mut self, description: &str) -> Result<Todo> {
        let project_id = self.open_project_id()?;
        let description = description.trim();
        if description.is_empty() {
            return Err(BoardError::Validation("Todo description is required".to_string()));
        }

        let todo = self
            .api
            .create_todo(&TodoDraft::new(project_id, description))
            .await?;
        if let Some(list) = self.checklist.as_mut() {
            list.push(todo.clone());
        }
        Ok(todo)
    }

    /// Flips the soft-delete flag of a todo
    pub async fn toggle_todo(&mut self, id: TodoId) -> Result<Todo> {
        let deleted = self.find_todo(id)?.deleted;
        self.patch_todo(id, TodoPatch::deleted(!deleted)).await
    }

    /// Soft-deletes a todo; it disappears from the active list
    pub async fn remove_todo(&mut self, id: TodoId) -> Result<Todo> {
        self.find_todo(id)?;
        self.patch_todo(id, TodoPatch::deleted(true)).await
    }

    async fn patch_todo(&mut self, id: TodoId, patch: TodoPatch) -> Result<Todo> {
        let todo = self.api.update_todo(id, &patch).await?;
        if let Some(list) = self.checklist.as_mut() {
            list.replace(todo.clone());
        }
        Ok(todo)
    }

    fn open_project_id(&self) -> Result<ProjectId> {
        self.checklist
            .as_ref()
            .map(|c| c.project_id)
            .ok_or(BoardError::NoOpenProject)
    }

    fn find_todo(&self, id: TodoId) -> Result<&Todo> {
        let list = self.checklist.as_ref().ok_or(BoardError::NoOpenProject)?;
        list.get(id).ok_or(BoardError::TodoNotFound(id))
    }
}
