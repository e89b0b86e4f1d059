//! Service layer for listing, creating, editing and deleting tasks.
//!
//! Each flow validates locally with the domain engines before touching the
//! repository, so a validation failure never issues a request. Every failure
//! is logged before it is returned to the caller.

use crate::task::{
    domain::{
        EditTaskForm, FieldAvailability, FilterInputs, Task, TaskDetails, TaskDomainError,
        TaskDraft, TaskId, TaskStatus, plan_edit,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    category: String,
    priority: String,
    description: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        priority: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            priority: priority.into(),
            description: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Request payload for deleting a task.
///
/// Deletion cannot be undone, so the request only takes effect once the user
/// has confirmed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTaskRequest {
    id: TaskId,
    confirmed: bool,
}

impl DeleteTaskRequest {
    /// Creates an unconfirmed delete request.
    #[must_use]
    pub const fn new(id: TaskId) -> Self {
        Self {
            id,
            confirmed: false,
        }
    }

    /// Marks the request as confirmed by the user.
    #[must_use]
    pub const fn confirmed(mut self) -> Self {
        self.confirmed = true;
        self
    }
}

/// Result of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The task was deleted.
    Deleted,
    /// The user did not confirm; nothing was sent.
    Cancelled,
}

/// Edit screen state for a freshly loaded task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    task: Task,
    form: EditTaskForm,
}

impl EditSession {
    /// Opens an edit session for a stored task.
    #[must_use]
    pub fn new(task: Task) -> Self {
        let form = EditTaskForm::from_task(&task);
        Self { task, form }
    }

    /// Returns the stored task being edited.
    #[must_use]
    pub const fn task(&self) -> &Task {
        &self.task
    }

    /// Returns the seeded form.
    #[must_use]
    pub const fn form(&self) -> &EditTaskForm {
        &self.form
    }

    /// Consumes the session, returning the task and form.
    #[must_use]
    pub fn into_parts(self) -> (Task, EditTaskForm) {
        (self.task, self.form)
    }

    /// Statuses the stored task may move to.
    #[must_use]
    pub fn allowed_statuses(&self) -> &'static [TaskStatus] {
        self.task.status().allowed_transitions()
    }

    /// Fields editable in the seeded form.
    #[must_use]
    pub fn availability(&self) -> FieldAvailability {
        self.form.availability()
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Local validation failed; no request was sent.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

impl TaskLifecycleError {
    /// Returns `true` for local validation failures.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Domain(_))
    }

    /// Returns `true` when the addressed task does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Repository(TaskRepositoryError::NotFound(_)))
    }

    /// Returns `true` for network or backend failures.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Repository(TaskRepositoryError::Transport(_)))
    }
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
#[derive(Clone)]
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Lists every task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when listing fails.
    pub async fn list_all(&self) -> TaskLifecycleResult<Vec<Task>> {
        let tasks = self
            .repository
            .list_all()
            .await
            .inspect_err(|err| warn!(error = %err, "listing tasks failed"))?;
        Ok(tasks)
    }

    /// Lists the tasks matching the filter inputs, in backend order.
    ///
    /// Date inputs that do not parse impose no constraint.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when listing fails.
    pub async fn list(&self, inputs: &FilterInputs) -> TaskLifecycleResult<Vec<Task>> {
        for field in inputs.unparsable_date_inputs() {
            warn!(field, "ignoring unparsable date filter");
        }
        let criteria = inputs.to_criteria();
        let tasks = self.list_all().await?;
        Ok(criteria.apply(&tasks))
    }

    /// Fetches a single task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] with
    /// [`TaskRepositoryError::NotFound`] for unknown identifiers.
    pub async fn get(&self, id: &TaskId) -> TaskLifecycleResult<Task> {
        let task = self
            .repository
            .find_by_id(id)
            .await
            .inspect_err(|err| warn!(task_id = %id, error = %err, "loading task failed"))?;
        Ok(task)
    }

    /// Creates a task opened today with its category's default due date.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when the input is invalid and
    /// [`TaskLifecycleError::Repository`] when the backend rejects creation.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let details = TaskDetails::new(
            &request.title,
            &request.category,
            &request.priority,
            request.description.as_deref(),
        )
        .inspect_err(|err| warn!(error = %err, "rejected task creation"))?;

        let created_on = self.clock.utc().date_naive();
        let draft = TaskDraft::new(details, created_on);
        let task = self
            .repository
            .create(&draft)
            .await
            .inspect_err(|err| warn!(error = %err, "creating task failed"))?;
        info!(task_id = %task.id(), due_date = %task.due_date(), "created task");
        Ok(task)
    }

    /// Loads a task into an edit session.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the task cannot be
    /// loaded.
    pub async fn open_edit(&self, id: &TaskId) -> TaskLifecycleResult<EditSession> {
        let task = self.get(id).await?;
        Ok(EditSession::new(task))
    }

    /// Submits an edit form for a stored task.
    ///
    /// On failure the stored record is untouched and the form may be
    /// resubmitted. Concurrent edits are not detected: the last write wins.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when [`plan_edit`] rejects the
    /// form and [`TaskLifecycleError::Repository`] when the update fails.
    pub async fn submit_edit(
        &self,
        current: &Task,
        form: &EditTaskForm,
    ) -> TaskLifecycleResult<Task> {
        let planned = plan_edit(current, form).inspect_err(
            |err| warn!(task_id = %current.id(), error = %err, "rejected task edit"),
        )?;
        let updated = self
            .repository
            .update(current.id(), &planned)
            .await
            .inspect_err(
                |err| warn!(task_id = %current.id(), error = %err, "updating task failed"),
            )?;
        info!(
            task_id = %updated.id(),
            status = %updated.status(),
            due_date = %updated.due_date(),
            "updated task"
        );
        Ok(updated)
    }

    /// Deletes a task once the request has been confirmed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] with
    /// [`TaskRepositoryError::NotFound`] for unknown identifiers.
    pub async fn delete(&self, request: DeleteTaskRequest) -> TaskLifecycleResult<DeleteOutcome> {
        if !request.confirmed {
            info!(task_id = %request.id, "task deletion cancelled");
            return Ok(DeleteOutcome::Cancelled);
        }
        self.repository
            .delete(&request.id)
            .await
            .inspect_err(|err| warn!(task_id = %request.id, error = %err, "deleting task failed"))?;
        info!(task_id = %request.id, "deleted task");
        Ok(DeleteOutcome::Deleted)
    }
}
