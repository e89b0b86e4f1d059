//! Repository port for task records held by a remote backend.

use crate::task::domain::{Task, TaskDraft, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Every operation may fail with [`TaskRepositoryError::Transport`]. Callers
/// treat such failures as opaque and do not retry them.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Lists every stored task in backend order.
    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Fetches a single task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn find_by_id(&self, id: &TaskId) -> TaskRepositoryResult<Task>;

    /// Stores a new task; the repository assigns its identifier.
    async fn create(&self, draft: &TaskDraft) -> TaskRepositoryResult<Task>;

    /// Replaces a stored task. The last write wins.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn update(&self, id: &TaskId, task: &Task) -> TaskRepositoryResult<Task>;

    /// Deletes a stored task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn delete(&self, id: &TaskId) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Network or backend failure.
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Returns `true` for [`TaskRepositoryError::NotFound`].
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
