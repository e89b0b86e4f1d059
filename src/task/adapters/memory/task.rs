//! In-memory task repository for tests and offline demos.

use async_trait::async_trait;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{Task, TaskDraft, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Identifiers are assigned sequentially starting at `1`, and tasks are listed
/// in insertion order, mirroring a simple REST backend.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: Vec<Task>,
    last_id: u64,
}

impl InMemoryTaskState {
    fn position(&self, id: &TaskId) -> TaskRepositoryResult<usize> {
        self.tasks
            .iter()
            .position(|task| task.id() == id)
            .ok_or_else(|| TaskRepositoryError::NotFound(id.clone()))
    }
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state
            .read()
            .map_err(|err| TaskRepositoryError::transport(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state
            .write()
            .map_err(|err| TaskRepositoryError::transport(std::io::Error::other(err.to_string())))
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        Ok(self.read()?.tasks.clone())
    }

    async fn find_by_id(&self, id: &TaskId) -> TaskRepositoryResult<Task> {
        let state = self.read()?;
        let index = state.position(id)?;
        state
            .tasks
            .get(index)
            .cloned()
            .ok_or_else(|| TaskRepositoryError::NotFound(id.clone()))
    }

    async fn create(&self, draft: &TaskDraft) -> TaskRepositoryResult<Task> {
        let mut state = self.write()?;
        state.last_id += 1;
        let id = TaskId::new(state.last_id.to_string()).map_err(TaskRepositoryError::transport)?;
        let task = draft.clone().into_task(id);
        state.tasks.push(task.clone());
        Ok(task)
    }

    async fn update(&self, id: &TaskId, task: &Task) -> TaskRepositoryResult<Task> {
        let mut state = self.write()?;
        let index = state.position(id)?;
        let stored = task.clone().with_id(id.clone());
        let slot = state
            .tasks
            .get_mut(index)
            .ok_or_else(|| TaskRepositoryError::NotFound(id.clone()))?;
        *slot = stored.clone();
        Ok(stored)
    }

    async fn delete(&self, id: &TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        let index = state.position(id)?;
        state.tasks.remove(index);
        Ok(())
    }
}
