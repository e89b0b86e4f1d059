//! Contract tests for the in-memory task repository.

use super::helpers::{date, repo};
use rstest::rstest;
use taskdesk::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{PersistedTaskData, Task, TaskDetails, TaskDraft, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
};

fn draft(title: &str) -> TaskDraft {
    let details =
        TaskDetails::new(title, "Category1", "Medium", None).expect("valid task details");
    TaskDraft::new(details, date("2024-01-01"))
}

#[rstest]
#[tokio::test]
async fn create_assigns_sequential_ids_and_lists_in_order(repo: InMemoryTaskRepository) {
    let first = repo.create(&draft("First")).await.expect("create first");
    let second = repo.create(&draft("Second")).await.expect("create second");

    let listed = repo.list_all().await.expect("list");

    assert_eq!(first.id().as_str(), "1");
    assert_eq!(second.id().as_str(), "2");
    assert_eq!(listed, vec![first, second]);
}

#[rstest]
#[tokio::test]
async fn ids_are_not_reused_after_delete(repo: InMemoryTaskRepository) {
    let first = repo.create(&draft("First")).await.expect("create first");
    repo.delete(first.id()).await.expect("delete first");

    let second = repo.create(&draft("Second")).await.expect("create second");

    assert_eq!(second.id().as_str(), "2");
}

#[rstest]
#[tokio::test]
async fn update_uses_the_path_identifier(repo: InMemoryTaskRepository) {
    let stored = repo.create(&draft("Stored")).await.expect("create");
    let other_id = TaskId::new("99").expect("valid id");
    let body = stored.clone().with_id(other_id);

    let updated = repo.update(stored.id(), &body).await.expect("update");

    assert_eq!(updated.id(), stored.id());
    assert_eq!(repo.find_by_id(stored.id()).await.expect("find"), updated);
}

#[rstest]
#[tokio::test]
async fn last_write_wins_for_concurrent_edits(repo: InMemoryTaskRepository) {
    let stored = repo.create(&draft("Stored")).await.expect("create");
    let first_edit = stored.clone();
    let second_edit = {
        let details = TaskDetails::new("Renamed", "Category2", "Low", None).expect("details");
        Task::from_persisted(PersistedTaskData {
            id: stored.id().clone(),
            details,
            start_date: stored.start_date(),
            due_date: stored.due_date(),
            status: stored.status(),
        })
    };

    repo.update(stored.id(), &first_edit).await.expect("first edit");
    repo.update(stored.id(), &second_edit).await.expect("second edit");

    let found = repo.find_by_id(stored.id()).await.expect("find");
    assert_eq!(found.title(), "Renamed");
}

#[rstest]
#[tokio::test]
async fn missing_ids_are_reported_as_not_found(repo: InMemoryTaskRepository) {
    let missing = TaskId::new("404").expect("valid id");
    let stored = repo.create(&draft("Stored")).await.expect("create");

    let find = repo.find_by_id(&missing).await;
    let update = repo.update(&missing, &stored).await;
    let delete = repo.delete(&missing).await;

    assert!(matches!(find, Err(TaskRepositoryError::NotFound(ref id)) if id == &missing));
    assert!(matches!(update, Err(TaskRepositoryError::NotFound(_))));
    assert!(matches!(delete, Err(TaskRepositoryError::NotFound(_))));
}
