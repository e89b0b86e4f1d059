//! In-memory integration tests for the list/create/edit/delete flows.

use super::helpers::{TestService, date, service};
use rstest::rstest;
use taskdesk::task::{
    domain::{FilterInputs, FormField, TaskDomainError, TaskStatus},
    services::{CreateTaskRequest, DeleteOutcome, DeleteTaskRequest, TaskLifecycleError},
};

#[rstest]
#[tokio::test]
async fn task_lifecycle_from_creation_to_resumption(service: TestService) {
    let created = service
        .create(CreateTaskRequest::new("Audit invoices", "Category1", "High"))
        .await
        .expect("task creation should succeed");
    assert_eq!(created.start_date(), date("2024-01-01"));
    assert_eq!(created.due_date(), date("2024-01-31"));

    let (task, mut form) = service
        .open_edit(created.id())
        .await
        .expect("edit session")
        .into_parts();
    form.status = "Completed".to_owned();
    assert_eq!(
        form.availability().enabled_fields().collect::<Vec<_>>(),
        vec![FormField::Status]
    );
    let completed = service
        .submit_edit(&task, &form)
        .await
        .expect("completion should succeed");
    assert_eq!(completed.status(), TaskStatus::Completed);

    let session = service.open_edit(created.id()).await.expect("edit session");
    assert_eq!(session.allowed_statuses(), [TaskStatus::Resumed]);
    let (task, mut form) = session.into_parts();
    form.status = "Resumed".to_owned();
    form.deferral_reason = "auditor asked for more detail".to_owned();
    form.extra_days = "10".to_owned();
    let resumed = service
        .submit_edit(&task, &form)
        .await
        .expect("resumption should succeed");

    assert_eq!(resumed.status(), TaskStatus::Resumed);
    assert_eq!(resumed.due_date(), date("2024-02-10"));
    assert_eq!(resumed.start_date(), created.start_date());
}

#[rstest]
#[tokio::test]
async fn completed_task_cannot_return_to_new(service: TestService) {
    let created = service
        .create(CreateTaskRequest::new("Audit invoices", "Category3", "Low"))
        .await
        .expect("create");
    let (task, mut form) = service.open_edit(created.id()).await.expect("open").into_parts();
    form.status = "Completed".to_owned();
    let completed = service.submit_edit(&task, &form).await.expect("complete");

    let (task, mut form) = service.open_edit(completed.id()).await.expect("open").into_parts();
    form.status = "New".to_owned();
    let result = service.submit_edit(&task, &form).await;

    assert!(matches!(
        result,
        Err(TaskLifecycleError::Domain(
            TaskDomainError::InvalidStateTransition { .. }
        ))
    ));
}

#[rstest]
#[tokio::test]
async fn list_filters_by_category_and_dates(service: TestService) {
    for (title, category) in [
        ("Short job", "Category2"),
        ("Long job", "Category1"),
        ("Medium job", "Category3"),
    ] {
        service
            .create(CreateTaskRequest::new(title, category, "Normal"))
            .await
            .expect("create");
    }

    let due_within_two_weeks = service
        .list(&FilterInputs {
            date_to: "2024-01-15".to_owned(),
            ..FilterInputs::default()
        })
        .await
        .expect("list");
    let by_category = service
        .list(&FilterInputs {
            category: "category1".to_owned(),
            ..FilterInputs::default()
        })
        .await
        .expect("list");

    let titles: Vec<_> = due_within_two_weeks.iter().map(|task| task.title()).collect();
    assert_eq!(titles, vec!["Short job", "Medium job"]);
    assert_eq!(by_category.len(), 1);
}

#[rstest]
#[tokio::test]
async fn delete_requires_confirmation(service: TestService) {
    let created = service
        .create(CreateTaskRequest::new("Audit invoices", "Category1", "High"))
        .await
        .expect("create");

    let cancelled = service
        .delete(DeleteTaskRequest::new(created.id().clone()))
        .await
        .expect("cancel");
    assert_eq!(cancelled, DeleteOutcome::Cancelled);
    assert_eq!(service.list_all().await.expect("list").len(), 1);

    let deleted = service
        .delete(DeleteTaskRequest::new(created.id().clone()).confirmed())
        .await
        .expect("delete");
    assert_eq!(deleted, DeleteOutcome::Deleted);
    assert!(service.list_all().await.expect("list").is_empty());

    let again = service
        .delete(DeleteTaskRequest::new(created.id().clone()).confirmed())
        .await;
    assert!(matches!(again, Err(ref err) if err.is_not_found()));
}
