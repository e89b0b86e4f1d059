//! Then steps for task status workflow BDD scenarios.

use super::world::{TaskWorkflowWorld, run_async, scenario_date};
use rstest_bdd_macros::then;
use taskdesk::task::{
    domain::{FormField, TaskDomainError, TaskStatus, field_availability},
    services::TaskLifecycleError,
};

fn expected_status(status: &str) -> Result<TaskStatus, eyre::Report> {
    TaskStatus::try_from(status).map_err(|err| eyre::eyre!("invalid expected status: {err}"))
}

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskWorkflowWorld, status: String) -> Result<(), eyre::Report> {
    let expected = expected_status(&status)?;
    let task = world.current_task()?;
    if task.status() != expected {
        return Err(eyre::eyre!(
            "expected status {}, found {}",
            expected.as_str(),
            task.status().as_str()
        ));
    }
    Ok(())
}

#[then(r#"the task due date is "{day}""#)]
fn task_due_date_is(world: &TaskWorkflowWorld, day: String) -> Result<(), eyre::Report> {
    let expected = scenario_date(&day)?;
    let task = world.current_task()?;
    if task.due_date() != expected {
        return Err(eyre::eyre!(
            "expected due date {expected}, found {}",
            task.due_date()
        ));
    }
    Ok(())
}

#[then("only the status field is editable")]
fn only_status_editable(world: &TaskWorkflowWorld) -> Result<(), eyre::Report> {
    let availability = field_availability(world.current_task()?.status());
    let enabled: Vec<FormField> = availability.enabled_fields().collect();
    if enabled != [FormField::Status] {
        return Err(eyre::eyre!("expected only status to be editable, got {enabled:?}"));
    }
    Ok(())
}

#[then("the edit fails with an invalid status transition error")]
fn edit_fails_with_invalid_transition(world: &TaskWorkflowWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_edit_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing edit result"))?;

    if !matches!(
        result,
        Err(TaskLifecycleError::Domain(
            TaskDomainError::InvalidStateTransition { .. }
        ))
    ) {
        return Err(eyre::eyre!(
            "expected InvalidStateTransition error, got {result:?}"
        ));
    }
    Ok(())
}

#[then(r#"the stored task status is "{status}""#)]
fn stored_task_status_is(world: &TaskWorkflowWorld, status: String) -> Result<(), eyre::Report> {
    let expected = expected_status(&status)?;
    let id = world.current_task()?.id().clone();
    let stored = run_async(world.service().get(&id))?;
    if stored.status() != expected {
        return Err(eyre::eyre!(
            "expected stored status {}, found {}",
            expected.as_str(),
            stored.status().as_str()
        ));
    }
    Ok(())
}
