//! When steps for task status workflow BDD scenarios.

use super::world::{TaskWorkflowWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use taskdesk::task::services::CreateTaskRequest;

#[when(r#"a task "{title}" in category "{category}" with priority "{priority}" is created"#)]
fn create_task(
    world: &mut TaskWorkflowWorld,
    title: String,
    category: String,
    priority: String,
) -> Result<(), eyre::Report> {
    let created = run_async(
        world
            .service()
            .create(CreateTaskRequest::new(title, category, priority)),
    )
    .wrap_err("create task")?;
    world.last_task = Some(created);
    Ok(())
}

#[when(r#"the task status is changed to "{status}""#)]
fn change_status(world: &mut TaskWorkflowWorld, status: String) -> Result<(), eyre::Report> {
    submit(world, status, String::new(), String::new())
}

#[when(r#"the task is resumed with reason "{reason}" and {extra_days:u32} extra days"#)]
fn resume_with_reason(
    world: &mut TaskWorkflowWorld,
    reason: String,
    extra_days: u32,
) -> Result<(), eyre::Report> {
    submit(world, "Resumed".to_owned(), reason, extra_days.to_string())
}

#[when("the task is resumed with {extra_days:u32} extra days and no reason")]
fn resume_without_reason(
    world: &mut TaskWorkflowWorld,
    extra_days: u32,
) -> Result<(), eyre::Report> {
    submit(world, "Resumed".to_owned(), String::new(), extra_days.to_string())
}

fn submit(
    world: &mut TaskWorkflowWorld,
    status: String,
    deferral_reason: String,
    extra_days: String,
) -> Result<(), eyre::Report> {
    let task = world.current_task()?.clone();
    let service = world.service();
    let mut form = run_async(service.open_edit(task.id()))
        .wrap_err("open edit session")?
        .form()
        .clone();
    form.status = status;
    form.deferral_reason = deferral_reason;
    form.extra_days = extra_days;

    let result = run_async(service.submit_edit(&task, &form));
    if let Ok(ref updated) = result {
        world.last_task = Some(updated.clone());
    }
    world.last_edit_result = Some(result);
    Ok(())
}
