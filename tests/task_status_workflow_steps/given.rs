//! Given steps for task status workflow BDD scenarios.

use super::world::{TaskWorkflowWorld, run_async, scenario_date};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskdesk::task::services::CreateTaskRequest;

#[given(r#"today is "{day}""#)]
fn today_is(world: &mut TaskWorkflowWorld, day: String) -> Result<(), eyre::Report> {
    world.today = scenario_date(&day)?;
    Ok(())
}

#[given(r#"a task "{title}" in category "{category}" with priority "{priority}" has been created"#)]
fn task_has_been_created(
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
    .wrap_err("create task in scenario setup")?;
    world.last_task = Some(created);
    Ok(())
}

#[given(r#"the task status has been changed to "{status}""#)]
fn task_status_has_been_changed(
    world: &mut TaskWorkflowWorld,
    status: String,
) -> Result<(), eyre::Report> {
    let task = world.current_task()?.clone();
    let service = world.service();
    let mut form = run_async(service.open_edit(task.id()))
        .wrap_err("open edit in scenario setup")?
        .form()
        .clone();
    form.status = status;
    let updated =
        run_async(service.submit_edit(&task, &form)).wrap_err("change status in scenario setup")?;
    world.last_task = Some(updated);
    Ok(())
}
