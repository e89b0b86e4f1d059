//! Command-line client for the task backend.
//!
//! Usage:
//!
//! ```text
//! taskdesk [--base-url URL] [--log-level LEVEL] <command>
//! ```
//!
//! Commands mirror the application's screens: `list` (with optional
//! filters), `show`, `create`, `edit` and `delete`. `delete` does nothing
//! unless `--yes` confirms it. When `--base-url` is absent the backend address
//! comes from `TASKDESK_BASE_URL`.

use clap::{Args, Parser, Subcommand};
use mockable::DefaultClock;
use std::io::{self, Write};
use std::sync::Arc;
use taskdesk::{
    config::ClientConfig,
    task::{
        adapters::http::HttpTaskRepository,
        domain::{EditTaskForm, FilterInputs, FormField, Task, TaskId},
        services::{CreateTaskRequest, DeleteOutcome, DeleteTaskRequest, TaskLifecycleService},
    },
};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

type Service = TaskLifecycleService<HttpTaskRepository, DefaultClock>;

#[derive(Debug, Error)]
enum CliError {
    #[error("invalid log level '{level}': {source}")]
    LogLevel {
        level: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
    #[error("failed to initialize logging: {0}")]
    LoggingInit(String),
    #[error("field '{0}' cannot be changed in the task's current status")]
    LockedField(&'static str),
}

#[derive(Parser, Debug)]
#[command(name = "taskdesk", version, about = "Track tasks against a REST backend")]
struct Cli {
    /// Backend base URL; overrides `TASKDESK_BASE_URL`.
    #[arg(long = "base-url", value_name = "URL")]
    base_url: Option<String>,
    /// Log filter directive.
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List tasks, optionally filtered.
    List(ListArgs),
    /// Show one task.
    Show {
        /// Task identifier.
        id: String,
    },
    /// Create a task opened today.
    Create(CreateArgs),
    /// Edit a task through the status workflow.
    Edit(EditArgs),
    /// Delete a task.
    Delete {
        /// Task identifier.
        id: String,
        /// Confirm the deletion.
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Case-insensitive priority substring.
    #[arg(long)]
    priority: Option<String>,
    /// Case-insensitive category substring.
    #[arg(long)]
    category: Option<String>,
    /// Earliest start date (YYYY-MM-DD).
    #[arg(long = "from", value_name = "DATE")]
    date_from: Option<String>,
    /// Latest due date (YYYY-MM-DD).
    #[arg(long = "to", value_name = "DATE")]
    date_to: Option<String>,
}

#[derive(Debug, Args)]
struct CreateArgs {
    #[arg(long)]
    title: String,
    /// One of Category1, Category2 or Category3.
    #[arg(long)]
    category: String,
    #[arg(long)]
    priority: String,
    #[arg(long)]
    description: Option<String>,
}

#[derive(Debug, Args)]
struct EditArgs {
    /// Task identifier.
    id: String,
    #[command(flatten)]
    fields: EditFields,
}

#[derive(Debug, Default, Args)]
struct EditFields {
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    priority: Option<String>,
    #[arg(long)]
    description: Option<String>,
    /// Target status: New, Completed or Resumed.
    #[arg(long)]
    status: Option<String>,
    /// Base due date (YYYY-MM-DD) before any deferral.
    #[arg(long = "due-date", value_name = "DATE")]
    due_date: Option<String>,
    /// Reason for deferring the due date.
    #[arg(long)]
    reason: Option<String>,
    /// Days to add to the due date; ignored without `--reason`.
    #[arg(long = "extra-days", value_name = "DAYS", allow_hyphen_values = true)]
    extra_days: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    let config = match cli.base_url.as_deref() {
        Some(base_url) => ClientConfig::new(base_url)?,
        None => ClientConfig::from_env()?,
    };
    info!(base_url = %config.base_url(), "using task backend");

    let repository = HttpTaskRepository::new(&config)?;
    let service = TaskLifecycleService::new(Arc::new(repository), Arc::new(DefaultClock));
    run(&service, cli.command).await
}

fn init_tracing(log_level: &str) -> Result<(), CliError> {
    let filter = EnvFilter::try_new(log_level).map_err(|source| CliError::LogLevel {
        level: log_level.to_owned(),
        source,
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| CliError::LoggingInit(err.to_string()))
}

async fn run(service: &Service, command: Command) -> Result<(), BoxError> {
    let mut out = io::stdout().lock();
    match command {
        Command::List(args) => {
            let inputs = FilterInputs {
                priority: args.priority.unwrap_or_default(),
                category: args.category.unwrap_or_default(),
                date_from: args.date_from.unwrap_or_default(),
                date_to: args.date_to.unwrap_or_default(),
            };
            for field in inputs.unparsable_date_inputs() {
                writeln!(out, "ignoring unparsable {field} filter")?;
            }
            for task in service.list(&inputs).await? {
                write_summary(&mut out, &task)?;
            }
        }
        Command::Show { id } => {
            let task = service.get(&TaskId::new(id)?).await?;
            write_detail(&mut out, &task)?;
        }
        Command::Create(args) => {
            let mut request = CreateTaskRequest::new(args.title, args.category, args.priority);
            if let Some(description) = args.description {
                request = request.with_description(description);
            }
            let task = service.create(request).await?;
            write_detail(&mut out, &task)?;
        }
        Command::Edit(args) => {
            let task = edit(service, args, &mut out).await?;
            write_detail(&mut out, &task)?;
        }
        Command::Delete { id, yes } => {
            let mut request = DeleteTaskRequest::new(TaskId::new(id)?);
            if yes {
                request = request.confirmed();
            }
            match service.delete(request).await? {
                DeleteOutcome::Deleted => writeln!(out, "deleted")?,
                DeleteOutcome::Cancelled => writeln!(out, "not deleted; pass --yes to confirm")?,
            }
        }
    }
    Ok(())
}

async fn edit(service: &Service, args: EditArgs, out: &mut impl Write) -> Result<Task, BoxError> {
    let session = service.open_edit(&TaskId::new(args.id)?).await?;
    let (task, mut form) = session.into_parts();
    if apply_edit_fields(&mut form, args.fields)? == ExtraDays::Disregarded {
        writeln!(out, "ignoring --extra-days: deferral needs --reason and an open status")?;
    }
    Ok(service.submit_edit(&task, &form).await?)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExtraDays {
    Kept,
    Disregarded,
}

/// Copies command-line overrides into the edit form.
///
/// Extra days entered while the reason is blank are cleared.
fn apply_edit_fields(form: &mut EditTaskForm, fields: EditFields) -> Result<ExtraDays, CliError> {
    if let Some(status) = fields.status {
        form.status = status;
    }
    if let Some(reason) = fields.reason {
        form.deferral_reason = reason;
    }
    if let Some(extra_days) = fields.extra_days {
        form.extra_days = extra_days;
    }

    let availability = form.availability();
    let overrides = [
        (FormField::Title, fields.title, &mut form.title),
        (FormField::Category, fields.category, &mut form.category),
        (FormField::Priority, fields.priority, &mut form.priority),
        (FormField::Description, fields.description, &mut form.description),
        (FormField::DueDate, fields.due_date, &mut form.due_date),
    ];
    for (field, value, slot) in overrides {
        let Some(replacement) = value else { continue };
        if !availability.is_enabled(field) {
            return Err(CliError::LockedField(field.as_str()));
        }
        *slot = replacement;
    }

    if form.extra_days.trim().is_empty() || availability.is_enabled(FormField::ExtraDays) {
        return Ok(ExtraDays::Kept);
    }
    form.extra_days.clear();
    Ok(ExtraDays::Disregarded)
}

fn write_summary(out: &mut impl Write, task: &Task) -> io::Result<()> {
    writeln!(
        out,
        "{id}\t{status}\t{due}\t{priority}\t{category}\t{title}",
        id = task.id(),
        status = task.status(),
        due = task.due_date(),
        priority = task.priority(),
        category = task.category(),
        title = task.title(),
    )
}

fn write_detail(out: &mut impl Write, task: &Task) -> io::Result<()> {
    writeln!(out, "id:          {}", task.id())?;
    writeln!(out, "title:       {}", task.title())?;
    writeln!(out, "category:    {}", task.category())?;
    writeln!(out, "priority:    {}", task.priority())?;
    writeln!(out, "description: {}", task.description())?;
    writeln!(out, "start date:  {}", task.start_date())?;
    writeln!(out, "due date:    {}", task.due_date())?;
    writeln!(out, "status:      {}", task.status())?;
    let next: Vec<&str> = task
        .status()
        .allowed_transitions()
        .iter()
        .map(|status| status.as_str())
        .collect();
    writeln!(out, "next:        {}", next.join(", "))
}
