//! Shared builders for task unit tests.

use crate::task::domain::{PersistedTaskData, Task, TaskDetails, TaskId, TaskStatus};
use chrono::{DateTime, Local, NaiveDate, Utc};
use mockable::Clock;

/// Clock frozen at a fixed instant.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Parses a `YYYY-MM-DD` literal.
pub fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").expect("valid test date")
}

/// Builds a stored task with the given filterable fields.
pub fn task(
    id: &str,
    priority: &str,
    category: &str,
    start_date: &str,
    due_date: &str,
    status: TaskStatus,
) -> Task {
    Task::from_persisted(PersistedTaskData {
        id: TaskId::new(id).expect("valid task id"),
        details: TaskDetails::new("Prepare report", category, priority, Some("Quarterly"))
            .expect("valid task details"),
        start_date: date(start_date),
        due_date: date(due_date),
        status,
    })
}

/// Builds a `Category1` task with the given status, due on 2024-02-01.
pub fn task_with_status(status: TaskStatus) -> Task {
    task("7", "High", "Category1", "2024-01-01", "2024-02-01", status)
}
