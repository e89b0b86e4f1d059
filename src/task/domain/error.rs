//! Error types for task domain validation and parsing.

use super::{TaskId, TaskStatus};
use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned while validating task input or applying workflow rules.
///
/// Every variant is a local validation failure: the submission is blocked and
/// no repository request is issued.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task identifier is empty after trimming.
    #[error("task identifier must not be empty")]
    EmptyTaskId,

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// No category was selected.
    #[error("task category must be selected")]
    MissingCategory,

    /// The category is not one of the supported values.
    #[error("unknown task category: {0}")]
    UnknownCategory(String),

    /// The priority is empty after trimming.
    #[error("task priority must not be empty")]
    EmptyPriority,

    /// The description exceeds the maximum length.
    #[error("task description is {length} characters long, maximum is {max}")]
    DescriptionTooLong {
        /// Submitted description length in characters.
        length: usize,
        /// Maximum accepted length in characters.
        max: usize,
    },

    /// The due date input is empty.
    #[error("task due date must not be empty")]
    MissingDueDate,

    /// A date input is not a valid calendar date.
    #[error("invalid calendar date: {0}")]
    InvalidDate(String),

    /// The status input is not a known status.
    #[error("unknown task status: {0}")]
    UnknownStatus(String),

    /// A deferral asked for a negative number of days.
    #[error("deferral must extend the due date, got {0} days")]
    NegativeDeferral(i64),

    /// An edit moved the due date earlier than the stored one.
    #[error("due date cannot move from {from} back to {to}")]
    DueDateShortened {
        /// Stored due date.
        from: NaiveDate,
        /// Submitted due date.
        to: NaiveDate,
    },

    /// The requested status change is not permitted.
    #[error("task {task_id} cannot transition from {} to {}", from.as_str(), to.as_str())]
    InvalidStateTransition {
        /// Task whose transition was rejected.
        task_id: TaskId,
        /// Stored status.
        from: TaskStatus,
        /// Requested status.
        to: TaskStatus,
    },
}

/// Error returned while parsing task statuses from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task categories from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task category: {0}")]
pub struct ParseCategoryError(pub String);
