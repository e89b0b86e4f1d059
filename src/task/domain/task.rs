//! Task record, its validated details and the creation payload.

use super::{
    Category, TaskDomainError, TaskId, TaskStatus,
    dates::calendar_date,
    workflow::default_due_date,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Maximum description length in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 200;

/// Task record as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: String,
    category: Category,
    priority: String,
    #[serde(default)]
    description: String,
    #[serde(with = "calendar_date")]
    start_date: NaiveDate,
    #[serde(with = "calendar_date")]
    due_date: NaiveDate,
    status: TaskStatus,
}

/// Parameter object for reconstructing a task from stored values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Backend-assigned identifier.
    pub id: TaskId,
    /// Validated descriptive fields.
    pub details: TaskDetails,
    /// Date the task was opened.
    pub start_date: NaiveDate,
    /// Date by which the task should close.
    pub due_date: NaiveDate,
    /// Workflow status.
    pub status: TaskStatus,
}

impl Task {
    /// Reconstructs a task from stored values.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        let TaskDetails {
            title,
            category,
            priority,
            description,
        } = data.details;
        Self {
            id: data.id,
            title,
            category,
            priority,
            description,
            start_date: data.start_date,
            due_date: data.due_date,
            status: data.status,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task category.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Returns the free-form priority text.
    #[must_use]
    pub fn priority(&self) -> &str {
        &self.priority
    }

    /// Returns the description, empty when none was given.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the date the task was opened.
    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Returns the date by which the task should close.
    #[must_use]
    pub const fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Returns the workflow status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns a copy of the descriptive fields.
    #[must_use]
    pub fn details(&self) -> TaskDetails {
        TaskDetails {
            title: self.title.clone(),
            category: self.category,
            priority: self.priority.clone(),
            description: self.description.clone(),
        }
    }

    /// Returns the same record addressed by another identifier.
    ///
    /// Repositories use this when the request path and the body disagree; the
    /// path identifier wins.
    #[must_use]
    pub fn with_id(mut self, id: TaskId) -> Self {
        self.id = id;
        self
    }
}

/// Validated descriptive fields shared by creation and editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDetails {
    title: String,
    category: Category,
    priority: String,
    description: String,
}

impl TaskDetails {
    /// Validates raw descriptive inputs.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`], [`TaskDomainError::MissingCategory`],
    /// [`TaskDomainError::UnknownCategory`], [`TaskDomainError::EmptyPriority`]
    /// or [`TaskDomainError::DescriptionTooLong`] for the first failing field.
    pub fn new(
        title: &str,
        category: &str,
        priority: &str,
        description: Option<&str>,
    ) -> Result<Self, TaskDomainError> {
        let normalized_title = title.trim();
        if normalized_title.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }

        if category.trim().is_empty() {
            return Err(TaskDomainError::MissingCategory);
        }
        let parsed_category = Category::try_from(category)
            .map_err(|err| TaskDomainError::UnknownCategory(err.0))?;

        let normalized_priority = priority.trim();
        if normalized_priority.is_empty() {
            return Err(TaskDomainError::EmptyPriority);
        }

        let description_text = description.unwrap_or_default();
        let length = description_text.chars().count();
        if length > MAX_DESCRIPTION_LENGTH {
            return Err(TaskDomainError::DescriptionTooLong {
                length,
                max: MAX_DESCRIPTION_LENGTH,
            });
        }

        Ok(Self {
            title: normalized_title.to_owned(),
            category: parsed_category,
            priority: normalized_priority.to_owned(),
            description: description_text.to_owned(),
        })
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the category.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Returns the priority.
    #[must_use]
    pub fn priority(&self) -> &str {
        &self.priority
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Payload for creating a task. The backend assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    title: String,
    category: Category,
    priority: String,
    description: String,
    #[serde(with = "calendar_date")]
    start_date: NaiveDate,
    #[serde(with = "calendar_date")]
    due_date: NaiveDate,
    status: TaskStatus,
}

impl TaskDraft {
    /// Builds a draft opened on `created_on` with the category's default due
    /// date and status [`TaskStatus::New`].
    #[must_use]
    pub fn new(details: TaskDetails, created_on: NaiveDate) -> Self {
        let due_date = default_due_date(details.category.as_str(), created_on);
        Self {
            title: details.title,
            category: details.category,
            priority: details.priority,
            description: details.description,
            start_date: created_on,
            due_date,
            status: TaskStatus::New,
        }
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the category.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Returns the creation date.
    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Returns the computed due date.
    #[must_use]
    pub const fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Returns the initial status, always [`TaskStatus::New`].
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Materializes the stored record once the repository has assigned `id`.
    #[must_use]
    pub fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            title: self.title,
            category: self.category,
            priority: self.priority,
            description: self.description,
            start_date: self.start_date,
            due_date: self.due_date,
            status: self.status,
        }
    }
}
