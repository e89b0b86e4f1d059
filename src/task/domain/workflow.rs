//! Status workflow engine.
//!
//! Pure functions deciding which status changes are legal, which edit form
//! fields are editable, and how the due date is recomputed when a deferral is
//! requested. The presentation layer recomputes these on every input change
//! and applies the results declaratively; nothing here holds form state.

use super::{
    PersistedTaskData, Task, TaskDetails, TaskDomainError, TaskStatus,
    category::default_due_offset,
    dates::{add_days, format_calendar_date, parse_calendar_date},
};
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Fields of the task edit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormField {
    /// Task title.
    Title,
    /// Task category.
    Category,
    /// Task priority.
    Priority,
    /// Task description.
    Description,
    /// Current due date.
    DueDate,
    /// Workflow status.
    Status,
    /// Reason given for deferring the due date.
    DeferralReason,
    /// Number of days the due date is deferred by.
    ExtraDays,
}

impl FormField {
    /// All form fields in display order.
    pub const ALL: [Self; 8] = [
        Self::Title,
        Self::Category,
        Self::Priority,
        Self::Description,
        Self::DueDate,
        Self::Status,
        Self::DeferralReason,
        Self::ExtraDays,
    ];

    /// Returns the field name used by the presentation layer.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Category => "category",
            Self::Priority => "priority",
            Self::Description => "description",
            Self::DueDate => "dueDate",
            Self::Status => "status",
            Self::DeferralReason => "deferralReason",
            Self::ExtraDays => "extraDays",
        }
    }
}

/// Set of edit form fields that currently accept input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAvailability {
    enabled: BTreeSet<FormField>,
}

impl FieldAvailability {
    /// Returns `true` when `field` accepts input.
    #[must_use]
    pub fn is_enabled(&self, field: FormField) -> bool {
        self.enabled.contains(&field)
    }

    /// Iterates over the enabled fields in display order.
    pub fn enabled_fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.enabled.iter().copied()
    }

    /// Number of enabled fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.enabled.len()
    }

    /// Returns `true` when no field is enabled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.enabled.is_empty()
    }

    /// Applies the deferral gate: "extra days" only accepts input while a
    /// non-blank reason is present.
    #[must_use]
    pub fn with_deferral_reason(mut self, reason: &str) -> Self {
        if !deferral_enabled(reason) {
            self.enabled.remove(&FormField::ExtraDays);
        }
        self
    }
}

/// Computes which fields are editable for a status.
///
/// A completed task only exposes its status so that it can be resumed; every
/// other status leaves all fields editable.
#[must_use]
pub fn field_availability(status: TaskStatus) -> FieldAvailability {
    let enabled = if status.locks_details() {
        BTreeSet::from([FormField::Status])
    } else {
        FormField::ALL.into_iter().collect()
    };
    FieldAvailability { enabled }
}

/// Returns `true` when a deferral reason unlocks the "extra days" input.
#[must_use]
pub fn deferral_enabled(reason: &str) -> bool {
    !reason.trim().is_empty()
}

/// Statuses a task may move to next, given its stored status as text.
///
/// Unknown text yields an empty list, leaving no legal change.
#[must_use]
pub fn allowed_next_statuses(current: &str) -> Vec<TaskStatus> {
    TaskStatus::try_from(current)
        .map(|status| status.allowed_transitions().to_vec())
        .unwrap_or_default()
}

/// Default due date of a task created on `created_on`.
///
/// Unknown categories get no offset. Saturates at [`NaiveDate::MAX`].
#[must_use]
pub fn default_due_date(category: &str, created_on: NaiveDate) -> NaiveDate {
    add_days(created_on, default_due_offset(category)).unwrap_or(NaiveDate::MAX)
}

/// Resolves the due date submitted from the edit form.
///
/// `base` is the due date as entered. When `reason` is non-blank and
/// `extra_days` parses as an integer, the base is pushed back by that many
/// days; otherwise the base is returned unchanged.
///
/// # Errors
///
/// Returns [`TaskDomainError::MissingDueDate`] for a blank base,
/// [`TaskDomainError::InvalidDate`] when the base or the result is not a
/// calendar date, and [`TaskDomainError::NegativeDeferral`] for a negative
/// day count.
pub fn resolve_due_date(
    base: &str,
    reason: &str,
    extra_days: &str,
) -> Result<NaiveDate, TaskDomainError> {
    if base.trim().is_empty() {
        return Err(TaskDomainError::MissingDueDate);
    }
    let base_date =
        parse_calendar_date(base).ok_or_else(|| TaskDomainError::InvalidDate(base.to_owned()))?;

    if !deferral_enabled(reason) {
        return Ok(base_date);
    }
    let Ok(days) = extra_days.trim().parse::<i64>() else {
        return Ok(base_date);
    };
    let forward = u64::try_from(days).map_err(|_| TaskDomainError::NegativeDeferral(days))?;
    add_days(base_date, forward).ok_or_else(|| {
        TaskDomainError::InvalidDate(format!("{} + {days} days", format_calendar_date(base_date)))
    })
}

/// Raw state of the task edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditTaskForm {
    /// Title input.
    pub title: String,
    /// Category input.
    pub category: String,
    /// Priority input.
    pub priority: String,
    /// Description input.
    pub description: String,
    /// Due date input, `YYYY-MM-DD`.
    pub due_date: String,
    /// Status input.
    pub status: String,
    /// Deferral reason input.
    pub deferral_reason: String,
    /// Extra days input.
    pub extra_days: String,
}

impl EditTaskForm {
    /// Seeds the form from a stored task, with the deferral inputs empty.
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title().to_owned(),
            category: task.category().as_str().to_owned(),
            priority: task.priority().to_owned(),
            description: task.description().to_owned(),
            due_date: format_calendar_date(task.due_date()),
            status: task.status().as_str().to_owned(),
            deferral_reason: String::new(),
            extra_days: String::new(),
        }
    }

    /// Fields currently accepting input, derived from the status and reason
    /// inputs.
    ///
    /// An unparsable status input gates nothing; submission rejects it.
    #[must_use]
    pub fn availability(&self) -> FieldAvailability {
        let status = TaskStatus::try_from(self.status.as_str()).unwrap_or(TaskStatus::New);
        field_availability(status).with_deferral_reason(&self.deferral_reason)
    }
}

/// Returns `value` while `field` is enabled, otherwise an empty input.
fn gated<'a>(availability: &FieldAvailability, field: FormField, value: &'a str) -> &'a str {
    if availability.is_enabled(field) {
        value
    } else {
        ""
    }
}

/// Computes the task to submit for an edit.
///
/// The submitted status must either equal the stored status or be one of its
/// allowed transitions. Fields the gating disables keep their stored values.
/// The identifier and start date always come from `current`, and the due
/// date never moves earlier than the stored one.
///
/// # Errors
///
/// Returns [`TaskDomainError::UnknownStatus`] or
/// [`TaskDomainError::InvalidStateTransition`] for an illegal status, any
/// [`TaskDetails::new`] error for invalid editable details, and any
/// [`resolve_due_date`] error for an invalid due date, and
/// [`TaskDomainError::DueDateShortened`] when the due date would move earlier.
pub fn plan_edit(current: &Task, form: &EditTaskForm) -> Result<Task, TaskDomainError> {
    let target = TaskStatus::try_from(form.status.as_str())
        .map_err(|err| TaskDomainError::UnknownStatus(err.0))?;
    if target != current.status() && !current.status().can_transition_to(target) {
        return Err(TaskDomainError::InvalidStateTransition {
            task_id: current.id().clone(),
            from: current.status(),
            to: target,
        });
    }

    let availability = form.availability();

    let details = if availability.is_enabled(FormField::Title) {
        TaskDetails::new(
            &form.title,
            &form.category,
            &form.priority,
            Some(&form.description),
        )?
    } else {
        current.details()
    };

    let due_date = if availability.is_enabled(FormField::DueDate) {
        let reason = gated(&availability, FormField::DeferralReason, &form.deferral_reason);
        let extra_days = gated(&availability, FormField::ExtraDays, &form.extra_days);
        let resolved = resolve_due_date(&form.due_date, reason, extra_days)?;
        if resolved < current.due_date() {
            return Err(TaskDomainError::DueDateShortened {
                from: current.due_date(),
                to: resolved,
            });
        }
        resolved
    } else {
        current.due_date()
    };

    Ok(Task::from_persisted(PersistedTaskData {
        id: current.id().clone(),
        details,
        start_date: current.start_date(),
        due_date,
        status: target,
    }))
}
