//! Task filter engine.
//!
//! Criteria are independent and combined with logical AND. An absent or blank
//! criterion imposes no constraint. Filtering preserves input order and never
//! mutates the input.

use super::{Task, dates::parse_calendar_date};
use chrono::NaiveDate;

/// Parsed filter criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    priority: Option<String>,
    category: Option<String>,
    date_from: Option<NaiveDate>,
    date_to: Option<NaiveDate>,
}

impl FilterCriteria {
    /// Creates criteria that match every task.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires the priority to contain `needle`, ignoring case.
    #[must_use]
    pub fn with_priority(mut self, needle: &str) -> Self {
        self.priority = normalize_needle(needle);
        self
    }

    /// Requires the category name to contain `needle`, ignoring case.
    #[must_use]
    pub fn with_category(mut self, needle: &str) -> Self {
        self.category = normalize_needle(needle);
        self
    }

    /// Requires the start date to be on or after `date`.
    #[must_use]
    pub const fn with_date_from(mut self, date: NaiveDate) -> Self {
        self.date_from = Some(date);
        self
    }

    /// Requires the due date to be on or before `date`.
    #[must_use]
    pub const fn with_date_to(mut self, date: NaiveDate) -> Self {
        self.date_to = Some(date);
        self
    }

    /// Returns `true` when no criterion is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.priority.is_none()
            && self.category.is_none()
            && self.date_from.is_none()
            && self.date_to.is_none()
    }

    /// Returns `true` when `task` satisfies every criterion.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        contains_ignoring_case(task.priority(), self.priority.as_deref())
            && contains_ignoring_case(task.category().as_str(), self.category.as_deref())
            && self.date_from.is_none_or(|from| task.start_date() >= from)
            && self.date_to.is_none_or(|to| task.due_date() <= to)
    }

    /// Returns the matching tasks in their original order.
    #[must_use]
    pub fn apply(&self, tasks: &[Task]) -> Vec<Task> {
        tasks
            .iter()
            .filter(|task| self.matches(task))
            .cloned()
            .collect()
    }
}

/// Returns the tasks matching `criteria` in their original order.
#[must_use]
pub fn filter_tasks(tasks: &[Task], criteria: &FilterCriteria) -> Vec<Task> {
    criteria.apply(tasks)
}

/// Raw filter inputs as typed on the list screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterInputs {
    /// Priority substring.
    pub priority: String,
    /// Category substring.
    pub category: String,
    /// Earliest start date, `YYYY-MM-DD`.
    pub date_from: String,
    /// Latest due date, `YYYY-MM-DD`.
    pub date_to: String,
}

impl FilterInputs {
    /// Converts the inputs into criteria.
    ///
    /// A date input that does not parse imposes no constraint; see
    /// [`Self::unparsable_date_inputs`].
    #[must_use]
    pub fn to_criteria(&self) -> FilterCriteria {
        let mut criteria = FilterCriteria::new()
            .with_priority(&self.priority)
            .with_category(&self.category);
        if let Some(from) = parse_calendar_date(&self.date_from) {
            criteria = criteria.with_date_from(from);
        }
        if let Some(to) = parse_calendar_date(&self.date_to) {
            criteria = criteria.with_date_to(to);
        }
        criteria
    }

    /// Names of non-blank date inputs that were discarded as unparsable.
    #[must_use]
    pub fn unparsable_date_inputs(&self) -> Vec<&'static str> {
        [("dateFrom", &self.date_from), ("dateTo", &self.date_to)]
            .into_iter()
            .filter(|(_, raw)| !raw.trim().is_empty() && parse_calendar_date(raw).is_none())
            .map(|(name, _)| name)
            .collect()
    }
}

fn normalize_needle(needle: &str) -> Option<String> {
    let trimmed = needle.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
}

fn contains_ignoring_case(haystack: &str, needle: Option<&str>) -> bool {
    needle.is_none_or(|lowered| haystack.to_lowercase().contains(lowered))
}
