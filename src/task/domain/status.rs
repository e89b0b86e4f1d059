//! Task status values and the transition table.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task workflow status.
///
/// Every task starts as [`TaskStatus::New`]. The status can then only move
/// along the edges returned by [`TaskStatus::allowed_transitions`]; no status
/// is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum TaskStatus {
    /// Task has been created and not yet closed.
    New,
    /// Task has been closed.
    Completed,
    /// A completed task has been reopened.
    Resumed,
}

impl TaskStatus {
    /// All statuses.
    pub const ALL: [Self; 3] = [Self::New, Self::Completed, Self::Resumed];

    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Completed => "Completed",
            Self::Resumed => "Resumed",
        }
    }

    /// Statuses reachable from this status in a single transition.
    #[must_use]
    pub const fn allowed_transitions(self) -> &'static [Self] {
        match self {
            Self::New | Self::Resumed => &[Self::Completed],
            Self::Completed => &[Self::Resumed],
        }
    }

    /// Returns `true` when moving from `self` to `target` is permitted.
    #[must_use]
    pub fn can_transition_to(self, target: Self) -> bool {
        self.allowed_transitions().contains(&target)
    }

    /// Returns `true` when a task in this status has read-only details.
    #[must_use]
    pub const fn locks_details(self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "new" => Ok(Self::New),
            "completed" => Ok(Self::Completed),
            "resumed" => Ok(Self::Resumed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl TryFrom<String> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
