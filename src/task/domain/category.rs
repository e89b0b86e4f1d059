//! Task categories and their default due-date offsets.

use super::ParseCategoryError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of task categories.
///
/// The category determines how far in the future a new task falls due.
/// Decoding accepts the same spellings as [`TryFrom<&str>`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Category {
    /// Long-running work, due in thirty days.
    Category1,
    /// Short work, due in a week.
    Category2,
    /// Medium work, due in two weeks.
    Category3,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Self; 3] = [Self::Category1, Self::Category2, Self::Category3];

    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Category1 => "Category1",
            Self::Category2 => "Category2",
            Self::Category3 => "Category3",
        }
    }

    /// Number of days between a task's creation and its default due date.
    #[must_use]
    pub const fn default_offset_days(self) -> u64 {
        match self {
            Self::Category1 => 30,
            Self::Category2 => 7,
            Self::Category3 => 14,
        }
    }
}

impl TryFrom<&str> for Category {
    type Error = ParseCategoryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized: String = value
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "category1" => Ok(Self::Category1),
            "category2" => Ok(Self::Category2),
            "category3" => Ok(Self::Category3),
            _ => Err(ParseCategoryError(value.to_owned())),
        }
    }
}

impl TryFrom<String> for Category {
    type Error = ParseCategoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Default due-date offset for raw category text.
///
/// Text that does not name a known category yields an offset of zero.
#[must_use]
pub fn default_due_offset(raw_category: &str) -> u64 {
    Category::try_from(raw_category).map_or(0, Category::default_offset_days)
}
