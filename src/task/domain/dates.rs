//! Calendar-date handling shared by the workflow, filter and wire format.
//!
//! Task dates carry no time-of-day component. Inputs that do carry one (RFC
//! 3339 timestamps or naive `T`-separated date-times) are reduced to their UTC
//! calendar date.

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, Utc};

/// Wire format of a calendar date.
pub const CALENDAR_DATE_FORMAT: &str = "%Y-%m-%d";

const NAIVE_DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Parses a calendar date, discarding any time-of-day component.
///
/// Returns `None` for blank or malformed input.
#[must_use]
pub fn parse_calendar_date(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, CALENDAR_DATE_FORMAT)
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|timestamp| timestamp.with_timezone(&Utc).date_naive())
        })
        .or_else(|| {
            NaiveDateTime::parse_from_str(trimmed, NAIVE_DATE_TIME_FORMAT)
                .ok()
                .map(|timestamp| timestamp.date())
        })
}

/// Formats a calendar date as `YYYY-MM-DD`.
#[must_use]
pub fn format_calendar_date(date: NaiveDate) -> String {
    date.format(CALENDAR_DATE_FORMAT).to_string()
}

/// Adds whole days to a date, returning `None` past the representable range.
#[must_use]
pub fn add_days(date: NaiveDate, days: u64) -> Option<NaiveDate> {
    date.checked_add_days(Days::new(days))
}

/// Serde adapter writing `YYYY-MM-DD` and reading any form accepted by
/// [`parse_calendar_date`].
pub mod calendar_date {
    use super::{format_calendar_date, parse_calendar_date};
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    /// Serializes a date as `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures.
    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_calendar_date(*date))
    }

    /// Deserializes a calendar date or date-time string.
    ///
    /// # Errors
    ///
    /// Returns a deserializer error when the value is not a date.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_calendar_date(&raw)
            .ok_or_else(|| D::Error::custom(format!("invalid calendar date: {raw}")))
    }
}
