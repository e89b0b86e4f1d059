//! Shared test helpers for in-memory task integration tests.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;
use std::sync::Arc;
use taskdesk::task::{
    adapters::memory::InMemoryTaskRepository, services::TaskLifecycleService,
};

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

/// Service type exercised by the in-memory tests.
pub type TestService = TaskLifecycleService<InMemoryTaskRepository, FixedClock>;

/// Provides a clock frozen at 2024-01-01 09:00 UTC.
#[fixture]
pub fn clock() -> FixedClock {
    FixedClock(
        Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0)
            .single()
            .expect("valid fixed instant"),
    )
}

/// Provides a fresh in-memory repository for each test.
#[fixture]
pub fn repo() -> InMemoryTaskRepository {
    InMemoryTaskRepository::new()
}

/// Provides a service over a fresh repository.
#[fixture]
pub fn service(repo: InMemoryTaskRepository, clock: FixedClock) -> TestService {
    TaskLifecycleService::new(Arc::new(repo), Arc::new(clock))
}

/// Parses a `YYYY-MM-DD` literal.
#[must_use]
pub fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").expect("valid test date")
}
