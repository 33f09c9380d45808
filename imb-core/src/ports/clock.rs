use crate::calendar;
use time::{Date, Duration, OffsetDateTime};

/// A source of the current instant.
///
/// Business dates are derived from this single method, so pinning it pins
/// every "today"/"yesterday" decision made by fetchers and handlers.
pub trait Clock {
    /// The current instant
    fn now(&self) -> OffsetDateTime;

    /// Today's date in UK local time
    fn business_date(&self) -> Date {
        calendar::uk_date(self.now())
    }

    /// Yesterday's date in UK local time, the most recent fully settled day
    fn previous_business_date(&self) -> Date {
        self.business_date().saturating_sub(Duration::DAY)
    }
}

/// The system wall clock
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// A clock stopped at a fixed instant
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub OffsetDateTime);

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}
