use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Absolute point in time, stored as milliseconds since 1970-01-01T00:00:00Z.
///
/// Any `i64` is constructible; range checking happens when the instant is
/// resolved to a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Instant(i64);

impl Instant {
    pub fn from_epoch_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub fn epoch_millis(&self) -> i64 {
        self.0
    }
}

/// Converts date-like values into an [`Instant`] at the API boundary.
pub trait IntoInstant {
    fn into_instant(self) -> Instant;
}

impl IntoInstant for Instant {
    fn into_instant(self) -> Instant {
        self
    }
}

impl IntoInstant for DateTime<Utc> {
    fn into_instant(self) -> Instant {
        Instant(self.timestamp_millis())
    }
}

impl IntoInstant for DateTime<Local> {
    fn into_instant(self) -> Instant {
        Instant(self.timestamp_millis())
    }
}

impl IntoInstant for DateTime<FixedOffset> {
    fn into_instant(self) -> Instant {
        Instant(self.timestamp_millis())
    }
}

impl IntoInstant for NaiveDateTime {
    fn into_instant(self) -> Instant {
        Instant(self.and_utc().timestamp_millis())
    }
}

impl IntoInstant for NaiveDate {
    fn into_instant(self) -> Instant {
        self.and_time(NaiveTime::MIN).into_instant()
    }
}
