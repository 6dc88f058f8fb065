//! Day-Boundary Detector.
//!
//! Two instants are on the same day when their calendar year, month and day
//! agree after conversion into the chosen time zone. Time of day is irrelevant.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

/// Calendar date of `instant` as seen in `tz`.
pub fn calendar_date_in<Tz: TimeZone>(instant: &DateTime<Utc>, tz: &Tz) -> NaiveDate {
    instant.with_timezone(tz).date_naive()
}

/// Same-day check in an explicit time zone.
pub fn is_same_day_in<Tz: TimeZone>(a: &DateTime<Utc>, b: &DateTime<Utc>, tz: &Tz) -> bool {
    calendar_date_in(a, tz) == calendar_date_in(b, tz)
}

/// Same-day check on the host's local calendar.
pub fn is_same_day(a: &DateTime<Utc>, b: &DateTime<Utc>) -> bool {
    is_same_day_in(a, b, &Local)
}
