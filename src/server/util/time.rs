//! Time windows used by scheduled jobs.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};

/// How far ahead of a session's start time its reminder is sent.
pub const REMINDER_LEAD_MINUTES: i64 = 30;

/// Returns the `[now, now + lead + 1 min)` window of start times whose reminders are due.
///
/// Every start time whose whole-minute distance from `now` is at most the lead falls inside, so
/// an event exactly one lead ahead is announced even when the job fires on time.
pub fn reminder_window(now: DateTime<Utc>) -> (NaiveDateTime, NaiveDateTime) {
    let start = now.naive_utc();
    let end = start + Duration::minutes(REMINDER_LEAD_MINUTES + 1);

    (start, end)
}
