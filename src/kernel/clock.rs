//! Calendar arithmetic for the displayed time.
//!
//! Minute/second writes are expressed as offsets from the top of the live
//! hour, so out-of-range values roll over (minute 75 lands 15 minutes into
//! the next hour) instead of being rejected.

use chrono::{Duration, NaiveDateTime, Timelike};

pub fn advance_one_second(t: NaiveDateTime) -> NaiveDateTime {
    t + Duration::seconds(1)
}

/// A parsed edit-field commit. Values are unbounded on purpose; see module
/// docs for the rollover semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldCommit {
    pub minutes: i64,
    pub seconds: i64,
}

/// Split a raw "MM:SS" buffer into a commit. Returns `None` when the
/// separator is missing or either part is not an integer.
pub fn parse_field_buffer(buffer: &str) -> Option<FieldCommit> {
    let (minutes, seconds) = buffer.split_once(':')?;
    Some(FieldCommit {
        minutes: minutes.trim().parse().ok()?,
        seconds: seconds.trim().parse().ok()?,
    })
}

/// Apply a commit against the live instant: date and hour come from `now`,
/// minutes/seconds from the commit. Returns `None` when the offset overflows
/// or lands outside the representable date range.
pub fn apply_field_commit(now: NaiveDateTime, commit: FieldCommit) -> Option<NaiveDateTime> {
    let offset = commit
        .minutes
        .checked_mul(60)
        .and_then(|m| m.checked_add(commit.seconds))
        .and_then(Duration::try_seconds)?;
    hour_start(now).checked_add_signed(offset)
}

/// Rebind only the minute to `unit`, refreshing everything else from `now`.
pub fn rebind_minute(now: NaiveDateTime, unit: u32) -> NaiveDateTime {
    hour_start(now) + Duration::seconds(i64::from(unit) * 60 + i64::from(now.second()))
}

/// Rebind only the second to `unit`, refreshing everything else from `now`.
pub fn rebind_second(now: NaiveDateTime, unit: u32) -> NaiveDateTime {
    hour_start(now) + Duration::seconds(i64::from(now.minute()) * 60 + i64::from(unit))
}

fn hour_start(t: NaiveDateTime) -> NaiveDateTime {
    let t = t.with_nanosecond(0).unwrap_or(t);
    t - Duration::seconds(i64::from(t.minute()) * 60 + i64::from(t.second()))
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/clock.rs"]
mod tests;
