//! Date/time parsing for command-line input, always in local time.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Local wall-clock time → UTC instant.
///
/// Ambiguous times (DST fold) take the earlier instant; times in a DST gap
/// are shifted forward by one hour.
pub fn local_naive_to_utc(naive: NaiveDateTime) -> Option<DateTime<Utc>> {
    local_naive_to_utc_in(naive, &Local)
}

pub fn local_naive_to_utc_in<Tz: TimeZone>(naive: NaiveDateTime, tz: &Tz) -> Option<DateTime<Utc>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(first, second) => {
            Some(first.with_timezone(&Utc).min(second.with_timezone(&Utc)))
        }
        LocalResult::None => match tz.from_local_datetime(&(naive + chrono::Duration::hours(1))) {
            LocalResult::Single(dt) => Some(dt.with_timezone(&Utc)),
            LocalResult::Ambiguous(first, _) => Some(first.with_timezone(&Utc)),
            LocalResult::None => None,
        },
    }
}

/// Parse "YYYY-MM-DD HH:MM" or "HH:MM" (on `today`) as local time.
pub fn parse_when(s: &str, today: NaiveDate) -> AppResult<DateTime<Utc>> {
    let s = s.trim();

    let naive = if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M") {
        dt
    } else if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M") {
        dt
    } else if let Some(t) = parse_time(s) {
        today.and_time(t)
    } else {
        return Err(AppError::InvalidTime(format!(
            "'{s}' (expected \"YYYY-MM-DD HH:MM\" or \"HH:MM\")"
        )));
    };

    local_naive_to_utc(naive).ok_or_else(|| AppError::InvalidTime(s.to_string()))
}
