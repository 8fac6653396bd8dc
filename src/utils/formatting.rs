//! Formatting utilities used for CLI output.

use crate::config::{default_date_format, default_time_format};
use crate::models::event::SleepEvent;
use crate::models::event_kind::SleepKind;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, NaiveDate, Utc};
use std::fmt::{Display, Write};

/// Render a chrono `DelayedFormat`, or `None` if the pattern is invalid or
/// asks for fields the value does not have (e.g. `%H` on a date).
fn try_render<'a, D: Display>(
    fmt: &'a str,
    render: impl FnOnce(StrftimeItems<'a>) -> D,
) -> Option<String> {
    if StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error)) {
        return None;
    }
    let mut out = String::new();
    write!(out, "{}", render(StrftimeItems::new(fmt))).ok()?;
    Some(out)
}

/// Day header, e.g. "October 19, 2026". Falls back to the default pattern
/// when `fmt` is not a valid strftime string.
pub fn format_day(day: &NaiveDate, fmt: &str) -> String {
    try_render(fmt, |items| day.format_with_items(items))
        .unwrap_or_else(|| day.format(&default_date_format()).to_string())
}

/// Entry time, e.g. "23:10".
pub fn format_time(ts: &DateTime<Local>, fmt: &str) -> String {
    try_render(fmt, |items| ts.format_with_items(items))
        .unwrap_or_else(|| ts.format(&default_time_format()).to_string())
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// One list row: "  12  🛏️  Went to sleep   23:10"
pub fn event_row(ev: &SleepEvent, time_fmt: &str, id_width: usize) -> String {
    format!(
        "{:>id_width$}  {}  {}  {}",
        ev.id,
        ev.kind.icon(),
        pad_right(ev.kind.label(), 14),
        format_time(&ev.local_timestamp(), time_fmt),
        id_width = id_width
    )
}

/// Sentence used by previews and change notices.
pub fn describe_entry(
    kind: SleepKind,
    ts: &DateTime<Utc>,
    date_fmt: &str,
    time_fmt: &str,
) -> String {
    let local = ts.with_timezone(&Local);
    format!(
        "{} at {} on {}",
        kind.label(),
        format_time(&local, time_fmt),
        format_day(&local.date_naive(), date_fmt)
    )
}
