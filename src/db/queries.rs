use crate::errors::{AppError, AppResult};
use crate::models::event::{EventId, SleepEvent};
use crate::models::event_kind::SleepKind;
use chrono::{DateTime, Local, SecondsFormat, Utc};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

/// Timestamp → DB string (RFC 3339, UTC, sub-second precision kept).
pub fn ts_to_db(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

pub fn ts_from_db(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

pub fn map_row(row: &Row) -> Result<SleepEvent> {
    let ts_str: String = row.get("timestamp")?;
    let timestamp = ts_from_db(&ts_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(ts_str.clone())),
        )
    })?;

    let kind_str: String = row.get("kind")?;
    let kind = SleepKind::from_db_str(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidKind(kind_str.clone())),
        )
    })?;

    Ok(SleepEvent {
        id: EventId(row.get("id")?),
        timestamp,
        kind,
    })
}

/// Insert a new event and return the id allocated by SQLite.
pub fn insert_event(
    conn: &Connection,
    timestamp: &DateTime<Utc>,
    kind: SleepKind,
) -> AppResult<EventId> {
    conn.execute(
        "INSERT INTO events (timestamp, kind, created_at) VALUES (?1, ?2, ?3)",
        params![
            ts_to_db(timestamp),
            kind.to_db_str(),
            Local::now().to_rfc3339()
        ],
    )?;
    Ok(EventId(conn.last_insert_rowid()))
}

/// Update timestamp and kind of an event. Returns the number of rows touched.
pub fn update_event(conn: &Connection, ev: &SleepEvent) -> AppResult<usize> {
    let changed = conn.execute(
        "UPDATE events SET timestamp = ?1, kind = ?2 WHERE id = ?3",
        params![ts_to_db(&ev.timestamp), ev.kind.to_db_str(), ev.id.0],
    )?;
    Ok(changed)
}

pub fn delete_event(conn: &Connection, id: EventId) -> AppResult<usize> {
    let changed = conn.execute("DELETE FROM events WHERE id = ?1", [id.0])?;
    Ok(changed)
}

pub fn load_event(conn: &Connection, id: EventId) -> AppResult<Option<SleepEvent>> {
    let ev = conn
        .query_row(
            "SELECT id, timestamp, kind FROM events WHERE id = ?1",
            [id.0],
            map_row,
        )
        .optional()?;
    Ok(ev)
}

/// All events, in insertion (id) order.
pub fn load_all_events(conn: &Connection) -> AppResult<Vec<SleepEvent>> {
    let mut stmt = conn.prepare("SELECT id, timestamp, kind FROM events ORDER BY id ASC")?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn count_events(conn: &Connection) -> AppResult<i64> {
    let n = conn.query_row("SELECT COUNT(*) FROM events", [], |row| row.get(0))?;
    Ok(n)
}
