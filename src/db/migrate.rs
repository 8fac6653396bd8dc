use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `events` table exists.
fn events_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='events'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `events` table.
///
/// AUTOINCREMENT keeps ids monotonic and never hands out the id of a
/// deleted row again.
fn create_events_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS events (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            timestamp   TEXT NOT NULL,
            kind        TEXT NOT NULL CHECK(kind IN ('went_to_sleep','woke_up')),
            created_at  TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_migration(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

fn migrate_add_timestamp_index(conn: &Connection, applied: &mut Vec<String>) -> Result<()> {
    let version = "20261019_0001_index_events_timestamp";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_events_timestamp ON events(timestamp, id);",
    )?;

    mark_migration(conn, version, "Added (timestamp, id) index to events")?;

    applied.push(format!(
        "Migration applied: {} → indexed events by timestamp",
        version
    ));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Prints nothing: returns one notice per applied change.
pub fn run_pending_migrations(conn: &Connection) -> Result<Vec<String>> {
    let mut applied = Vec::new();

    ensure_log_table(conn)?;

    if !events_table_exists(conn)? {
        create_events_table(conn)?;
        applied.push("Created events table.".to_string());
    }

    migrate_add_timestamp_index(conn, &mut applied)?;

    Ok(applied)
}
