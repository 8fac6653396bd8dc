//! Persistence collaborator behind the entry store.

use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::event::{EventId, SleepEvent};
use crate::models::event_kind::SleepKind;
use chrono::{DateTime, Utc};

/// Durable, id-keyed record storage for sleep events.
///
/// Writes must be durable and visible to the next read once the call returns `Ok`.
pub trait EventRepository {
    /// Persist a new event and return it with its freshly allocated id.
    fn insert(&mut self, timestamp: DateTime<Utc>, kind: SleepKind) -> AppResult<SleepEvent>;

    /// Overwrite timestamp and kind of `event.id`. `Ok(false)` if no such row.
    fn update(&mut self, event: &SleepEvent) -> AppResult<bool>;

    /// `Ok(false)` if no such row.
    fn delete(&mut self, id: EventId) -> AppResult<bool>;

    fn find(&self, id: EventId) -> AppResult<Option<SleepEvent>>;

    /// Every stored event, ascending by id.
    fn load_all(&self) -> AppResult<Vec<SleepEvent>>;
}

/// SQLite-backed repository. Every write also appends an audit row to `log`
/// inside the same transaction.
pub struct SqliteRepository {
    pool: DbPool,
}

impl SqliteRepository {
    /// Open the database at `path`, applying pending migrations.
    pub fn open(path: &str) -> AppResult<Self> {
        Self::from_pool(DbPool::new(path)?)
    }

    pub fn in_memory() -> AppResult<Self> {
        Self::from_pool(DbPool::in_memory()?)
    }

    pub fn from_pool(pool: DbPool) -> AppResult<Self> {
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn pool_mut(&mut self) -> &mut DbPool {
        &mut self.pool
    }
}

fn describe(kind: SleepKind, timestamp: &DateTime<Utc>) -> String {
    format!("{} at {}", kind.label(), queries::ts_to_db(timestamp))
}

impl EventRepository for SqliteRepository {
    fn insert(&mut self, timestamp: DateTime<Utc>, kind: SleepKind) -> AppResult<SleepEvent> {
        let tx = self.pool.conn.transaction()?;
        let id = queries::insert_event(&tx, &timestamp, kind)?;
        ttlog(&tx, "add", &format!("#{id}"), &describe(kind, &timestamp))?;
        tx.commit()?;

        Ok(SleepEvent::new(id, timestamp, kind))
    }

    fn update(&mut self, event: &SleepEvent) -> AppResult<bool> {
        let tx = self.pool.conn.transaction()?;
        let changed = queries::update_event(&tx, event)?;
        if changed == 0 {
            return Ok(false); // dropping tx rolls back
        }
        ttlog(
            &tx,
            "edit",
            &format!("#{}", event.id),
            &describe(event.kind, &event.timestamp),
        )?;
        tx.commit()?;
        Ok(true)
    }

    fn delete(&mut self, id: EventId) -> AppResult<bool> {
        let tx = self.pool.conn.transaction()?;
        let changed = queries::delete_event(&tx, id)?;
        if changed == 0 {
            return Ok(false);
        }
        ttlog(&tx, "del", &format!("#{id}"), "Entry deleted")?;
        tx.commit()?;
        Ok(true)
    }

    fn find(&self, id: EventId) -> AppResult<Option<SleepEvent>> {
        queries::load_event(&self.pool.conn, id)
    }

    fn load_all(&self) -> AppResult<Vec<SleepEvent>> {
        queries::load_all_events(&self.pool.conn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::log::load_log;
    use chrono::TimeZone;

    #[test]
    fn writes_are_audited() {
        let mut repo = SqliteRepository::in_memory().unwrap();
        let ts = Utc.with_ymd_and_hms(2026, 10, 18, 23, 0, 0).unwrap();

        let ev = repo.insert(ts, SleepKind::WentToSleep).unwrap();
        assert!(repo.delete(ev.id).unwrap());

        let ops: Vec<String> = load_log(&repo.pool_mut().conn)
            .unwrap()
            .into_iter()
            .filter(|r| r.operation != "migration_applied")
            .map(|r| r.operation)
            .collect();
        assert_eq!(ops, vec!["add", "del"]);
    }

    #[test]
    fn missing_rows_leave_no_audit_trace() {
        let mut repo = SqliteRepository::in_memory().unwrap();
        let ghost = SleepEvent::new(
            EventId(42),
            Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
            SleepKind::WokeUp,
        );

        assert!(!repo.update(&ghost).unwrap());
        assert!(!repo.delete(ghost.id).unwrap());

        let rows = load_log(&repo.pool_mut().conn).unwrap();
        assert!(rows.iter().all(|r| r.operation == "migration_applied"));
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut repo = SqliteRepository::in_memory().unwrap();
        let ts = Utc.with_ymd_and_hms(2026, 3, 1, 7, 0, 0).unwrap();

        let a = repo.insert(ts, SleepKind::WokeUp).unwrap();
        let b = repo.insert(ts, SleepKind::WentToSleep).unwrap();
        repo.delete(b.id).unwrap();
        let c = repo.insert(ts, SleepKind::WokeUp).unwrap();

        assert!(c.id > b.id);
        assert!(b.id > a.id);
    }
}
