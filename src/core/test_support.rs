use crate::db::repository::{EventRepository, SqliteRepository};
use crate::errors::AppResult;
use crate::models::event::{EventId, SleepEvent};
use crate::models::event_kind::SleepKind;
use chrono::{DateTime, Utc};
use std::cell::Cell;
use std::rc::Rc;

/// In-memory SQLite repository whose writes can be made to fail on demand.
pub struct FlakyRepository {
    inner: SqliteRepository,
    fail_writes: Rc<Cell<bool>>,
}

impl FlakyRepository {
    pub fn new() -> Self {
        Self {
            inner: SqliteRepository::in_memory().unwrap(),
            fail_writes: Rc::new(Cell::new(false)),
        }
    }

    /// Set to `true` to make every write fail with a disk-full error.
    pub fn switch(&self) -> Rc<Cell<bool>> {
        self.fail_writes.clone()
    }

    fn check(&self) -> AppResult<()> {
        if self.fail_writes.get() {
            return Err(rusqlite::Error::SqliteFailure(
                rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_FULL),
                Some("database or disk is full".into()),
            )
            .into());
        }
        Ok(())
    }
}

impl EventRepository for FlakyRepository {
    fn insert(&mut self, timestamp: DateTime<Utc>, kind: SleepKind) -> AppResult<SleepEvent> {
        self.check()?;
        self.inner.insert(timestamp, kind)
    }

    fn update(&mut self, event: &SleepEvent) -> AppResult<bool> {
        self.check()?;
        self.inner.update(event)
    }

    fn delete(&mut self, id: EventId) -> AppResult<bool> {
        self.check()?;
        self.inner.delete(id)
    }

    fn find(&self, id: EventId) -> AppResult<Option<SleepEvent>> {
        self.inner.find(id)
    }

    fn load_all(&self) -> AppResult<Vec<SleepEvent>> {
        self.inner.load_all()
    }
}
