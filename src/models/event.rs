use super::event_kind::SleepKind;
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-allocated identifier of a sleep event. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub i64);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted sleep/wake transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepEvent {
    pub id: EventId,              // ⇔ events.id (INTEGER AUTOINCREMENT)
    pub timestamp: DateTime<Utc>, // ⇔ events.timestamp (TEXT, RFC 3339 UTC)
    pub kind: SleepKind,          // ⇔ events.kind ('went_to_sleep' | 'woke_up')
}

impl SleepEvent {
    pub fn new(id: EventId, timestamp: DateTime<Utc>, kind: SleepKind) -> Self {
        Self {
            id,
            timestamp,
            kind,
        }
    }

    pub fn local_timestamp(&self) -> DateTime<Local> {
        self.timestamp.with_timezone(&Local)
    }

    /// Ordering key used everywhere entries are shown or compared in time:
    /// timestamp first, then id so equal timestamps stay deterministic.
    pub fn chrono_key(&self) -> (DateTime<Utc>, EventId) {
        (self.timestamp, self.id)
    }
}
