use super::event::SleepEvent;
use chrono::NaiveDate;
use serde::Serialize;

/// Entries sharing one local calendar day, ascending by timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayBucket {
    pub day: NaiveDate,
    pub events: Vec<SleepEvent>,
}

impl DayBucket {
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
