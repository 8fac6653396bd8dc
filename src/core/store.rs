//! The canonical collection of sleep entries.

use crate::core::clock::{Clock, SystemClock};
use crate::core::grouping;
use crate::db::repository::{EventRepository, SqliteRepository};
use crate::errors::{AppError, AppResult};
use crate::models::day_bucket::DayBucket;
use crate::models::event::{EventId, SleepEvent};
use crate::models::event_kind::SleepKind;
use crate::models::status::{QuickAction, SleepStatus};
use chrono::{DateTime, Utc};

/// Published to subscribers after a mutation has been persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreChange {
    Created(SleepEvent),
    Updated {
        before: SleepEvent,
        after: SleepEvent,
    },
    Deleted(SleepEvent),
}

impl StoreChange {
    /// The entry as it is (or was, for deletions) after the change.
    pub fn event(&self) -> &SleepEvent {
        match self {
            StoreChange::Created(ev) | StoreChange::Deleted(ev) => ev,
            StoreChange::Updated { after, .. } => after,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&StoreChange)>;

/// Single source of truth for entries and the derived awake/asleep status.
///
/// Reads always go to the repository, so a mutation is visible to the very
/// next call. There is exactly one writer; nothing here is `Send`.
pub struct EntryStore {
    repo: Box<dyn EventRepository>,
    clock: Box<dyn Clock>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl EntryStore {
    pub fn new(repo: impl EventRepository + 'static) -> Self {
        Self::with_clock(repo, SystemClock)
    }

    pub fn with_clock(repo: impl EventRepository + 'static, clock: impl Clock + 'static) -> Self {
        Self {
            repo: Box::new(repo),
            clock: Box::new(clock),
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Open (and migrate) the SQLite database at `path`.
    pub fn open(path: &str) -> AppResult<Self> {
        Ok(Self::new(SqliteRepository::open(path)?))
    }

    pub fn in_memory() -> AppResult<Self> {
        Ok(Self::new(SqliteRepository::in_memory()?))
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    // ------------------------------------------------
    // Subscriptions
    // ------------------------------------------------

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&StoreChange) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    fn publish(&mut self, change: StoreChange) {
        for (_, callback) in self.subscribers.iter_mut() {
            callback(&change);
        }
    }

    // ------------------------------------------------
    // Mutations
    // ------------------------------------------------

    pub fn create_event(&mut self, timestamp: DateTime<Utc>, kind: SleepKind) -> AppResult<SleepEvent> {
        let ev = self.repo.insert(timestamp, kind)?;
        self.publish(StoreChange::Created(ev.clone()));
        Ok(ev)
    }

    /// One-tap entry stamped with the current time.
    pub fn create_quick_event(&mut self, kind: SleepKind) -> AppResult<SleepEvent> {
        let now = self.now();
        self.create_event(now, kind)
    }

    pub fn update_event(
        &mut self,
        id: EventId,
        timestamp: DateTime<Utc>,
        kind: SleepKind,
    ) -> AppResult<SleepEvent> {
        let before = self.get_event(id)?;
        let after = SleepEvent::new(id, timestamp, kind);

        if !self.repo.update(&after)? {
            return Err(AppError::NotFound(id));
        }

        self.publish(StoreChange::Updated {
            before,
            after: after.clone(),
        });
        Ok(after)
    }

    /// Remove an entry and hand it back.
    pub fn delete_event(&mut self, id: EventId) -> AppResult<SleepEvent> {
        let ev = self.get_event(id)?;

        if !self.repo.delete(id)? {
            return Err(AppError::NotFound(id));
        }

        self.publish(StoreChange::Deleted(ev.clone()));
        Ok(ev)
    }

    /// Record whatever the current quick action suggests.
    ///
    /// The very first entry has no quick action: it goes through the picker.
    pub fn toggle(&mut self) -> AppResult<SleepEvent> {
        match self.next_action()?.quick_kind() {
            Some(kind) => self.create_quick_event(kind),
            None => Err(AppError::NoEntries),
        }
    }

    // ------------------------------------------------
    // Queries
    // ------------------------------------------------

    pub fn get_event(&self, id: EventId) -> AppResult<SleepEvent> {
        self.repo.find(id)?.ok_or(AppError::NotFound(id))
    }

    /// Every entry, in creation order.
    pub fn all_events(&self) -> AppResult<Vec<SleepEvent>> {
        self.repo.load_all()
    }

    /// The entry with the greatest timestamp. On equal timestamps the most
    /// recently created (highest id) wins.
    pub fn latest_event(&self) -> AppResult<Option<SleepEvent>> {
        Ok(self
            .all_events()?
            .into_iter()
            .max_by_key(|e| e.chrono_key()))
    }

    pub fn current_status(&self) -> AppResult<SleepStatus> {
        Ok(match self.latest_event()? {
            Some(ev) => ev.kind.resulting_status(),
            None => SleepStatus::Undefined,
        })
    }

    pub fn next_action(&self) -> AppResult<QuickAction> {
        Ok(self.current_status()?.next_action())
    }

    /// Entries grouped by local calendar day.
    pub fn day_buckets(&self) -> AppResult<Vec<DayBucket>> {
        Ok(grouping::group_by_day(&self.all_events()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use crate::core::test_support::FlakyRepository;
    use chrono::{Duration, TimeZone};
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn store_with_clock(start: i64) -> (EntryStore, Rc<FixedClock>) {
        let clock = Rc::new(FixedClock::new(at(start)));
        let repo = SqliteRepository::in_memory().unwrap();
        (EntryStore::with_clock(repo, clock.clone()), clock)
    }

    #[test]
    fn empty_store_has_undefined_status() {
        let store = EntryStore::in_memory().unwrap();
        assert_eq!(store.current_status().unwrap(), SleepStatus::Undefined);
        assert_eq!(store.next_action().unwrap(), QuickAction::AddFirstEntry);
        assert!(store.all_events().unwrap().is_empty());
    }

    #[test]
    fn status_follows_latest_timestamp_not_creation_order() {
        let mut store = EntryStore::in_memory().unwrap();
        store.create_event(at(300), SleepKind::WokeUp).unwrap();
        store.create_event(at(100), SleepKind::WentToSleep).unwrap();
        store.create_event(at(200), SleepKind::WentToSleep).unwrap();

        assert_eq!(store.current_status().unwrap(), SleepStatus::Awake);
        assert_eq!(store.next_action().unwrap(), QuickAction::GoToSleep);
    }

    #[test]
    fn quick_events_toggle_status_and_delete_reverts_it() {
        let (mut store, clock) = store_with_clock(100);

        store.create_quick_event(SleepKind::WentToSleep).unwrap();
        assert_eq!(store.current_status().unwrap(), SleepStatus::Asleep);

        clock.set(at(200));
        let woke = store.create_quick_event(SleepKind::WokeUp).unwrap();
        assert_eq!(woke.timestamp, at(200));
        assert_eq!(store.current_status().unwrap(), SleepStatus::Awake);

        store.delete_event(woke.id).unwrap();
        assert_eq!(store.current_status().unwrap(), SleepStatus::Asleep);
    }

    #[test]
    fn equal_timestamps_break_ties_by_highest_id() {
        let mut store = EntryStore::in_memory().unwrap();
        store.create_event(at(500), SleepKind::WokeUp).unwrap();
        let second = store.create_event(at(500), SleepKind::WentToSleep).unwrap();

        assert_eq!(store.latest_event().unwrap().unwrap().id, second.id);
        assert_eq!(store.current_status().unwrap(), SleepStatus::Asleep);
    }

    #[test]
    fn repeated_kinds_are_allowed() {
        let mut store = EntryStore::in_memory().unwrap();
        store.create_event(at(1), SleepKind::WokeUp).unwrap();
        store.create_event(at(2), SleepKind::WokeUp).unwrap();
        assert_eq!(store.all_events().unwrap().len(), 2);
    }

    #[test]
    fn ids_stay_unique_through_mixed_mutations() {
        let (mut store, clock) = store_with_clock(1_000);
        let mut live = Vec::new();

        for i in 0..30 {
            clock.advance(Duration::minutes(17));
            let kind = if i % 2 == 0 {
                SleepKind::WentToSleep
            } else {
                SleepKind::WokeUp
            };
            live.push(store.create_quick_event(kind).unwrap().id);

            if i % 4 == 3 {
                let gone = live.remove(i as usize % live.len());
                store.delete_event(gone).unwrap();
            }
            if i % 5 == 0 {
                let target = live[0];
                store
                    .update_event(target, at(i), SleepKind::WokeUp)
                    .unwrap();
            }
        }

        let all = store.all_events().unwrap();
        let ids: HashSet<EventId> = all.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), all.len());
        assert_eq!(all.len(), live.len());
    }

    #[test]
    fn update_changes_fields_in_place() {
        let mut store = EntryStore::in_memory().unwrap();
        let ev = store.create_event(at(10), SleepKind::WentToSleep).unwrap();

        let updated = store.update_event(ev.id, at(20), SleepKind::WokeUp).unwrap();
        assert_eq!(updated.id, ev.id);
        assert_eq!(store.get_event(ev.id).unwrap(), updated);
    }

    #[test]
    fn missing_ids_report_not_found_and_change_nothing() {
        let mut store = EntryStore::in_memory().unwrap();
        store.create_event(at(10), SleepKind::WentToSleep).unwrap();
        let before = store.all_events().unwrap();

        let err = store.delete_event(EventId(999)).unwrap_err();
        assert!(matches!(err, AppError::NotFound(EventId(999))));

        let err = store
            .update_event(EventId(999), at(11), SleepKind::WokeUp)
            .unwrap_err();
        assert!(err.is_not_found());

        assert_eq!(store.all_events().unwrap(), before);
    }

    #[test]
    fn deleting_keeps_other_ids_and_order() {
        let mut store = EntryStore::in_memory().unwrap();
        let a = store.create_event(at(30), SleepKind::WentToSleep).unwrap();
        let b = store.create_event(at(10), SleepKind::WokeUp).unwrap();
        let c = store.create_event(at(20), SleepKind::WentToSleep).unwrap();

        store.delete_event(b.id).unwrap();
        assert_eq!(store.all_events().unwrap(), vec![a, c]);
    }

    #[test]
    fn toggle_needs_a_first_entry() {
        let (mut store, clock) = store_with_clock(0);
        assert!(matches!(store.toggle(), Err(AppError::NoEntries)));

        store.create_quick_event(SleepKind::WentToSleep).unwrap();
        clock.advance(Duration::hours(8));
        assert_eq!(store.toggle().unwrap().kind, SleepKind::WokeUp);
        clock.advance(Duration::hours(16));
        assert_eq!(store.toggle().unwrap().kind, SleepKind::WentToSleep);
    }

    #[test]
    fn subscribers_see_each_successful_mutation_once() {
        let mut store = EntryStore::in_memory().unwrap();
        let seen: Rc<RefCell<Vec<StoreChange>>> = Rc::default();
        let sink = seen.clone();
        let sub = store.subscribe(move |c| sink.borrow_mut().push(c.clone()));

        let ev = store.create_event(at(1), SleepKind::WentToSleep).unwrap();
        let upd = store.update_event(ev.id, at(2), SleepKind::WentToSleep).unwrap();
        let _ = store.delete_event(EventId(12345));
        store.delete_event(ev.id).unwrap();

        assert_eq!(
            *seen.borrow(),
            vec![
                StoreChange::Created(ev.clone()),
                StoreChange::Updated {
                    before: ev,
                    after: upd.clone()
                },
                StoreChange::Deleted(upd),
            ]
        );

        assert!(store.unsubscribe(sub));
        assert!(!store.unsubscribe(sub));
        store.create_event(at(3), SleepKind::WokeUp).unwrap();
        assert_eq!(seen.borrow().len(), 3);
    }

    #[test]
    fn failed_writes_publish_nothing() {
        let repo = FlakyRepository::new();
        let switch = repo.switch();
        let mut store = EntryStore::new(repo);
        let count = Rc::new(RefCell::new(0));
        let c = count.clone();
        store.subscribe(move |_| *c.borrow_mut() += 1);

        let ev = store.create_event(at(1), SleepKind::WentToSleep).unwrap();
        switch.set(true);

        assert!(matches!(
            store.create_event(at(2), SleepKind::WokeUp),
            Err(AppError::Persistence(_))
        ));
        assert!(matches!(
            store.update_event(ev.id, at(3), SleepKind::WokeUp),
            Err(AppError::Persistence(_))
        ));
        assert!(matches!(
            store.delete_event(ev.id),
            Err(AppError::Persistence(_))
        ));
        assert_eq!(*count.borrow(), 1);

        switch.set(false);
        assert_eq!(store.all_events().unwrap(), vec![ev]);
    }
}
