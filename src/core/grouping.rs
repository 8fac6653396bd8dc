//! Day-bucket view over the entry set.
//!
//! Pure functions: the buckets are rebuilt from scratch on every call.

use crate::models::day_bucket::DayBucket;
use crate::models::event::SleepEvent;
use chrono::{Local, NaiveDate, TimeZone};
use std::collections::BTreeMap;

/// Group events by local calendar day.
pub fn group_by_day(events: &[SleepEvent]) -> Vec<DayBucket> {
    group_by_day_in(events, &Local)
}

/// Group events by calendar day in `tz`.
///
/// Two entries share a bucket iff their wall-clock dates in `tz` are equal.
/// Buckets ascend by day, entries inside a bucket by (timestamp, id).
pub fn group_by_day_in<Tz: TimeZone>(events: &[SleepEvent], tz: &Tz) -> Vec<DayBucket> {
    let mut days: BTreeMap<NaiveDate, Vec<SleepEvent>> = BTreeMap::new();

    for ev in events {
        let day = ev.timestamp.with_timezone(tz).date_naive();
        days.entry(day).or_default().push(ev.clone());
    }

    days.into_iter()
        .map(|(day, mut events)| {
            events.sort_by_key(|e| e.chrono_key());
            DayBucket { day, events }
        })
        .collect()
}

/// Bucket order, then in-bucket order.
pub fn flatten(buckets: &[DayBucket]) -> Vec<SleepEvent> {
    buckets
        .iter()
        .flat_map(|b| b.events.iter().cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::EventId;
    use crate::models::event_kind::SleepKind;
    use chrono::{FixedOffset, Utc};

    fn ev(id: i64, ts: chrono::DateTime<Utc>, kind: SleepKind) -> SleepEvent {
        SleepEvent::new(EventId(id), ts, kind)
    }

    fn cet() -> FixedOffset {
        FixedOffset::east_opt(3600).unwrap()
    }

    #[test]
    fn empty_input_gives_no_buckets() {
        assert!(group_by_day_in(&[], &Utc).is_empty());
    }

    #[test]
    fn splits_on_local_midnight_not_on_24h_windows() {
        let tz = cet();
        // 23:30 and 00:30 local, one hour apart
        let late = tz.with_ymd_and_hms(2026, 10, 18, 23, 30, 0).unwrap();
        let early = tz.with_ymd_and_hms(2026, 10, 19, 0, 30, 0).unwrap();

        let events = vec![
            ev(1, late.with_timezone(&Utc), SleepKind::WentToSleep),
            ev(2, early.with_timezone(&Utc), SleepKind::WokeUp),
        ];

        let buckets = group_by_day_in(&events, &tz);
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].day, NaiveDate::from_ymd_opt(2026, 10, 18).unwrap());
        assert_eq!(buckets[1].day, NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
        assert!(buckets.iter().all(|b| b.len() == 1 && !b.is_empty()));

        // the same instants are one UTC day
        assert_eq!(group_by_day_in(&events, &Utc).len(), 1);
    }

    #[test]
    fn buckets_and_entries_are_ascending() {
        let t = |d, h| Utc.with_ymd_and_hms(2026, 5, d, h, 0, 0).unwrap();
        let events = vec![
            ev(1, t(3, 7), SleepKind::WokeUp),
            ev(2, t(1, 23), SleepKind::WentToSleep),
            ev(3, t(3, 1), SleepKind::WentToSleep),
            ev(4, t(1, 6), SleepKind::WokeUp),
        ];

        let buckets = group_by_day_in(&events, &Utc);
        let days: Vec<u32> = buckets.iter().map(|b| chrono::Datelike::day(&b.day)).collect();
        assert_eq!(days, vec![1, 3]);

        let ids: Vec<i64> = flatten(&buckets).iter().map(|e| e.id.0).collect();
        assert_eq!(ids, vec![4, 2, 3, 1]);
    }

    #[test]
    fn flatten_keeps_every_event_once() {
        let base = Utc.with_ymd_and_hms(2026, 2, 27, 12, 0, 0).unwrap();
        let events: Vec<SleepEvent> = (0..40)
            .map(|i| {
                let kind = if i % 3 == 0 {
                    SleepKind::WokeUp
                } else {
                    SleepKind::WentToSleep
                };
                ev(i, base + chrono::Duration::hours((i * 37) % 150), kind)
            })
            .collect();

        let flat = flatten(&group_by_day_in(&events, &cet()));
        assert_eq!(flat.len(), events.len());

        let mut expected = events.clone();
        expected.sort_by_key(|e| (e.timestamp.with_timezone(&cet()).date_naive(), e.chrono_key()));
        assert_eq!(flat, expected);
    }

    #[test]
    fn equal_timestamps_order_by_id() {
        let ts = Utc.with_ymd_and_hms(2026, 7, 4, 8, 0, 0).unwrap();
        let events = vec![
            ev(9, ts, SleepKind::WokeUp),
            ev(3, ts, SleepKind::WokeUp),
        ];
        let ids: Vec<i64> = flatten(&group_by_day_in(&events, &Utc))
            .iter()
            .map(|e| e.id.0)
            .collect();
        assert_eq!(ids, vec![3, 9]);
    }
}
