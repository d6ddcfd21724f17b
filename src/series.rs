//! Bounded Series Store
//! 
//! Insertion-ordered history of records for one signal, capped at
//! `HISTORY_CAPACITY`. Appending past the cap drops the oldest record.

use chrono::{Duration, NaiveDateTime};
use std::collections::VecDeque;

/// Six days of hourly samples.
pub const HISTORY_CAPACITY: usize = 144;

/// Synthetic hourly records present at start-up.
pub const SEED_HOURS: usize = 24;

#[derive(Debug, Clone)]
pub struct SeriesStore<T> {
    records: VecDeque<T>,
}

impl<T: Clone> SeriesStore<T> {
    fn new() -> Self {
        Self { records: VecDeque::with_capacity(HISTORY_CAPACITY + 1) }
    }

    /// Store pre-filled with `SEED_HOURS` records, one per hour ending an
    /// hour before `now`, oldest first.
    pub fn seeded(now: NaiveDateTime, mut make: impl FnMut(NaiveDateTime) -> T) -> Self {
        let mut store = Self::new();
        for timestamp in seed_timestamps(now) {
            store.append(make(timestamp));
        }
        store
    }

    /// Push `record` onto the tail, returning the evicted head if the store
    /// was already full.
    pub fn append(&mut self, record: T) -> Option<T> {
        self.records.push_back(record);
        if self.records.len() > HISTORY_CAPACITY {
            self.records.pop_front()
        } else {
            None
        }
    }

    /// Every record, oldest first.
    pub fn snapshot(&self) -> Vec<T> {
        self.records.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

}

/// `now - (24 - i)` hours for `i` in `0..24`.
pub fn seed_timestamps(now: NaiveDateTime) -> impl Iterator<Item = NaiveDateTime> {
    (0..SEED_HOURS).map(move |i| now - Duration::hours((SEED_HOURS - i) as i64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 14)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .expect("valid date")
    }

    #[test]
    fn test_seeded_store_is_hourly_oldest_first() {
        let now = noon();
        let store = SeriesStore::seeded(now, |ts| ts);
        let records = store.snapshot();

        assert_eq!(records.len(), SEED_HOURS);
        assert_eq!(records[0], now - Duration::hours(24));
        assert_eq!(records[SEED_HOURS - 1], now - Duration::hours(1));
        for pair in records.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::hours(1));
        }
    }

    #[test]
    fn test_append_grows_until_capacity() {
        let mut store = SeriesStore::new();
        for i in 0..HISTORY_CAPACITY {
            assert!(store.append(i).is_none());
        }
        assert_eq!(store.len(), HISTORY_CAPACITY);
        assert_eq!(store.snapshot().last(), Some(&(HISTORY_CAPACITY - 1)));
    }

    #[test]
    fn test_eviction_drops_head_only() {
        let mut store = SeriesStore::new();
        for i in 0..HISTORY_CAPACITY {
            store.append(i);
        }

        assert_eq!(store.append(1_000), Some(0));
        assert_eq!(store.append(1_001), Some(1));

        let records = store.snapshot();
        assert_eq!(records.len(), HISTORY_CAPACITY);
        assert_eq!(records[0], 2);
        assert_eq!(records[HISTORY_CAPACITY - 2], 1_000);
        assert_eq!(records[HISTORY_CAPACITY - 1], 1_001);
    }

    #[test]
    fn test_snapshot_does_not_mutate() {
        let mut store = SeriesStore::seeded(noon(), |ts| ts);
        let before = store.snapshot();
        let again = store.snapshot();
        assert_eq!(before, again);
        store.append(noon());
        assert_eq!(store.len(), SEED_HOURS + 1);
        assert_eq!(before.len(), SEED_HOURS);
    }
}
