//! Capacity-bounded audit history.

use std::collections::VecDeque;
use std::num::NonZeroUsize;

use chrono::{DateTime, Utc};

/// A single recorded write: when it happened and the value that was committed.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditEntry<T> {
    recorded_at: DateTime<Utc>,
    value: T,
}

impl<T> AuditEntry<T> {
    /// Creates a new entry.
    pub fn new(recorded_at: DateTime<Utc>, value: T) -> Self {
        Self { recorded_at, value }
    }

    /// Returns the instant the write was recorded.
    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }

    /// Returns the committed value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consumes the entry and returns the committed value.
    pub fn into_value(self) -> T {
        self.value
    }
}

/// Bounded, oldest-first history of committed values.
///
/// Holds at most `capacity` entries. Appending to a full log evicts the
/// oldest entry first, so the log always contains the most recent writes.
///
/// The log is read-only outside this crate: it is filled by
/// [`AuditRecorder`](crate::AuditRecorder) and exposed through
/// [`Projection::history`](crate::Projection::history).
///
/// # Example
///
/// ```
/// use mediated_field::MediatedValue;
///
/// let mut balance = MediatedValue::builder("balance", 100.0)
///     .audited(2)
///     .build()
///     .expect("valid configuration");
///
/// balance.set(115.0);
/// balance.set(142.0);
/// balance.set(67.0);
///
/// let history = balance.projected().history().expect("audited field");
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.values(), vec![142.0, 67.0]);
/// ```
#[derive(Debug, Clone)]
pub struct AuditLog<T> {
    capacity: NonZeroUsize,
    entries: VecDeque<AuditEntry<T>>,
}

impl<T> AuditLog<T> {
    /// Creates an empty log that holds at most `capacity` entries.
    pub(crate) fn new(capacity: NonZeroUsize) -> Self {
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity.get()),
        }
    }

    /// Appends an entry, evicting the oldest one if the log is full.
    pub(crate) fn append(&mut self, entry: AuditEntry<T>) {
        self.entries.push_back(entry);
        if self.entries.len() > self.capacity.get() {
            self.entries.pop_front();
            tracing::trace!(capacity = self.capacity.get(), "evicted oldest audit entry");
        }
    }

    /// Returns the maximum number of entries retained.
    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Returns the number of entries currently retained.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &AuditEntry<T>> + '_ {
        self.entries.iter()
    }

    /// Returns the most recent entry, if any.
    pub fn latest(&self) -> Option<&AuditEntry<T>> {
        self.entries.back()
    }
}

impl<T: Clone> AuditLog<T> {
    /// Returns an owned copy of the entries, oldest first.
    pub fn snapshot(&self) -> Vec<AuditEntry<T>> {
        self.entries.iter().cloned().collect()
    }

    /// Returns just the recorded values, oldest first.
    pub fn values(&self) -> Vec<T> {
        self.entries.iter().map(|e| e.value.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn capacity(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn entry_at(second: i64, value: i32) -> AuditEntry<i32> {
        let epoch = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        AuditEntry::new(epoch + Duration::seconds(second), value)
    }

    #[test]
    fn audit_log_starts_empty() {
        let log: AuditLog<i32> = AuditLog::new(capacity(3));

        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert_eq!(log.capacity(), 3);
        assert!(log.latest().is_none());
        assert!(log.snapshot().is_empty());
    }

    #[test]
    fn audit_log_keeps_insertion_order() {
        let mut log = AuditLog::new(capacity(5));
        log.append(entry_at(0, 10));
        log.append(entry_at(1, 20));

        assert_eq!(log.values(), vec![10, 20]);
        assert_eq!(log.latest().map(|e| *e.value()), Some(20));
    }

    #[test]
    fn audit_log_evicts_oldest_when_full() {
        let mut log = AuditLog::new(capacity(3));
        for (i, v) in [1, 2, 3, 4, 5].into_iter().enumerate() {
            log.append(entry_at(i as i64, v));
        }

        assert_eq!(log.len(), 3);
        assert_eq!(log.values(), vec![3, 4, 5]);

        let snapshot = log.snapshot();
        assert_eq!(snapshot[0].recorded_at(), entry_at(2, 0).recorded_at());
    }

    #[test]
    fn audit_log_capacity_one_keeps_latest() {
        let mut log = AuditLog::new(capacity(1));
        log.append(entry_at(0, 1));
        log.append(entry_at(1, 2));

        assert_eq!(log.values(), vec![2]);
    }

    #[test]
    fn snapshot_is_detached_copy() {
        let mut log = AuditLog::new(capacity(2));
        log.append(entry_at(0, 1));
        let snapshot = log.snapshot();

        log.append(entry_at(1, 2));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(log.len(), 2);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the log holds the last `min(n, capacity)` values in order
            #[test]
            fn proptest_log_retains_most_recent(
                cap in 1usize..16,
                values in prop::collection::vec(any::<i32>(), 0..64)
            ) {
                let mut log = AuditLog::new(capacity(cap));
                for (i, v) in values.iter().enumerate() {
                    log.append(entry_at(i as i64, *v));
                }

                let keep = values.len().min(cap);
                prop_assert_eq!(log.len(), keep);
                prop_assert_eq!(log.values(), values[values.len() - keep..].to_vec());
            }
        }
    }
}
