use crate::event::EventKind;
use serde::Serialize;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};
use tracing::error;

type Observer = Box<dyn Fn(&str) + Send + Sync>;

/// Snapshot of the per-category event counters. A plain value: increments
/// recorded after the snapshot was taken never alter it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub sets: u64,
    pub deletes: u64,
}

impl CacheStats {
    /// Fraction of lookups that hit, in `[0.0, 1.0]`. Zero before any lookup
    /// was recorded.
    pub fn hit_rate(&self) -> f64 {
        let lookups = self.hits + self.misses;
        if lookups == 0 {
            0.0
        } else {
            self.hits as f64 / lookups as f64
        }
    }
}

/// Counts categorized cache events and notifies registered observers.
///
/// Counters are monotonically non-decreasing between resets. The monitor is
/// constructed explicitly and shared by handle; nothing here is process-wide
/// state. Counters are atomic and the observer table is behind an `RwLock`,
/// so a multi-threaded host can share one instance.
pub struct CacheMonitor {
    hits: AtomicU64,
    misses: AtomicU64,
    sets: AtomicU64,
    deletes: AtomicU64,
    observers: RwLock<[Vec<Observer>; 4]>,
}

impl CacheMonitor {
    pub fn new() -> Self {
        Self {
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            sets: AtomicU64::new(0),
            deletes: AtomicU64::new(0),
            observers: RwLock::new([Vec::new(), Vec::new(), Vec::new(), Vec::new()]),
        }
    }

    pub fn record_hit(&self, key: &str) {
        self.record(EventKind::Hit, key);
    }

    pub fn record_miss(&self, key: &str) {
        self.record(EventKind::Miss, key);
    }

    pub fn record_set(&self, key: &str) {
        self.record(EventKind::Set, key);
    }

    pub fn record_delete(&self, key: &str) {
        self.record(EventKind::Delete, key);
    }

    /// Increments the counter for `kind`, then synchronously notifies that
    /// kind's observers in registration order, passing the key. The counter
    /// is updated before dispatch, and a panicking observer is contained per
    /// callback so the remaining observers still fire.
    pub fn record(&self, kind: EventKind, key: &str) {
        self.counter(kind).fetch_add(1, Ordering::Relaxed);

        let observers = self.observers.read().unwrap_or_else(PoisonError::into_inner);
        for observer in &observers[kind.slot()] {
            if catch_unwind(AssertUnwindSafe(|| observer(key))).is_err() {
                error!(event = kind.as_str(), key, "cache observer panicked");
            }
        }
    }

    /// Returns a snapshot copy of the current counters.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            sets: self.sets.load(Ordering::Relaxed),
            deletes: self.deletes.load(Ordering::Relaxed),
        }
    }

    /// Zeroes all four counters. Observer registrations are untouched.
    pub fn reset(&self) {
        for counter in [&self.hits, &self.misses, &self.sets, &self.deletes] {
            counter.store(0, Ordering::Relaxed);
        }
    }

    /// Registers an observer for `kind`. Observers fire synchronously, in
    /// registration order, with the recorded key. There is no unsubscribe.
    pub fn on<F>(&self, kind: EventKind, observer: F)
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        let mut observers = self.observers.write().unwrap_or_else(PoisonError::into_inner);
        observers[kind.slot()].push(Box::new(observer));
    }

    fn counter(&self, kind: EventKind) -> &AtomicU64 {
        match kind {
            EventKind::Hit => &self.hits,
            EventKind::Miss => &self.misses,
            EventKind::Set => &self.sets,
            EventKind::Delete => &self.deletes,
        }
    }
}

impl Default for CacheMonitor {
    fn default() -> Self {
        Self::new()
    }
}
