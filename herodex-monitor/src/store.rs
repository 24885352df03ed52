use crate::monitor::CacheMonitor;
use std::sync::Arc;

/// Minimal capability interface for a key-value store whose traffic the
/// monitor observes. The store owns eviction, TTLs and storage; the monitor
/// never looks inside it.
pub trait KeyValueStore {
    type Value;

    fn get(&self, key: &str) -> Option<Self::Value>;
    fn insert(&self, key: &str, value: Self::Value);
    fn remove(&self, key: &str) -> Option<Self::Value>;
}

/// Explicit decoration of a store: every call goes through to the inner
/// store, with the outcome recorded on the monitor. Callers hold the
/// decorated handle instead of the bare store.
pub struct MonitoredStore<S> {
    inner: S,
    monitor: Arc<CacheMonitor>,
}

impl<S: KeyValueStore> MonitoredStore<S> {
    pub fn new(inner: S, monitor: Arc<CacheMonitor>) -> Self {
        Self { inner, monitor }
    }

    /// Looks up `key`, recording a hit or a miss depending on the outcome.
    pub fn get(&self, key: &str) -> Option<S::Value> {
        let value = self.inner.get(key);
        if value.is_some() {
            self.monitor.record_hit(key);
        } else {
            self.monitor.record_miss(key);
        }
        value
    }

    /// Stores `value` under `key`, recording a set.
    pub fn insert(&self, key: &str, value: S::Value) {
        self.monitor.record_set(key);
        self.inner.insert(key, value);
    }

    /// Removes `key`, recording a delete whether or not the key was present.
    pub fn remove(&self, key: &str) -> Option<S::Value> {
        self.monitor.record_delete(key);
        self.inner.remove(key)
    }

    pub fn monitor(&self) -> &Arc<CacheMonitor> {
        &self.monitor
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}
