use crate::event::EventKind;
use crate::monitor::CacheMonitor;
use std::sync::Arc;
use tracing::{info, warn};

/// Registers one observer per event category that forwards each event to the
/// tracing pipeline as a structured record (`event`, `key`, `source`).
/// Misses log at `warn`, everything else at `info`. Transport concerns
/// (console, files, rotation) belong to the subscriber configuration of the
/// host process, not to the monitor.
pub fn install_tracing_observers(monitor: &CacheMonitor, source: &str) {
    let source: Arc<str> = Arc::from(source);
    for kind in EventKind::ALL {
        let source = source.clone();
        monitor.on(kind, move |key| match kind {
            EventKind::Hit => info!(event = "hit", key, source = source.as_ref(), "cache hit"),
            EventKind::Miss => warn!(event = "miss", key, source = source.as_ref(), "cache miss"),
            EventKind::Set => info!(event = "set", key, source = source.as_ref(), "cache set"),
            EventKind::Delete => {
                info!(event = "delete", key, source = source.as_ref(), "cache delete");
            }
        });
    }
}
