//! crates/capture/src/sink.rs
//! Bounded, thread-safe store of captured entries with FIFO eviction.

use std::collections::VecDeque;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::entry::LogEntry;
use crate::level::LogLevel;

/// Bounded FIFO store of captured log entries.
///
/// The sink is filled by the loggers a [`CaptureRegistry`](crate::CaptureRegistry)
/// hands out and queried by inspection code, concurrently and without
/// external synchronisation. Entries are shared as [`Arc`]s, so snapshots
/// clone pointers rather than payloads and the internal lock is held only
/// for the push or the copy-out.
///
/// # Examples
///
/// ```
/// use capture::{CaptureConfig, CaptureRegistry};
///
/// let registry = CaptureRegistry::new(CaptureConfig::default());
/// registry.logger("Worker").unwrap().info("started");
///
/// let sink = registry.sink();
/// assert_eq!(sink.len(), 1);
/// assert_eq!(sink.entries()[0].message(), "started");
/// ```
#[derive(Debug)]
pub struct CaptureSink {
    capacity: NonZeroUsize,
    entries: Mutex<VecDeque<Arc<LogEntry>>>,
}

impl CaptureSink {
    pub(crate) fn new(capacity: NonZeroUsize) -> Self {
        Self {
            capacity,
            entries: Mutex::new(VecDeque::with_capacity(capacity.get().min(64))),
        }
    }

    // A poisoned lock still guards a structurally valid queue; recover it.
    fn entries_guard(&self) -> MutexGuard<'_, VecDeque<Arc<LogEntry>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn append(&self, entry: LogEntry) {
        let mut entries = self.entries_guard();
        entries.push_back(Arc::new(entry));
        while entries.len() > self.capacity.get() {
            entries.pop_front();
        }
    }

    /// Returns a snapshot of the current contents, oldest first.
    #[must_use]
    pub fn entries(&self) -> Vec<Arc<LogEntry>> {
        self.entries_guard().iter().cloned().collect()
    }

    /// Returns the entries whose category matches `name`, ignoring ASCII
    /// case, oldest first.
    #[must_use]
    pub fn entries_for_category(&self, name: &str) -> Vec<Arc<LogEntry>> {
        self.entries_guard()
            .iter()
            .filter(|entry| entry.category().eq_ignore_ascii_case(name))
            .cloned()
            .collect()
    }

    /// Returns the entries emitted at or above `level`, oldest first.
    #[must_use]
    pub fn entries_at_or_above(&self, level: LogLevel) -> Vec<Arc<LogEntry>> {
        self.entries_guard()
            .iter()
            .filter(|entry| entry.level() >= level)
            .cloned()
            .collect()
    }

    /// Returns the most recently appended entry, if any.
    #[must_use]
    pub fn latest(&self) -> Option<Arc<LogEntry>> {
        self.entries_guard().back().cloned()
    }

    /// Removes every retained entry.
    ///
    /// An append racing with `clear` lands either before or after it; no
    /// stronger cross-call atomicity is promised.
    pub fn clear(&self) {
        self.entries_guard().clear();
    }

    /// Returns how many entries are currently retained.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries_guard().len()
    }

    /// Reports whether the sink holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries_guard().is_empty()
    }

    /// Returns the maximum number of entries retained before eviction.
    #[must_use]
    pub const fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }
}
