//! crates/capture/src/config.rs
//! Capture settings shared by every logger the registry hands out.

use std::fmt;
use std::num::NonZeroUsize;
use std::sync::Arc;

use crate::level::LogLevel;

/// Predicate deciding whether a category may emit at a level.
///
/// The filter runs only after the minimum-level gate has passed, so it can
/// suppress categories but never re-enable a level below the minimum.
pub type CategoryFilter = dyn Fn(&str, LogLevel) -> bool + Send + Sync;

/// Number of entries the sink retains when no capacity is configured.
pub const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(1024) {
    Some(capacity) => capacity,
    None => unreachable!(),
};

/// Settings fixed at registry construction.
///
/// Capacity is a [`NonZeroUsize`], so the positive-capacity requirement is
/// checked by the type system rather than at run time.
///
/// # Examples
///
/// ```
/// use std::num::NonZeroUsize;
/// use capture::{CaptureConfig, LogLevel};
///
/// let config = CaptureConfig::default()
///     .with_min_level(LogLevel::Warning)
///     .with_capacity(NonZeroUsize::new(16).unwrap())
///     .with_filter(|category, _level| category.starts_with("App"));
///
/// assert_eq!(config.min_level(), LogLevel::Warning);
/// assert_eq!(config.capacity().get(), 16);
/// ```
#[derive(Clone)]
pub struct CaptureConfig {
    min_level: LogLevel,
    capacity: NonZeroUsize,
    filter: Option<Arc<CategoryFilter>>,
}

impl CaptureConfig {
    /// Creates the default settings: minimum level `Debug`, capacity 1024,
    /// no filter.
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::Debug,
            capacity: DEFAULT_CAPACITY,
            filter: None,
        }
    }

    /// Sets the minimum level producers must clear before the filter runs.
    #[must_use]
    pub fn with_min_level(mut self, min_level: LogLevel) -> Self {
        self.min_level = min_level;
        self
    }

    /// Sets how many entries the sink retains before evicting the oldest.
    #[must_use]
    pub fn with_capacity(mut self, capacity: NonZeroUsize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Installs a category/level predicate consulted after the level gate.
    #[must_use]
    pub fn with_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&str, LogLevel) -> bool + Send + Sync + 'static,
    {
        self.filter = Some(Arc::new(filter));
        self
    }

    /// Returns the configured minimum level.
    #[must_use]
    pub const fn min_level(&self) -> LogLevel {
        self.min_level
    }

    /// Returns the configured sink capacity.
    #[must_use]
    pub const fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }

    /// Returns the configured filter, when one is installed.
    #[must_use]
    pub fn filter(&self) -> Option<&CategoryFilter> {
        self.filter.as_deref()
    }
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CaptureConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaptureConfig")
            .field("min_level", &self.min_level)
            .field("capacity", &self.capacity)
            .field("filter", &self.filter.as_ref().map(|_| "<predicate>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = CaptureConfig::default();
        assert_eq!(config.min_level(), LogLevel::Debug);
        assert_eq!(config.capacity(), DEFAULT_CAPACITY);
        assert!(config.filter().is_none());
    }

    #[test]
    fn builders_override_each_setting() {
        let capacity = NonZeroUsize::new(5).unwrap();
        let config = CaptureConfig::new()
            .with_min_level(LogLevel::Error)
            .with_capacity(capacity)
            .with_filter(|_, level| level == LogLevel::Critical);

        assert_eq!(config.min_level(), LogLevel::Error);
        assert_eq!(config.capacity(), capacity);
        let filter = config.filter().unwrap();
        assert!(filter("any", LogLevel::Critical));
        assert!(!filter("any", LogLevel::Error));
    }

    #[test]
    fn clone_shares_the_filter() {
        let config = CaptureConfig::new().with_filter(|category, _| category == "Keep");
        let cloned = config.clone();
        assert!(cloned.filter().unwrap()("Keep", LogLevel::Debug));
    }

    #[test]
    fn debug_output_hides_the_predicate_body() {
        let config = CaptureConfig::new().with_filter(|_, _| true);
        let rendered = format!("{config:?}");
        assert!(rendered.contains("CaptureConfig"));
        assert!(rendered.contains("<predicate>"));
    }
}
