//! crates/capture/src/registry.rs
//! Owner of the shared settings and sink; factory for category loggers.

use std::sync::Arc;

use dashmap::DashMap;

use crate::config::CaptureConfig;
use crate::error::CaptureError;
use crate::logger::CaptureLogger;
use crate::sink::CaptureSink;

/// Single owner of the capture settings and sink.
///
/// The registry hands out exactly one [`CaptureLogger`] per category name:
/// concurrent first-time requests for the same category publish a single
/// instance, and every later request returns that same `Arc`. Category
/// identity is case-sensitive; the sink's category *queries* are not.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use capture::{CaptureConfig, CaptureRegistry};
///
/// let registry = CaptureRegistry::new(CaptureConfig::default());
/// let first = registry.logger("Net.Client").unwrap();
/// let second = registry.logger("Net.Client").unwrap();
/// assert!(Arc::ptr_eq(&first, &second));
/// ```
#[derive(Debug)]
pub struct CaptureRegistry {
    config: Arc<CaptureConfig>,
    sink: Arc<CaptureSink>,
    loggers: DashMap<String, Arc<CaptureLogger>>,
}

impl CaptureRegistry {
    /// Creates a registry and its sink from fixed settings.
    #[must_use]
    pub fn new(config: CaptureConfig) -> Self {
        let config = Arc::new(config);
        let sink = Arc::new(CaptureSink::new(config.capacity()));
        Self {
            config,
            sink,
            loggers: DashMap::new(),
        }
    }

    /// Returns the logger for `category`, creating it on first request.
    ///
    /// Creation is idempotent and race-free: the map's entry lock guarantees
    /// one published instance per category. Repeat lookups take the
    /// read-only fast path.
    ///
    /// # Errors
    ///
    /// Returns [`CaptureError::EmptyCategory`] when `category` is empty.
    pub fn logger(&self, category: &str) -> Result<Arc<CaptureLogger>, CaptureError> {
        if category.is_empty() {
            return Err(CaptureError::EmptyCategory);
        }
        if let Some(existing) = self.loggers.get(category) {
            return Ok(Arc::clone(existing.value()));
        }
        let logger = self
            .loggers
            .entry(category.to_owned())
            .or_insert_with(|| {
                Arc::new(CaptureLogger::new(
                    Arc::from(category),
                    Arc::clone(&self.config),
                    Arc::clone(&self.sink),
                ))
            });
        Ok(Arc::clone(logger.value()))
    }

    /// Returns the sink owned by this registry.
    #[must_use]
    pub fn sink(&self) -> &Arc<CaptureSink> {
        &self.sink
    }

    /// Returns the settings the registry was built with.
    #[must_use]
    pub fn config(&self) -> &CaptureConfig {
        &self.config
    }

    /// Returns how many distinct categories have been handed out.
    #[must_use]
    pub fn logger_count(&self) -> usize {
        self.loggers.len()
    }
}

impl Default for CaptureRegistry {
    fn default() -> Self {
        Self::new(CaptureConfig::default())
    }
}
