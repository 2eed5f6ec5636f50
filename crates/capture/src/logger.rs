//! crates/capture/src/logger.rs
//! Per-category frontend that gates, formats, and captures log events.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::config::CaptureConfig;
use crate::entry::{CapturedError, LogEntry};
use crate::event_id::EventId;
use crate::level::LogLevel;
use crate::scope::{self, ScopeGuard};
use crate::sink::CaptureSink;

/// Category-scoped logger handed out by a [`CaptureRegistry`](crate::CaptureRegistry).
///
/// The logger gates every call against the shared settings, formats the
/// message only when the event is enabled, snapshots the active scopes, and
/// forwards the finished entry to the sink. Instances are identity-stable:
/// the registry returns the same `Arc` for the same category for its whole
/// lifetime.
///
/// # Examples
///
/// ```
/// use capture::{CaptureConfig, CaptureRegistry, LogLevel};
///
/// let registry = CaptureRegistry::new(
///     CaptureConfig::default().with_min_level(LogLevel::Warning),
/// );
/// let logger = registry.logger("Payments").unwrap();
///
/// assert!(!logger.is_enabled(LogLevel::Information));
/// logger.warn("settlement delayed");
/// assert_eq!(registry.sink().len(), 1);
/// ```
#[derive(Debug)]
pub struct CaptureLogger {
    category: Arc<str>,
    config: Arc<CaptureConfig>,
    sink: Arc<CaptureSink>,
}

impl CaptureLogger {
    pub(crate) fn new(category: Arc<str>, config: Arc<CaptureConfig>, sink: Arc<CaptureSink>) -> Self {
        Self {
            category,
            config,
            sink,
        }
    }

    /// Returns the category this logger emits under.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Reports whether an event at `level` would be captured.
    ///
    /// [`LogLevel::None`] is never enabled. Below the configured minimum
    /// level the answer is `false` without consulting the filter; at or
    /// above it, a configured filter has the final say.
    #[must_use]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        if level.is_none() || level < self.config.min_level() {
            return false;
        }
        match self.config.filter() {
            Some(filter) => filter(&self.category, level),
            None => true,
        }
    }

    /// Captures one event.
    ///
    /// When the level is disabled this is a complete no-op: `format` is not
    /// invoked and nothing reaches the sink. When enabled, `format` produces
    /// the message text; a panic inside it propagates to the caller
    /// unhandled. An empty formatted message drops the event silently.
    /// Otherwise the active scopes are snapshotted, the capture time
    /// stamped, and the entry appended.
    pub fn log<F>(
        &self,
        level: LogLevel,
        event_id: EventId,
        state: Option<Value>,
        error: Option<CapturedError>,
        format: F,
    ) where
        F: FnOnce() -> String,
    {
        if !self.is_enabled(level) {
            return;
        }
        let message = format();
        if message.is_empty() {
            return;
        }
        self.sink.append(LogEntry::new(
            level,
            event_id,
            Arc::clone(&self.category),
            message,
            error,
            state,
            scope::snapshot(),
        ));
    }

    /// Captures a [`LogLevel::Trace`] message.
    pub fn trace(&self, message: impl fmt::Display) {
        self.emit(LogLevel::Trace, message);
    }

    /// Captures a [`LogLevel::Debug`] message.
    pub fn debug(&self, message: impl fmt::Display) {
        self.emit(LogLevel::Debug, message);
    }

    /// Captures a [`LogLevel::Information`] message.
    pub fn info(&self, message: impl fmt::Display) {
        self.emit(LogLevel::Information, message);
    }

    /// Captures a [`LogLevel::Warning`] message.
    pub fn warn(&self, message: impl fmt::Display) {
        self.emit(LogLevel::Warning, message);
    }

    /// Captures a [`LogLevel::Error`] message.
    pub fn error(&self, message: impl fmt::Display) {
        self.emit(LogLevel::Error, message);
    }

    /// Captures a [`LogLevel::Critical`] message.
    pub fn critical(&self, message: impl fmt::Display) {
        self.emit(LogLevel::Critical, message);
    }

    fn emit(&self, level: LogLevel, message: impl fmt::Display) {
        self.log(level, EventId::default(), None, None, || message.to_string());
    }

    /// Pushes `value` as the innermost scope for the current thread.
    ///
    /// Entries captured while the returned guard is alive carry the scope;
    /// see [`scope::begin`].
    pub fn begin_scope(&self, value: impl Into<Value>) -> ScopeGuard {
        scope::begin(value)
    }
}
