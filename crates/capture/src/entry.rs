//! crates/capture/src/entry.rs
//! Immutable captured log events and the structured error chain they carry.

use std::fmt;
use std::sync::Arc;
use std::time::SystemTime;

use serde_json::Value;

use crate::event_id::EventId;
use crate::level::LogLevel;

/// Structured snapshot of an error and its cause chain.
///
/// Capturing copies the type name, rendered message, and every nested
/// `source()` out of the original error, so the snapshot stays valid after
/// the original has been dropped.
///
/// # Examples
///
/// ```
/// use capture::CapturedError;
///
/// let io = std::io::Error::other("disk offline");
/// let captured = CapturedError::capture(&io);
///
/// assert!(captured.type_name().unwrap().contains("io"));
/// assert_eq!(captured.message(), "disk offline");
/// assert!(captured.cause().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct CapturedError {
    type_name: Option<&'static str>,
    message: String,
    cause: Option<Box<CapturedError>>,
}

impl CapturedError {
    /// Captures `error` and its full `source()` chain.
    ///
    /// The outermost error's concrete type name is recorded; nested causes
    /// are reached through `dyn Error` and keep only their messages.
    #[must_use]
    pub fn capture<E>(error: &E) -> Self
    where
        E: std::error::Error,
    {
        Self {
            type_name: Some(std::any::type_name::<E>()),
            message: error.to_string(),
            cause: error.source().map(|source| Box::new(Self::capture_chain(source))),
        }
    }

    /// Creates a captured error from a bare message, without a type name.
    #[must_use]
    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            type_name: None,
            message: message.into(),
            cause: None,
        }
    }

    fn capture_chain(error: &(dyn std::error::Error + 'static)) -> Self {
        Self {
            type_name: None,
            message: error.to_string(),
            cause: error.source().map(|source| Box::new(Self::capture_chain(source))),
        }
    }

    /// Returns the concrete type name of the captured error, when known.
    #[must_use]
    pub const fn type_name(&self) -> Option<&'static str> {
        self.type_name
    }

    /// Returns the rendered message of this link in the chain.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the nested cause, if the original error had a `source()`.
    #[must_use]
    pub fn cause(&self) -> Option<&CapturedError> {
        self.cause.as_deref()
    }
}

impl fmt::Display for CapturedError {
    /// Renders `Type: message` followed by one `Caused by:` line per cause.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.type_name {
            Some(type_name) => write!(f, "{type_name}: {}", self.message)?,
            None => f.write_str(&self.message)?,
        }
        let mut next = self.cause.as_deref();
        while let Some(cause) = next {
            write!(f, "\nCaused by: {}", cause.message)?;
            next = cause.cause.as_deref();
        }
        Ok(())
    }
}

impl std::error::Error for CapturedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}

/// One captured log event.
///
/// Entries are immutable once constructed: the sink only ever appends or
/// removes whole entries, never edits them. Every field is stamped at
/// capture time by the emitting logger.
///
/// # Examples
///
/// ```
/// use capture::{CaptureConfig, CaptureRegistry, LogLevel};
///
/// let registry = CaptureRegistry::new(CaptureConfig::default());
/// let logger = registry.logger("Demo").unwrap();
/// logger.info("ready");
///
/// let entries = registry.sink().entries();
/// assert_eq!(entries[0].category(), "Demo");
/// assert_eq!(entries[0].level(), LogLevel::Information);
/// assert_eq!(entries[0].message(), "ready");
/// ```
#[derive(Clone, Debug)]
pub struct LogEntry {
    timestamp: SystemTime,
    level: LogLevel,
    event_id: EventId,
    category: Arc<str>,
    message: String,
    error: Option<CapturedError>,
    state: Option<Value>,
    scopes: Vec<Value>,
}

impl LogEntry {
    pub(crate) fn new(
        level: LogLevel,
        event_id: EventId,
        category: Arc<str>,
        message: String,
        error: Option<CapturedError>,
        state: Option<Value>,
        scopes: Vec<Value>,
    ) -> Self {
        Self {
            timestamp: SystemTime::now(),
            level,
            event_id,
            category,
            message,
            error,
            state,
            scopes,
        }
    }

    /// Returns the moment the entry was captured.
    #[must_use]
    pub const fn timestamp(&self) -> SystemTime {
        self.timestamp
    }

    /// Returns the severity the entry was emitted at.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Returns the correlating event id.
    #[must_use]
    pub const fn event_id(&self) -> &EventId {
        &self.event_id
    }

    /// Returns the emitting logger's category.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the fully formatted message text. Never empty.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the captured error, when one was associated with the event.
    #[must_use]
    pub const fn error(&self) -> Option<&CapturedError> {
        self.error.as_ref()
    }

    /// Returns the opaque state value supplied by the producer.
    #[must_use]
    pub const fn state(&self) -> Option<&Value> {
        self.state.as_ref()
    }

    /// Returns the scopes active at capture time, outermost first.
    #[must_use]
    pub fn scopes(&self) -> &[Value] {
        &self.scopes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Outer {
        inner: std::io::Error,
    }

    impl fmt::Display for Outer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("outer failed")
        }
    }

    impl std::error::Error for Outer {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            Some(&self.inner)
        }
    }

    fn sample_entry(message: &str) -> LogEntry {
        LogEntry::new(
            LogLevel::Warning,
            EventId::from(9),
            Arc::from("Sample"),
            message.to_owned(),
            None,
            None,
            Vec::new(),
        )
    }

    #[test]
    fn capture_walks_the_source_chain() {
        let error = Outer {
            inner: std::io::Error::other("disk offline"),
        };
        let captured = CapturedError::capture(&error);

        assert_eq!(captured.message(), "outer failed");
        assert!(captured.type_name().unwrap().contains("Outer"));

        let cause = captured.cause().expect("inner cause captured");
        assert_eq!(cause.message(), "disk offline");
        assert!(cause.cause().is_none());
    }

    #[test]
    fn display_renders_type_and_cause_lines() {
        let error = Outer {
            inner: std::io::Error::other("disk offline"),
        };
        let rendered = CapturedError::capture(&error).to_string();

        let mut lines = rendered.lines();
        let first = lines.next().unwrap();
        assert!(first.ends_with(": outer failed"));
        assert_eq!(lines.next(), Some("Caused by: disk offline"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn from_message_has_no_type_or_cause() {
        let captured = CapturedError::from_message("plain");
        assert_eq!(captured.type_name(), None);
        assert_eq!(captured.to_string(), "plain");
    }

    #[test]
    fn captured_error_acts_as_std_error() {
        let error = Outer {
            inner: std::io::Error::other("disk offline"),
        };
        let captured = CapturedError::capture(&error);
        let dynamic: &dyn std::error::Error = &captured;
        assert_eq!(dynamic.source().unwrap().to_string(), "disk offline");
    }

    #[test]
    fn entry_accessors_expose_captured_fields() {
        let entry = sample_entry("storage degraded");
        assert_eq!(entry.level(), LogLevel::Warning);
        assert_eq!(entry.event_id().id(), 9);
        assert_eq!(entry.category(), "Sample");
        assert_eq!(entry.message(), "storage degraded");
        assert!(entry.error().is_none());
        assert!(entry.state().is_none());
        assert!(entry.scopes().is_empty());
    }

    #[test]
    fn entry_timestamp_is_capture_time() {
        let before = SystemTime::now();
        let entry = sample_entry("timing");
        let after = SystemTime::now();
        assert!(entry.timestamp() >= before);
        assert!(entry.timestamp() <= after);
    }
}
