//! crates/capture/src/event_id.rs
//! Numeric event identity attached to captured entries for correlation.

use std::fmt;

/// Identifier correlating related log entries.
///
/// An event id pairs a numeric value with an optional symbolic name. Ids are
/// not required to be unique; producers reuse them to tag recurring events.
/// The default id is `0` with no name.
///
/// # Examples
///
/// ```
/// use capture::EventId;
///
/// let plain = EventId::from(42);
/// assert_eq!(plain.id(), 42);
/// assert_eq!(plain.name(), None);
///
/// let named = EventId::named(7, "startup");
/// assert_eq!(named.name(), Some("startup"));
/// assert_eq!(named.to_string(), "7");
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct EventId {
    id: i64,
    name: Option<String>,
}

impl EventId {
    /// Creates an event id without a symbolic name.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self { id, name: None }
    }

    /// Creates an event id with a symbolic name.
    #[must_use]
    pub fn named(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
        }
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// Returns the symbolic name, if one was supplied.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl From<i64> for EventId {
    fn from(id: i64) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}
