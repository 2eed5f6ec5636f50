//! crates/capture/src/level.rs
//! Ordered severity levels shared by loggers, entries, and queries.

use std::fmt;
use std::str::FromStr;

/// Severity of a captured log entry.
///
/// The ordering runs from least to most severe, with [`LogLevel::None`]
/// above every real level. `None` is the "never emit" sentinel: it is not a
/// severity an entry can carry, and a minimum level of `None` disables every
/// producer.
///
/// # Examples
///
/// ```
/// use capture::LogLevel;
///
/// assert!(LogLevel::Trace < LogLevel::Debug);
/// assert!(LogLevel::Error < LogLevel::Critical);
/// assert!(LogLevel::Critical < LogLevel::None);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum LogLevel {
    /// Most detailed diagnostics.
    Trace,
    /// Interactive-debugging diagnostics.
    Debug,
    /// General application flow.
    Information,
    /// Abnormal but recoverable events.
    Warning,
    /// Failures of the current operation.
    Error,
    /// Unrecoverable application failures.
    Critical,
    /// Sentinel that never matches an emitted entry.
    None,
}

impl LogLevel {
    /// Returns the lowercase name used when parsing and displaying the level.
    ///
    /// # Examples
    ///
    /// ```
    /// use capture::LogLevel;
    ///
    /// assert_eq!(LogLevel::Information.as_str(), "information");
    /// assert_eq!(LogLevel::None.as_str(), "none");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Information => "information",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Critical => "critical",
            Self::None => "none",
        }
    }

    /// Returns the four-letter code rendered at the start of an entry.
    ///
    /// Levels without a dedicated code render as their lowercase name.
    ///
    /// # Examples
    ///
    /// ```
    /// use capture::LogLevel;
    ///
    /// assert_eq!(LogLevel::Debug.short_code(), "dbug");
    /// assert_eq!(LogLevel::Error.short_code(), "fail");
    /// assert_eq!(LogLevel::None.short_code(), "none");
    /// ```
    #[must_use]
    pub const fn short_code(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "dbug",
            Self::Information => "info",
            Self::Warning => "warn",
            Self::Error => "fail",
            Self::Critical => "crit",
            Self::None => "none",
        }
    }

    /// Reports whether this is the "never emit" sentinel.
    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`LogLevel`] from a string fails.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseLevelError {
    _private: (),
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unrecognised log level")
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "information" => Ok(Self::Information),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "critical" => Ok(Self::Critical),
            "none" => Ok(Self::None),
            _ => Err(ParseLevelError { _private: () }),
        }
    }
}
