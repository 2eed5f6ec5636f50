//! crates/capture/src/error.rs
//! Invalid-argument errors surfaced by the capture registry.

use thiserror::Error;

/// Errors returned by capture construction and lookup operations.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum CaptureError {
    /// A logger was requested for an empty category name.
    #[error("logger category must not be empty")]
    EmptyCategory,
}
