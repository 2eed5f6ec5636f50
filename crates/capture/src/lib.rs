#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `capture` is a bounded, concurrent, in-memory log-capture library. A
//! [`CaptureRegistry`] owns fixed [`CaptureConfig`] settings and one
//! [`CaptureSink`]; producers ask it for a [`CaptureLogger`] per category
//! and emit through that frontend. Enabled events are formatted, stamped,
//! decorated with the thread's active [`scope`] values, and appended to the
//! sink, which retains only the most recent entries up to a fixed capacity.
//! Inspection code queries the sink at any time, concurrently with
//! producers, and can render entries through [`render`].
//!
//! # Design
//!
//! - The registry's category map is a concurrent hash map, so first-time
//!   logger requests racing on one category still publish a single
//!   identity-stable instance.
//! - The sink keeps entries behind one short-lived mutex; entries are
//!   shared `Arc`s, so query snapshots copy pointers, not payloads, and
//!   FIFO eviction runs under the same lock as the append.
//! - Scopes are thread-local; a [`scope::ScopeGuard`] releases its frame on
//!   every exit path, including unwinding.
//! - Producers are never blocked or slowed beyond the append lock; there is
//!   no backpressure, persistence, or transport.
//!
//! # Examples
//!
//! ```
//! use capture::{CaptureConfig, CaptureRegistry, LogLevel};
//!
//! let registry = CaptureRegistry::new(
//!     CaptureConfig::default().with_min_level(LogLevel::Information),
//! );
//! let logger = registry.logger("Orders").unwrap();
//!
//! let _request = logger.begin_scope("request 81");
//! logger.info("order accepted");
//! logger.debug("ignored below the minimum level");
//!
//! let entries = registry.sink().entries();
//! assert_eq!(entries.len(), 1);
//! assert_eq!(entries[0].scopes().len(), 1);
//! ```

mod config;
mod entry;
mod error;
mod event_id;
mod level;
mod logger;
mod registry;
mod sink;

pub mod render;
pub mod scope;
#[cfg(feature = "tracing")]
pub mod tracing_bridge;

pub use config::{CaptureConfig, CategoryFilter, DEFAULT_CAPACITY};
pub use entry::{CapturedError, LogEntry};
pub use error::CaptureError;
pub use event_id::EventId;
pub use level::{LogLevel, ParseLevelError};
pub use logger::CaptureLogger;
pub use registry::CaptureRegistry;
pub use sink::CaptureSink;
