//! crates/capture/src/tracing_bridge.rs
//! Bridge routing tracing events into a capture registry.
//!
//! The layer lets code instrumented with the standard tracing macros feed
//! the capture sink without knowing about it: the event target becomes the
//! category, the tracing level maps onto [`LogLevel`], the `message` field
//! becomes the formatted message, and every other recorded field lands in
//! the entry's structured state.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use capture::{CaptureConfig, CaptureRegistry};
//! use capture::tracing_bridge::CaptureLayer;
//! use tracing_subscriber::layer::SubscriberExt;
//! use tracing_subscriber::util::SubscriberInitExt;
//!
//! let registry = Arc::new(CaptureRegistry::new(CaptureConfig::default()));
//! tracing_subscriber::registry()
//!     .with(CaptureLayer::new(Arc::clone(&registry)))
//!     .init();
//!
//! tracing::info!(target: "app::startup", port = 8080, "listening");
//! assert_eq!(registry.sink().len(), 1);
//! ```

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use crate::event_id::EventId;
use crate::level::LogLevel;
use crate::registry::CaptureRegistry;

/// Tracing layer that forwards events into a [`CaptureRegistry`].
pub struct CaptureLayer {
    registry: Arc<CaptureRegistry>,
}

impl CaptureLayer {
    /// Creates a layer feeding `registry`.
    #[must_use]
    pub const fn new(registry: Arc<CaptureRegistry>) -> Self {
        Self { registry }
    }

    /// Maps a tracing level onto the capture severity scale.
    ///
    /// Tracing has no counterpart for [`LogLevel::Critical`]; `ERROR` maps
    /// to [`LogLevel::Error`].
    #[must_use]
    pub const fn map_level(level: &Level) -> LogLevel {
        match *level {
            Level::ERROR => LogLevel::Error,
            Level::WARN => LogLevel::Warning,
            Level::INFO => LogLevel::Information,
            Level::DEBUG => LogLevel::Debug,
            Level::TRACE => LogLevel::Trace,
        }
    }
}

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = Self::map_level(metadata.level());
        let Ok(logger) = self.registry.logger(metadata.target()) else {
            return;
        };
        if !logger.is_enabled(level) {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);
        let EventVisitor { message, fields } = visitor;

        let state = if fields.is_empty() {
            None
        } else {
            Some(Value::Object(fields))
        };
        logger.log(level, EventId::default(), state, None, || {
            message.unwrap_or_default()
        });
    }
}

/// Visitor splitting the `message` field from the structured rest.
#[derive(Default)]
struct EventVisitor {
    message: Option<String>,
    fields: Map<String, Value>,
}

impl tracing::field::Visit for EventVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        } else {
            self.fields
                .insert(field.name().to_owned(), Value::from(format!("{value:?}")));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        } else {
            self.fields
                .insert(field.name().to_owned(), Value::from(value));
        }
    }

    fn record_i64(&mut self, field: &tracing::field::Field, value: i64) {
        self.fields
            .insert(field.name().to_owned(), Value::from(value));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.fields
            .insert(field.name().to_owned(), Value::from(value));
    }

    fn record_f64(&mut self, field: &tracing::field::Field, value: f64) {
        self.fields
            .insert(field.name().to_owned(), Value::from(value));
    }

    fn record_bool(&mut self, field: &tracing::field::Field, value: bool) {
        self.fields
            .insert(field.name().to_owned(), Value::from(value));
    }
}
