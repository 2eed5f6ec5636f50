//! crates/capture/src/render.rs
//! Human-readable rendering of captured entries for diagnostic output.

use std::borrow::Borrow;
use std::fmt::Write as _;
use std::io::{self, Write};

use crate::entry::LogEntry;

/// Indentation applied to the message line.
const MESSAGE_INDENT: &str = "      ";
/// Indentation applied to the `=>` state and scope lines.
const DETAIL_INDENT: &str = "          ";

/// Renders one entry in the diagnostic text format.
///
/// The first line is `<code>: <category>[<event-id>]`, the message follows
/// indented by six spaces, then one `=> <serialized value>` line for the
/// state (when present) and for each captured scope in capture order. A
/// captured error terminates the rendering with its type, message, and
/// cause chain. No trailing newline is appended.
///
/// # Examples
///
/// ```
/// use capture::{render, CaptureConfig, CaptureRegistry};
///
/// let registry = CaptureRegistry::new(CaptureConfig::default());
/// registry.logger("Startup").unwrap().info("host ready");
///
/// let entry = registry.sink().latest().unwrap();
/// assert_eq!(render::render_entry(&entry), "info: Startup[0]\n      host ready");
/// ```
#[must_use]
pub fn render_entry(entry: &LogEntry) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "{}: {}[{}]\n{MESSAGE_INDENT}{}",
        entry.level().short_code(),
        entry.category(),
        entry.event_id(),
        entry.message(),
    );
    if let Some(state) = entry.state() {
        let _ = write!(out, "\n{DETAIL_INDENT}=> {state}");
    }
    for scope in entry.scopes() {
        let _ = write!(out, "\n{DETAIL_INDENT}=> {scope}");
    }
    if let Some(error) = entry.error() {
        let _ = write!(out, "\n{error}");
    }
    out
}

/// Writes one rendered entry, followed by a newline, to `writer`.
///
/// # Errors
///
/// Propagates any [`io::Error`] from the underlying writer.
pub fn write_entry<W: Write>(writer: &mut W, entry: &LogEntry) -> io::Result<()> {
    writer.write_all(render_entry(entry).as_bytes())?;
    writer.write_all(b"\n")
}

/// Streaming renderer over any [`io::Write`] target.
///
/// Each [`write`](Self::write) renders one entry followed by a newline, so
/// batches of entries come out as consecutive diagnostic blocks.
///
/// # Examples
///
/// ```
/// use capture::render::EntryWriter;
/// use capture::{CaptureConfig, CaptureRegistry};
///
/// let registry = CaptureRegistry::new(CaptureConfig::default());
/// let logger = registry.logger("Job").unwrap();
/// logger.info("queued");
/// logger.info("finished");
///
/// let mut writer = EntryWriter::new(Vec::new());
/// writer.write_all(registry.sink().entries()).unwrap();
///
/// let output = String::from_utf8(writer.into_inner()).unwrap();
/// assert_eq!(output.lines().count(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct EntryWriter<W> {
    writer: W,
}

impl<W> EntryWriter<W> {
    /// Creates a writer over `writer`.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the writer and returns the wrapped target.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> Default for EntryWriter<W>
where
    W: Default,
{
    fn default() -> Self {
        Self::new(W::default())
    }
}

impl<W> EntryWriter<W>
where
    W: Write,
{
    /// Renders a single entry to the underlying writer.
    ///
    /// # Errors
    ///
    /// Propagates any [`io::Error`] from the underlying writer.
    pub fn write(&mut self, entry: &LogEntry) -> io::Result<()> {
        write_entry(&mut self.writer, entry)
    }

    /// Renders each entry from the iterator to the underlying writer.
    ///
    /// Items may be owned entries, references, or the `Arc`s the sink
    /// queries return; anything implementing [`Borrow<LogEntry>`] works.
    ///
    /// # Errors
    ///
    /// Propagates any [`io::Error`] from the underlying writer.
    pub fn write_all<I, M>(&mut self, entries: I) -> io::Result<()>
    where
        I: IntoIterator<Item = M>,
        M: Borrow<LogEntry>,
    {
        for entry in entries {
            self.write(entry.borrow())?;
        }
        Ok(())
    }

    /// Flushes the underlying writer.
    ///
    /// # Errors
    ///
    /// Propagates any [`io::Error`] from the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
