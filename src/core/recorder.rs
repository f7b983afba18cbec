//! Main recorder implementation

use super::{
    appender::Appender,
    error::{LoggerError, Result},
    log_entry::LogEntry,
    output_format::OutputFormat,
    severity::Severity,
    timestamp::TimestampFormat,
};
use crate::appenders::ConsoleAppender;
use std::io::{self, Stderr, Stdout, Write};

/// Append-only history of log entries with console rendering.
///
/// Every successful [`log`](LogRecorder::log) call stores exactly one entry
/// and writes one line through the appender. Entries are never removed,
/// reordered or edited.
///
/// # Example
///
/// ```
/// use log_recorder::prelude::*;
///
/// let mut recorder = LogRecorder::builder()
///     .writers(Vec::new(), Vec::new())
///     .build();
///
/// recorder.log(Severity::Info, "Initialization complete.")?;
/// assert!(recorder.log(Severity::Info, "").is_err());
/// assert_eq!(recorder.len(), 1);
/// # Ok::<(), LoggerError>(())
/// ```
pub struct LogRecorder<A: Appender = ConsoleAppender> {
    entries: Vec<LogEntry>,
    appender: A,
}

impl LogRecorder {
    /// Recorder writing to the process stdout/stderr
    #[must_use]
    pub fn new() -> Self {
        Self::with_appender(ConsoleAppender::new())
    }

    #[must_use]
    pub fn builder() -> LogRecorderBuilder {
        LogRecorderBuilder::new()
    }
}

impl Default for LogRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Appender> LogRecorder<A> {
    pub fn with_appender(appender: A) -> Self {
        Self {
            entries: Vec::new(),
            appender,
        }
    }

    fn with_capacity(appender: A, capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            appender,
        }
    }

    /// Record a message and write its timestamped line.
    ///
    /// # Errors
    ///
    /// - [`LoggerError::InvalidArgument`] for an empty message. Nothing is
    ///   recorded or written.
    /// - [`LoggerError::IoOperation`] when the console write fails, or
    ///   [`LoggerError::InvalidArgument`] when an unchecked custom timestamp
    ///   pattern cannot be rendered. In both cases the entry **is** recorded;
    ///   compare [`len`](Self::len) before and after the call to tell the
    ///   two outcomes apart.
    pub fn log(&mut self, severity: Severity, message: impl Into<String>) -> Result<()> {
        let message = message.into();
        if message.is_empty() {
            return Err(LoggerError::invalid_argument("Log message cannot be empty."));
        }

        let entry = LogEntry::now(severity, message);
        let written = self.appender.append(&entry);
        self.entries.push(entry);
        written
    }

    #[inline]
    pub fn debug(&mut self, message: impl Into<String>) -> Result<()> {
        self.log(Severity::Debug, message)
    }

    #[inline]
    pub fn info(&mut self, message: impl Into<String>) -> Result<()> {
        self.log(Severity::Info, message)
    }

    #[inline]
    pub fn warn(&mut self, message: impl Into<String>) -> Result<()> {
        self.log(Severity::Warn, message)
    }

    #[inline]
    pub fn error(&mut self, message: impl Into<String>) -> Result<()> {
        self.log(Severity::Error, message)
    }

    #[inline]
    pub fn fatal(&mut self, message: impl Into<String>) -> Result<()> {
        self.log(Severity::Fatal, message)
    }

    /// Write a bare message without severity or timestamp.
    ///
    /// Nothing is recorded. Line breaks in `message` are escaped so the call
    /// produces exactly one console line.
    ///
    /// # Errors
    ///
    /// - [`LoggerError::InvalidArgument`] for an empty message; nothing is written.
    /// - [`LoggerError::IoOperation`] when the console write fails.
    pub fn print(&mut self, message: &str) -> Result<()> {
        if message.is_empty() {
            return Err(LoggerError::invalid_argument("Message cannot be empty."));
        }
        self.appender.print(message)
    }

    /// Replay every recorded entry as `[SEVERITY] message`, in append order.
    ///
    /// # Errors
    ///
    /// [`LoggerError::IoOperation`] when a console write fails; replay stops
    /// at the failing entry.
    pub fn print_all(&mut self) -> Result<()> {
        for entry in &self.entries {
            self.appender.replay(entry)?;
        }
        Ok(())
    }

    /// Write `[ERROR]: Exception caught: <error>` to the error stream.
    ///
    /// # Errors
    ///
    /// [`LoggerError::IoOperation`] when the error stream write fails.
    pub fn report_error(&mut self, error: &LoggerError) -> Result<()> {
        self.appender.report_error(error)
    }

    /// Recorded entries in append order
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Export the history as a JSON array
    ///
    /// # Errors
    ///
    /// [`LoggerError::JsonError`] if serialization fails.
    pub fn entries_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.entries)?)
    }

    /// # Errors
    ///
    /// [`LoggerError::IoError`] when either stream fails to flush.
    pub fn flush(&mut self) -> Result<()> {
        self.appender.flush()
    }

    pub fn appender(&self) -> &A {
        &self.appender
    }

    /// Take the history and the appender apart
    pub fn into_parts(self) -> (Vec<LogEntry>, A) {
        (self.entries, self.appender)
    }
}

/// Builder for constructing a console-backed [`LogRecorder`]
///
/// # Example
/// ```
/// use log_recorder::prelude::*;
///
/// let recorder = LogRecorder::builder()
///     .timestamp_format(TimestampFormat::Iso8601)
///     .output_format(OutputFormat::Text)
///     .colors(false)
///     .capacity(64)
///     .build();
/// assert!(recorder.is_empty());
/// ```
pub struct LogRecorderBuilder<O = Stdout, E = Stderr> {
    out: O,
    err: E,
    use_colors: bool,
    timestamp_format: TimestampFormat,
    output_format: OutputFormat,
    capacity: usize,
}

impl LogRecorderBuilder {
    /// Create a new builder writing to the process streams
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            err: io::stderr(),
            use_colors: false,
            timestamp_format: TimestampFormat::default(),
            output_format: OutputFormat::default(),
            capacity: 0,
        }
    }
}

impl Default for LogRecorderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<O, E> LogRecorderBuilder<O, E>
where
    O: Write + Send,
    E: Write + Send,
{
    /// Redirect output and error streams
    #[must_use = "builder methods return a new value"]
    pub fn writers<O2, E2>(self, out: O2, err: E2) -> LogRecorderBuilder<O2, E2>
    where
        O2: Write + Send,
        E2: Write + Send,
    {
        LogRecorderBuilder {
            out,
            err,
            use_colors: self.use_colors,
            timestamp_format: self.timestamp_format,
            output_format: self.output_format,
            capacity: self.capacity,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Use a custom strftime timestamp pattern
    ///
    /// # Errors
    ///
    /// [`LoggerError::InvalidArgument`] if the pattern has an unknown specifier.
    pub fn custom_timestamp(mut self, pattern: &str) -> Result<Self> {
        self.timestamp_format = TimestampFormat::custom(pattern)?;
        Ok(self)
    }

    #[must_use = "builder methods return a new value"]
    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Preallocate room for `capacity` entries
    #[must_use = "builder methods return a new value"]
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Build after checking the configured timestamp format
    ///
    /// # Errors
    ///
    /// [`LoggerError::InvalidArgument`] for a custom timestamp pattern that
    /// cannot be rendered.
    pub fn try_build(self) -> Result<LogRecorder<ConsoleAppender<O, E>>> {
        self.timestamp_format.validate()?;
        Ok(self.build())
    }

    pub fn build(self) -> LogRecorder<ConsoleAppender<O, E>> {
        let appender = ConsoleAppender::with_writers(self.out, self.err)
            .with_colors(self.use_colors)
            .with_timestamp_format(self.timestamp_format)
            .with_output_format(self.output_format);
        LogRecorder::with_capacity(appender, self.capacity)
    }
}
