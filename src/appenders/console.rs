//! Console appender implementation

use crate::core::{
    log_entry::escape_line_breaks, output_format::format_replay, Appender, LogEntry, LoggerError,
    OutputFormat, Result, Severity, TimestampFormat,
};
#[cfg(feature = "console")]
use colored::Colorize;
use std::io::{self, Stderr, Stdout, Write};

/// Side-channel line written to the error stream for every fatal entry
pub const FATAL_NOTICE: &str = "[FATAL]: Critical error";

/// Writes log lines to an output stream and alerts to an error stream.
///
/// `ConsoleAppender::new()` targets the process stdout/stderr;
/// [`ConsoleAppender::with_writers`] accepts any pair of writers.
pub struct ConsoleAppender<O = Stdout, E = Stderr> {
    out: O,
    err: E,
    #[cfg_attr(not(feature = "console"), allow(dead_code))]
    use_colors: bool,
    timestamp_format: TimestampFormat,
    output_format: OutputFormat,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self::with_writers(io::stdout(), io::stderr())
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: Write, E: Write> ConsoleAppender<O, E> {
    pub fn with_writers(out: O, err: E) -> Self {
        Self {
            out,
            err,
            use_colors: false,
            timestamp_format: TimestampFormat::default(),
            output_format: OutputFormat::default(),
        }
    }

    /// Color the severity label
    ///
    /// Only has an effect with the `console` feature enabled.
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Set the output format for this appender
    ///
    /// # Example
    ///
    /// ```
    /// use log_recorder::{ConsoleAppender, OutputFormat};
    ///
    /// let appender = ConsoleAppender::new().with_output_format(OutputFormat::Json);
    /// ```
    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Set a custom timestamp format using a strftime-compatible format string
    ///
    /// # Errors
    ///
    /// [`LoggerError::InvalidArgument`] if the pattern has an unknown specifier.
    pub fn with_custom_timestamp(mut self, format_str: &str) -> Result<Self> {
        self.timestamp_format = TimestampFormat::custom(format_str)?;
        Ok(self)
    }

    pub fn stdout(&self) -> &O {
        &self.out
    }

    pub fn stderr(&self) -> &E {
        &self.err
    }

    pub fn into_writers(self) -> (O, E) {
        (self.out, self.err)
    }

    fn level_label(&self, severity: Severity) -> String {
        #[cfg(feature = "console")]
        {
            if self.use_colors {
                return severity
                    .to_str()
                    .color(severity.color_code())
                    .to_string();
            }
        }

        severity.to_str().to_string()
    }

    fn write_out(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{}", line)
            .map_err(|e| LoggerError::io_operation("writing to stdout", "console write failed", e))
    }

    fn write_err(&mut self, line: &str) -> Result<()> {
        writeln!(self.err, "{}", line)
            .map_err(|e| LoggerError::io_operation("writing to stderr", "console write failed", e))
    }
}

impl<O, E> Appender for ConsoleAppender<O, E>
where
    O: Write + Send,
    E: Write + Send,
{
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let level = self.level_label(entry.severity());
        let line = self
            .output_format
            .format(entry, &level, &self.timestamp_format)?;
        self.write_out(&line)?;

        if entry.severity() == Severity::Fatal {
            self.write_err(FATAL_NOTICE)?;
        }
        Ok(())
    }

    fn replay(&mut self, entry: &LogEntry) -> Result<()> {
        let level = self.level_label(entry.severity());
        let line = format_replay(entry, &level);
        self.write_out(&line)
    }

    fn print(&mut self, message: &str) -> Result<()> {
        self.write_out(&escape_line_breaks(message))
    }

    fn report_error(&mut self, error: &LoggerError) -> Result<()> {
        let line = format!(
            "[ERROR]: Exception caught: {}",
            escape_line_breaks(&error.to_string())
        );
        self.write_err(&line)
    }

    fn flush(&mut self) -> Result<()> {
        // Flush both streams since we write to both
        self.out.flush()?;
        self.err.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
