//! Appender trait for console output destinations

use super::{
    error::{LoggerError, Result},
    log_entry::LogEntry,
};

/// Output destination used by a recorder.
///
/// # Errors
///
/// Every method except [`name`](Appender::name) returns
/// [`LoggerError::IoOperation`] or [`LoggerError::IoError`] when the
/// underlying stream fails. `append` may also return
/// [`LoggerError::InvalidArgument`] when the entry cannot be rendered.
pub trait Appender: Send {
    /// Write the line for an entry that was just logged.
    fn append(&mut self, entry: &LogEntry) -> Result<()>;
    /// Write the replay line for an already recorded entry.
    fn replay(&mut self, entry: &LogEntry) -> Result<()>;
    /// Write an untagged message.
    fn print(&mut self, message: &str) -> Result<()>;
    /// Surface a failure caught by a top-level handler.
    fn report_error(&mut self, error: &LoggerError) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
