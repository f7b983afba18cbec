//! Core recorder types and traits

pub mod appender;
pub mod error;
pub mod log_entry;
pub mod output_format;
pub mod recorder;
pub mod severity;
pub mod shared;
pub mod timestamp;

pub use appender::Appender;
pub use error::{LoggerError, Result};
pub use log_entry::LogEntry;
pub use output_format::OutputFormat;
pub use recorder::{LogRecorder, LogRecorderBuilder};
pub use severity::{display_name, Severity, UNKNOWN_SEVERITY};
pub use shared::SharedRecorder;
pub use timestamp::{TimestampFormat, CONSOLE_TIMESTAMP_PATTERN};
