//! # Log Recorder
//!
//! A small logging facade that keeps an append-only, in-memory history of
//! severity-tagged messages and renders them to the console.
//!
//! ## Features
//!
//! - **Recorded History**: every logged entry is kept in append order
//! - **Console Rendering**: timestamped lines on log, compact lines on replay
//! - **Typed Failures**: empty messages are rejected with an error, not a panic
//! - **Explicit Ownership**: no global logger; callers own their recorder
//!
//! ## Example
//!
//! ```no_run
//! use log_recorder::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let mut recorder = LogRecorder::new();
//!     recorder.log(Severity::Info, "Initialization complete.")?;
//!     recorder.log(Severity::Fatal, "Critical failure!")?;
//!     recorder.print_all()
//! }
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::ConsoleAppender;
    pub use crate::core::{
        Appender, LogEntry, LogRecorder, LogRecorderBuilder, LoggerError, OutputFormat, Result,
        Severity, SharedRecorder, TimestampFormat,
    };
}

pub use appenders::{ConsoleAppender, FATAL_NOTICE};
pub use core::{
    display_name, Appender, LogEntry, LogRecorder, LogRecorderBuilder, LoggerError,
    OutputFormat, Result, Severity, SharedRecorder, TimestampFormat, CONSOLE_TIMESTAMP_PATTERN,
    UNKNOWN_SEVERITY,
};
