//! Logging macros for ergonomic message formatting.
//!
//! Each macro formats its arguments like `format!` and hands the result to
//! [`LogRecorder::log`](crate::LogRecorder::log), evaluating to its `Result`.
//!
//! # Examples
//!
//! ```
//! use log_recorder::prelude::*;
//! use log_recorder::info;
//!
//! let mut recorder = LogRecorder::builder().writers(Vec::new(), Vec::new()).build();
//!
//! let port = 8080;
//! info!(recorder, "Server listening on port {}", port)?;
//! assert_eq!(recorder.entries()[0].message(), "Server listening on port 8080");
//! # Ok::<(), LoggerError>(())
//! ```

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use log_recorder::prelude::*;
/// # let mut recorder = LogRecorder::builder().writers(Vec::new(), Vec::new()).build();
/// use log_recorder::log;
/// log!(recorder, Severity::Info, "Simple message")?;
/// log!(recorder, Severity::Error, "Error code: {}", 500)?;
/// # Ok::<(), LoggerError>(())
/// ```
#[macro_export]
macro_rules! log {
    ($recorder:expr, $level:expr, $($arg:tt)+) => {
        $recorder.log($level, format!($($arg)+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($recorder:expr, $($arg:tt)+) => {
        $crate::log!($recorder, $crate::Severity::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($recorder:expr, $($arg:tt)+) => {
        $crate::log!($recorder, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($recorder:expr, $($arg:tt)+) => {
        $crate::log!($recorder, $crate::Severity::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($recorder:expr, $($arg:tt)+) => {
        $crate::log!($recorder, $crate::Severity::Error, $($arg)+)
    };
}

/// Log a fatal-level message.
///
/// Like [`LogRecorder::fatal`](crate::LogRecorder::fatal) this also writes
/// the critical notice to the error stream; it never exits the process.
#[macro_export]
macro_rules! fatal {
    ($recorder:expr, $($arg:tt)+) => {
        $crate::log!($recorder, $crate::Severity::Fatal, $($arg)+)
    };
}
