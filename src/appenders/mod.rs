//! Appender implementations

pub mod console;

pub use console::{ConsoleAppender, FATAL_NOTICE};

// Re-export trait for convenience
pub use crate::core::Appender;
