//! Log entry structure

use super::severity::Severity;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One recorded message.
///
/// Entries are immutable once built; the recorder only ever hands them out
/// by shared reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    severity: Severity,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    timestamp: Option<DateTime<Local>>,
}

impl LogEntry {
    /// Build an entry without a timestamp.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            timestamp: None,
        }
    }

    /// Build an entry stamped with the current local time.
    pub fn now(severity: Severity, message: impl Into<String>) -> Self {
        Self::new(severity, message).with_timestamp(Local::now())
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn timestamp(&self) -> Option<&DateTime<Local>> {
        self.timestamp.as_ref()
    }

    /// Message with line breaks and tabs escaped so it renders on one line.
    ///
    /// The stored message is left untouched.
    pub fn single_line_message(&self) -> String {
        escape_line_breaks(&self.message)
    }
}

/// Escape `\n`, `\r` and `\t` so `text` cannot span several console lines.
pub fn escape_line_breaks(text: &str) -> String {
    text.replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
