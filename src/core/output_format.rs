//! Output format configuration for log lines
//!
//! - Text: `[2025/04/08T12:34:56.789][INFO]: Request processed` (default)
//! - Json: one JSON object per line

use super::error::Result;
use super::log_entry::LogEntry;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};

/// Output format of the line written when an entry is logged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    ///
    /// Example: `[2025/04/08T12:34:56.789][INFO]: Request processed`
    #[default]
    Text,

    /// JSON format for machine processing
    ///
    /// Example: `{"level":"INFO","message":"Request processed","timestamp":"2025/04/08T12:34:56.789"}`
    Json,
}

impl OutputFormat {
    /// Format a freshly logged entry
    ///
    /// `level` is the already rendered severity label, so callers may color it.
    ///
    /// # Errors
    ///
    /// Fails when the timestamp format cannot render the entry's timestamp.
    pub fn format(
        &self,
        entry: &LogEntry,
        level: &str,
        timestamp_format: &TimestampFormat,
    ) -> Result<String> {
        match self {
            OutputFormat::Text => Self::format_text(entry, level, timestamp_format),
            OutputFormat::Json => Self::format_json(entry, timestamp_format),
        }
    }

    fn format_text(
        entry: &LogEntry,
        level: &str,
        timestamp_format: &TimestampFormat,
    ) -> Result<String> {
        let line = match entry.timestamp() {
            Some(timestamp) => format!(
                "[{}][{}]: {}",
                timestamp_format.format(timestamp)?,
                level,
                entry.single_line_message()
            ),
            None => format!("[{}]: {}", level, entry.single_line_message()),
        };
        Ok(line)
    }

    fn format_json(entry: &LogEntry, timestamp_format: &TimestampFormat) -> Result<String> {
        let mut json_obj = serde_json::Map::new();

        if let Some(timestamp) = entry.timestamp() {
            let value = if timestamp_format.is_numeric() {
                serde_json::Value::Number(timestamp.timestamp_millis().into())
            } else {
                serde_json::Value::String(timestamp_format.format(timestamp)?)
            };
            json_obj.insert("timestamp".to_string(), value);
        }

        json_obj.insert(
            "level".to_string(),
            serde_json::Value::String(entry.severity().to_str().to_string()),
        );
        json_obj.insert(
            "message".to_string(),
            serde_json::Value::String(entry.message().to_string()),
        );

        Ok(serde_json::Value::Object(json_obj).to_string())
    }
}

/// Replay line used when the history is printed: `[INFO] Request processed`
pub fn format_replay(entry: &LogEntry, level: &str) -> String {
    format!("[{}] {}", level, entry.single_line_message())
}
