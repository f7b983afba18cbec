//! Timestamp formatting utilities
//!
//! Provides the console timestamp used by freshly logged lines plus a few
//! standard alternatives.

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

/// strftime pattern of the console timestamp: `2025/04/08T12:34:56.789`
pub const CONSOLE_TIMESTAMP_PATTERN: &str = "%Y/%m/%dT%H:%M:%S%.3f";

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use log_recorder::TimestampFormat;
/// use chrono::{TimeZone, Utc};
///
/// let datetime = Utc.with_ymd_and_hms(2025, 4, 8, 12, 34, 56).unwrap();
/// assert_eq!(TimestampFormat::Console.format(&datetime)?, "2025/04/08T12:34:56.000");
/// # Ok::<(), log_recorder::LoggerError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// Slash-separated date with milliseconds: `2025/04/08T12:34:56.789`
    ///
    /// This is the default and matches existing console transcripts.
    #[default]
    Console,

    /// ISO 8601 with milliseconds and offset: `2025-04-08T12:34:56.789+02:00`
    Iso8601,

    /// RFC 3339 format: `2025-04-08T12:34:56.789123+02:00`
    Rfc3339,

    /// Unix timestamp in milliseconds: `1744115696789`
    UnixMillis,

    /// Custom strftime format
    ///
    /// Prefer [`TimestampFormat::custom`], which rejects unknown specifiers
    /// up front.
    ///
    /// ```
    /// use log_recorder::TimestampFormat;
    ///
    /// let format = TimestampFormat::custom("%H:%M:%S")?;
    /// assert!(TimestampFormat::custom("%Q").is_err());
    /// # Ok::<(), log_recorder::LoggerError>(())
    /// ```
    Custom(String),
}

impl TimestampFormat {
    /// Build a custom format after checking its strftime pattern
    ///
    /// # Errors
    ///
    /// [`LoggerError::InvalidArgument`] if the pattern contains a specifier
    /// chrono does not understand.
    pub fn custom(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        validate_pattern(&pattern)?;
        Ok(TimestampFormat::Custom(pattern))
    }

    /// Check that this format can render timestamps
    ///
    /// # Errors
    ///
    /// [`LoggerError::InvalidArgument`] for a custom format with an invalid
    /// strftime pattern.
    pub fn validate(&self) -> Result<()> {
        match self {
            TimestampFormat::Custom(pattern) => validate_pattern(pattern),
            _ => Ok(()),
        }
    }

    /// Format a datetime in its own time zone according to this format
    ///
    /// # Errors
    ///
    /// [`LoggerError::InvalidArgument`] if a custom pattern cannot be rendered.
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> Result<String>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let rendered = match self {
            TimestampFormat::Console => datetime.format(CONSOLE_TIMESTAMP_PATTERN).to_string(),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3f%:z").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(pattern) => {
                let mut out = String::new();
                write!(out, "{}", datetime.format(pattern))
                    .map_err(|_| invalid_pattern(pattern))?;
                out
            }
        };
        Ok(rendered)
    }

    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, TimestampFormat::UnixMillis)
    }
}

fn validate_pattern(pattern: &str) -> Result<()> {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(invalid_pattern(pattern));
    }
    Ok(())
}

fn invalid_pattern(pattern: &str) -> LoggerError {
    LoggerError::invalid_argument(format!("Invalid timestamp pattern: '{}'", pattern))
}
