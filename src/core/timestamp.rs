//! Timestamp formatting utilities
//!
//! Records are stamped in local time. The formats below work for any chrono
//! time zone so tests can pin a fixed offset.

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Standardized timestamp format options
///
/// # Examples
///
/// ```
/// use srelab_log::core::TimestampFormat;
/// use chrono::{FixedOffset, TimeZone};
///
/// let tz = FixedOffset::east_opt(8 * 3600).unwrap();
/// let at = tz.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// assert_eq!(TimestampFormat::Rfc3339.format(&at), "2025-01-08T10:30:45+08:00");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// RFC 3339 with milliseconds and offset: `2025-01-08T10:30:45.123+08:00`
    #[default]
    Rfc3339Millis,

    /// RFC 3339 with second precision: `2025-01-08T10:30:45+08:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1736303445`
    Unix,

    /// Unix timestamp in milliseconds: `1736303445123`
    UnixMillis,

    /// Custom strftime format
    Custom(String),
}

impl TimestampFormat {
    /// Format a timestamp according to this format
    #[must_use]
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        match self {
            TimestampFormat::Rfc3339Millis => {
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f%:z").to_string()
            }
            TimestampFormat::Rfc3339 => datetime.format("%Y-%m-%dT%H:%M:%S%:z").to_string(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }
}
