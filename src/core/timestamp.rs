//! Timestamp formatting
//!
//! Provides the configurable timestamp formats for the time field.
//! The default is RFC 3339 at second precision, the layout log shippers
//! expect (`2024-01-02T15:04:05Z`).

use super::error::{FormatterError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, SecondsFormat, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Write};

/// Timestamp format options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// RFC 3339 at second precision: `2024-01-02T15:04:05Z`
    ///
    /// A zero offset is written as `Z`, any other offset as `+hh:mm`.
    #[default]
    Rfc3339,

    /// RFC 3339 with fractional seconds: `2024-01-02T15:04:05.123456789Z`
    ///
    /// Trailing zeros of the fraction are trimmed.
    Rfc3339Nano,

    /// ISO 8601 with milliseconds: `2024-01-02T15:04:05.123Z`
    Iso8601Millis,

    /// Unix timestamp in seconds, rendered as a string
    Unix,

    /// Unix timestamp in milliseconds, rendered as a string
    UnixMillis,

    /// Custom strftime format
    ///
    /// Prefer [`TimestampFormat::custom`], which rejects malformed patterns.
    Custom(String),
}

impl TimestampFormat {
    /// Build a validated custom strftime format
    ///
    /// # Examples
    ///
    /// ```
    /// use wrapped_json_log::TimestampFormat;
    ///
    /// assert!(TimestampFormat::custom("%d/%b/%Y:%H:%M:%S %z").is_ok());
    /// assert!(TimestampFormat::custom("%Y-%Q").is_err());
    /// ```
    pub fn custom(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return Err(FormatterError::config(
                "TimestampFormat",
                format!("invalid strftime pattern '{}'", pattern),
            ));
        }
        Ok(TimestampFormat::Custom(pattern))
    }

    /// Render `datetime` according to this format
    ///
    /// Never fails: a custom pattern that cannot be rendered falls back
    /// to RFC 3339.
    #[must_use]
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        match self {
            TimestampFormat::Rfc3339 => datetime.to_rfc3339_opts(SecondsFormat::Secs, true),
            TimestampFormat::Rfc3339Nano => {
                trim_fraction(datetime.to_rfc3339_opts(SecondsFormat::Nanos, true))
            }
            TimestampFormat::Iso8601Millis => {
                datetime.to_rfc3339_opts(SecondsFormat::Millis, true)
            }
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(pattern) => {
                let mut out = String::new();
                match write!(out, "{}", datetime.format(pattern)) {
                    Ok(()) => out,
                    Err(_) => datetime.to_rfc3339_opts(SecondsFormat::Secs, true),
                }
            }
        }
    }

    /// Get a description of this format
    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            TimestampFormat::Rfc3339 => "RFC 3339 (2024-01-02T15:04:05Z)",
            TimestampFormat::Rfc3339Nano => "RFC 3339 with fractional seconds",
            TimestampFormat::Iso8601Millis => "ISO 8601 with milliseconds (2024-01-02T15:04:05.123Z)",
            TimestampFormat::Unix => "Unix timestamp in seconds (1704207845)",
            TimestampFormat::UnixMillis => "Unix timestamp in milliseconds (1704207845123)",
            TimestampFormat::Custom(_) => "Custom strftime format",
        }
    }
}

/// Drop trailing zeros of the fractional seconds, and the `.` when nothing is left.
fn trim_fraction(mut rendered: String) -> String {
    let Some(dot) = rendered.find('.') else {
        return rendered;
    };
    let end = rendered[dot + 1..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(rendered.len(), |i| dot + 1 + i);
    let kept = rendered[dot + 1..end].trim_end_matches('0').len();
    let cut_from = if kept == 0 { dot } else { dot + 1 + kept };
    rendered.replace_range(cut_from..end, "");
    rendered
}
