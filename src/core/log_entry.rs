//! Log entry structure

use super::field_value::{FieldValue, Fields};
use super::log_level::LogLevel;
use chrono::{DateTime, FixedOffset, Utc};

/// Reserved field whose string value selects the wrap key
pub const KIND_FIELD: &str = "kind";

/// A prepared log record handed to a [`Formatter`](super::Formatter)
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<FixedOffset>,
    pub fields: Fields,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: Utc::now().fixed_offset(),
            fields: Fields::new(),
        }
    }

    pub fn with_timestamp<Tz: chrono::TimeZone>(mut self, timestamp: DateTime<Tz>) -> Self {
        self.timestamp = timestamp.fixed_offset();
        self
    }

    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn with_fields(mut self, fields: Fields) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Use a string `kind` to route this entry under a custom wrap key
    pub fn with_kind(self, kind: impl Into<String>) -> Self {
        self.with_field(KIND_FIELD, kind.into())
    }

    pub fn field(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    pub fn kind(&self) -> Option<&FieldValue> {
        self.fields.get(KIND_FIELD)
    }
}
