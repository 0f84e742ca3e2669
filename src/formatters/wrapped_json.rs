//! JSON formatter that nests each entry beneath a single top-level key
//!
//! The top-level ("wrap") key comes from the entry's `kind` field when it
//! holds a string, and is `"log"` otherwise. Downstream pipelines can route
//! entries by that key:
//!
//! ```text
//! {"request":{"level":"info","msg":"ok","time":"2024-01-02T15:04:05Z"}}
//! ```

use crate::core::{
    FieldKey, FieldMap, FieldValue, Fields, Formatter, FormatterError, LogEntry, Result,
    TimestampFormat, KIND_FIELD,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Wrap key used when the entry carries no string `kind`
pub const DEFAULT_KIND: &str = "log";

/// Prefix given to caller fields that collide with a generated field
pub const CLASH_PREFIX: &str = "fields.";

/// Formatter producing `{"<kind>":{...fields}}\n`
///
/// The configuration is read-only once built and the formatter keeps no
/// state between calls, so one instance can be shared across threads.
///
/// # Examples
///
/// ```
/// use wrapped_json_log::prelude::*;
///
/// let formatter = WrappedJsonFormatter::new()
///     .with_field_name(FieldKey::Time, "@timestamp");
///
/// let mut entry = LogEntry::new(LogLevel::Info, "ok").with_kind("request");
/// let line = formatter.format_to_string(&mut entry).unwrap();
///
/// assert!(line.starts_with(r#"{"request":{"@timestamp":"#));
/// assert!(line.ends_with('\n'));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WrappedJsonFormatter {
    /// Format of the time field
    pub timestamp_format: TimestampFormat,
    /// Omit the time field entirely
    pub disable_timestamp: bool,
    /// Output names for the time, msg and level fields
    pub field_map: FieldMap,
}

impl WrappedJsonFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the configuration from a JSON document
    ///
    /// Missing options keep their defaults.
    ///
    /// ```
    /// use wrapped_json_log::formatters::WrappedJsonFormatter;
    /// use wrapped_json_log::FieldKey;
    ///
    /// let formatter = WrappedJsonFormatter::from_json_config(
    ///     r#"{"disable_timestamp": true, "field_map": {"msg": "@message"}}"#,
    /// ).unwrap();
    /// assert!(formatter.disable_timestamp);
    /// assert_eq!(formatter.field_map.resolve(FieldKey::Msg), "@message");
    /// ```
    pub fn from_json_config(config: &str) -> Result<Self> {
        let formatter: Self = serde_json::from_str(config)
            .map_err(|e| FormatterError::config("WrappedJsonFormatter", e.to_string()))?;
        if let TimestampFormat::Custom(pattern) = &formatter.timestamp_format {
            TimestampFormat::custom(pattern.as_str())?;
        }
        Ok(formatter)
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Use a strftime pattern for the time field
    pub fn with_custom_timestamp(mut self, pattern: &str) -> Result<Self> {
        self.timestamp_format = TimestampFormat::custom(pattern)?;
        Ok(self)
    }

    #[must_use]
    pub fn with_disable_timestamp(mut self, disable: bool) -> Self {
        self.disable_timestamp = disable;
        self
    }

    #[must_use]
    pub fn with_field_name(mut self, key: FieldKey, name: impl Into<String>) -> Self {
        self.field_map.insert(key, name);
        self
    }

    #[must_use]
    pub fn with_field_map(mut self, field_map: FieldMap) -> Self {
        self.field_map = field_map;
        self
    }

    /// Format `entry` as a newline-terminated JSON string
    ///
    /// Same contract as [`Formatter::format`], including the rewrite of
    /// the entry's `kind` field.
    pub fn format_to_string(&self, entry: &mut LogEntry) -> Result<String> {
        let (wrap_key, preserve_kind) = take_wrap_key(entry);
        let result = self.encode(entry, &wrap_key);

        // A string kind goes back into the entry whether or not encoding worked,
        // so later formatters see the resolved key. A non-string kind stays removed.
        if preserve_kind {
            entry
                .fields
                .insert(KIND_FIELD.to_string(), FieldValue::String(wrap_key));
        }

        result
    }

    fn encode(&self, entry: &LogEntry, wrap_key: &str) -> Result<String> {
        let mut data: Fields = entry
            .fields
            .iter()
            .map(|(key, value)| (key.clone(), value.clone().normalize()))
            .collect();

        prefix_field_clashes(&mut data);

        if !self.disable_timestamp {
            data.insert(
                self.field_map.resolve(FieldKey::Time).to_string(),
                FieldValue::String(self.timestamp_format.format(&entry.timestamp)),
            );
        }
        data.insert(
            self.field_map.resolve(FieldKey::Msg).to_string(),
            FieldValue::String(entry.message.clone()),
        );
        data.insert(
            self.field_map.resolve(FieldKey::Level).to_string(),
            FieldValue::String(entry.level.to_str().to_string()),
        );

        let wrapped = BTreeMap::from([(wrap_key, &data)]);
        let mut serialized =
            serde_json::to_string(&wrapped).map_err(FormatterError::serialization)?;
        serialized.push('\n');
        Ok(serialized)
    }
}

impl Formatter for WrappedJsonFormatter {
    fn format(&self, entry: &mut LogEntry) -> Result<Vec<u8>> {
        self.format_to_string(entry).map(String::into_bytes)
    }

    fn name(&self) -> &str {
        "wrapped_json"
    }
}

/// Remove `kind` from the entry and decide the wrap key.
///
/// Returns the key and whether it came from a string `kind` that must be
/// written back after formatting.
fn take_wrap_key(entry: &mut LogEntry) -> (String, bool) {
    match entry.fields.remove(KIND_FIELD) {
        Some(FieldValue::String(kind)) => (kind, true),
        Some(other) => {
            tracing::trace!(kind = ?other, "dropping non-string kind field");
            (DEFAULT_KIND.to_string(), false)
        }
        None => (DEFAULT_KIND.to_string(), false),
    }
}

/// Move caller fields named `time`, `msg` or `level` to `fields.<name>`.
fn prefix_field_clashes(data: &mut Fields) {
    for key in FieldKey::ALL {
        let name = key.default_name();
        if let Some(value) = data.remove(name) {
            data.insert(format!("{}{}", CLASH_PREFIX, name), value);
        }
    }
}
