//! Output key names for the formatter-generated fields

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The fields a formatter writes itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKey {
    Time,
    Msg,
    Level,
}

impl FieldKey {
    pub const ALL: [FieldKey; 3] = [FieldKey::Time, FieldKey::Msg, FieldKey::Level];

    pub fn default_name(&self) -> &'static str {
        match self {
            FieldKey::Time => "time",
            FieldKey::Msg => "msg",
            FieldKey::Level => "level",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.default_name())
    }
}

/// Overrides for the key names of the generated fields
///
/// # Examples
///
/// ```
/// use wrapped_json_log::{FieldKey, FieldMap};
///
/// let map = FieldMap::new().with(FieldKey::Time, "@timestamp");
/// assert_eq!(map.resolve(FieldKey::Time), "@timestamp");
/// assert_eq!(map.resolve(FieldKey::Msg), "msg");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldMap {
    overrides: HashMap<FieldKey, String>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: FieldKey, name: impl Into<String>) -> Self {
        self.insert(key, name);
        self
    }

    pub fn insert(&mut self, key: FieldKey, name: impl Into<String>) {
        self.overrides.insert(key, name.into());
    }

    /// Configured name for `key`, or its default name
    pub fn resolve(&self, key: FieldKey) -> &str {
        self.overrides
            .get(&key)
            .map(String::as_str)
            .unwrap_or_else(|| key.default_name())
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults() {
        let map = FieldMap::new();
        for key in FieldKey::ALL {
            assert_eq!(map.resolve(key), key.default_name());
        }
        assert!(map.is_empty());
    }

    #[test]
    fn test_override_takes_precedence() {
        let map = FieldMap::new()
            .with(FieldKey::Level, "@level")
            .with(FieldKey::Msg, "@message");

        assert_eq!(map.resolve(FieldKey::Level), "@level");
        assert_eq!(map.resolve(FieldKey::Msg), "@message");
        assert_eq!(map.resolve(FieldKey::Time), "time");
    }

    #[test]
    fn test_deserialize_from_config() {
        let map: FieldMap = serde_json::from_str(r#"{"time": "@timestamp"}"#).unwrap();
        assert_eq!(map.resolve(FieldKey::Time), "@timestamp");

        assert!(serde_json::from_str::<FieldMap>(r#"{"host": "h"}"#).is_err());
    }
}
