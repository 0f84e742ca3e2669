//! # Wrapped JSON Log
//!
//! A log-entry formatter that serializes a structured record into a JSON
//! document nested beneath a single top-level key chosen per entry.
//!
//! ## Features
//!
//! - **Routable output**: the entry's `kind` field becomes the top-level key
//! - **No lost fields**: caller fields named `time`, `msg` or `level` are kept
//!   under `fields.<name>`
//! - **Configurable**: timestamp format, timestamp omission and output key names
//! - **Stateless**: one formatter can be shared across threads
//!
//! ```
//! use wrapped_json_log::prelude::*;
//! use wrapped_json_log::fields;
//!
//! let formatter = WrappedJsonFormatter::new();
//! let mut entry = LogEntry::new(LogLevel::Info, "started")
//!     .with_fields(fields! { "kind" => "audit", "user" => 42 });
//!
//! let bytes = formatter.format(&mut entry).unwrap();
//! let doc: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
//! assert_eq!(doc["audit"]["user"], 42);
//! ```

pub mod core;
pub mod formatters;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        FieldKey, FieldMap, FieldValue, Fields, Formatter, FormatterError, LogEntry, LogLevel,
        Result, TimestampFormat, KIND_FIELD,
    };
    pub use crate::formatters::WrappedJsonFormatter;
}

pub use core::{
    FieldKey, FieldMap, FieldValue, Fields, Formatter, FormatterError, LogEntry, LogLevel, Result,
    TimestampFormat, KIND_FIELD,
};
pub use formatters::{WrappedJsonFormatter, DEFAULT_KIND};
