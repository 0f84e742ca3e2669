//! Core formatter types and traits

pub mod error;
pub mod field_map;
pub mod field_value;
pub mod formatter;
pub mod log_entry;
pub mod log_level;
pub mod timestamp;

pub use error::{FormatterError, Result};
pub use field_map::{FieldKey, FieldMap};
pub use field_value::{FieldValue, Fields};
pub use formatter::Formatter;
pub use log_entry::{LogEntry, KIND_FIELD};
pub use log_level::LogLevel;
pub use timestamp::TimestampFormat;
