//! Formatter trait: turns a prepared entry into output bytes

use super::{error::Result, log_entry::LogEntry};

/// Serializes one log entry.
///
/// The entry is borrowed mutably for the duration of the call: a
/// formatter may rewrite its fields, and callers observe those changes
/// afterwards.
pub trait Formatter: Send + Sync {
    fn format(&self, entry: &mut LogEntry) -> Result<Vec<u8>>;
    fn name(&self) -> &str;
}
