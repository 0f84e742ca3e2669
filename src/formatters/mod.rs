//! Formatter implementations

pub mod wrapped_json;

pub use wrapped_json::{WrappedJsonFormatter, CLASH_PREFIX, DEFAULT_KIND};

// Re-export the trait for convenience
pub use crate::core::Formatter;
