//! Error types for the formatter

pub type Result<T> = std::result::Result<T, FormatterError>;

#[derive(Debug, thiserror::Error)]
pub enum FormatterError {
    /// The assembled field set could not be encoded as JSON
    #[error("failed to marshal fields to JSON: {source}")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Unknown log level name
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),
}

impl FormatterError {
    /// Wrap an encoder failure
    pub fn serialization(source: serde_json::Error) -> Self {
        FormatterError::Serialization { source }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        FormatterError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create an invalid level error
    pub fn invalid_level(name: impl Into<String>) -> Self {
        FormatterError::InvalidLevel(name.into())
    }

    /// Whether this is an encoder failure
    pub fn is_serialization(&self) -> bool {
        matches!(self, FormatterError::Serialization { .. })
    }
}
