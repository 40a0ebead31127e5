//! Error types for schema introspection and model assembly.

use miette::Diagnostic;
use thiserror::Error;

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors that can occur while introspecting a schema or assembling models.
#[derive(Error, Debug, Diagnostic)]
pub enum SchemaError {
    /// A provider call for one table, procedure, or relationship set failed.
    #[error("introspection failed for {item}: {message}")]
    #[diagnostic(code(modelforge::schema::introspection))]
    Introspection { item: String, message: String },

    /// A descriptor was malformed and could not be turned into a model.
    #[error("malformed descriptor `{item}`: {message}")]
    #[diagnostic(code(modelforge::schema::malformed))]
    Malformed { item: String, message: String },

    /// Configuration error.
    #[error("configuration error: {message}")]
    #[diagnostic(code(modelforge::schema::config))]
    Config { message: String },
}

impl SchemaError {
    /// Create an introspection error for one schema item.
    pub fn introspection(item: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Introspection {
            item: item.into(),
            message: message.into(),
        }
    }

    /// Create a malformed-descriptor error.
    pub fn malformed(item: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Malformed {
            item: item.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// The schema item this error is attributed to, if any.
    pub fn item(&self) -> Option<&str> {
        match self {
            Self::Introspection { item, .. } | Self::Malformed { item, .. } => Some(item),
            Self::Config { .. } => None,
        }
    }
}
