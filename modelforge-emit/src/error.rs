//! Failure taxonomy for a generation run.
//!
//! Failures are explicit values aggregated into the run report; nothing in the
//! orchestration path unwinds past the entry point.

use miette::Diagnostic;
use thiserror::Error;

/// Result type for emitter functions.
pub type EmitResult<T> = Result<T, EmitError>;

/// Errors raised while rendering one artifact's text.
#[derive(Error, Debug, Diagnostic)]
pub enum EmitError {
    /// The model for this artifact is malformed (e.g. an empty type name).
    #[error("cannot render `{item}`: {message}")]
    #[diagnostic(code(modelforge::emit::malformed))]
    Malformed { item: String, message: String },
}

impl EmitError {
    /// Create a malformed-model error.
    pub fn malformed(item: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Malformed {
            item: item.into(),
            message: message.into(),
        }
    }
}

/// Which phase of the run a recoverable failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// A schema-provider call for one item failed.
    Introspection,
    /// Rendering one artifact's text failed.
    Generation,
    /// Writing one rendered artifact to storage failed.
    Persistence,
}

impl FailureKind {
    /// Lowercase label used in log messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Introspection => "introspection",
            Self::Generation => "generation",
            Self::Persistence => "persistence",
        }
    }
}

/// One recoverable failure, attributed to the schema item or file it affected.
#[derive(Debug, Clone)]
pub struct Failure {
    pub kind: FailureKind,
    /// Table, procedure, or file name.
    pub item: String,
    pub message: String,
}

impl Failure {
    /// Create a failure record.
    pub fn new(kind: FailureKind, item: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            item: item.into(),
            message: message.into(),
        }
    }

    /// The log-sink message for this failure.
    pub fn to_message(&self) -> String {
        format!("{} error ({}): {}", self.kind.label(), self.item, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message_names_the_item() {
        let failure = Failure::new(FailureKind::Introspection, "Orders", "timeout");
        let message = failure.to_message();
        assert!(message.contains("Orders"));
        assert!(message.contains("introspection"));
        assert!(message.contains("timeout"));
    }

    #[test]
    fn test_emit_error_display() {
        let err = EmitError::malformed("<table ''>", "empty type name");
        assert!(format!("{}", err).contains("empty type name"));
    }
}
