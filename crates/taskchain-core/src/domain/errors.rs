//! Errors - binding failures, task failures and config loading.

use thiserror::Error;

/// BindError is returned when untyped params cannot be bound to typed slots.
///
/// Checks run in this order: arity once up front, then per position
/// addressability, exact type, writability.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    #[error("params length mismatch, want: {want}, but: {got}")]
    Arity { want: usize, got: usize },

    #[error("params #{index} must be an addressable slot")]
    NotAddressable { index: usize },

    #[error("params #{index} type mismatch: {expected} != {actual}")]
    TypeMismatch {
        index: usize,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("params #{index} cannot set")]
    NotWritable { index: usize },
}

impl BindError {
    /// Position the error refers to, if it is tied to one.
    pub fn index(&self) -> Option<usize> {
        match self {
            BindError::Arity { .. } => None,
            BindError::NotAddressable { index }
            | BindError::TypeMismatch { index, .. }
            | BindError::NotWritable { index } => Some(*index),
        }
    }
}

/// TaskError is whatever a task body fails with.
///
/// The pipeline never inspects it: a failing task ends the run and the error
/// comes back to the caller of `Pipeline::run` untouched.
#[derive(Debug)]
pub struct TaskError {
    message: String,
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl TaskError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The binder error this failure came from, if any.
    pub fn bind_error(&self) -> Option<&BindError> {
        self.source
            .as_deref()
            .and_then(|source| source.downcast_ref::<BindError>())
    }
}

impl std::fmt::Display for TaskError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for TaskError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|source| source as &(dyn std::error::Error + 'static))
    }
}

impl From<BindError> for TaskError {
    fn from(err: BindError) -> Self {
        Self::with_source(err.to_string(), err)
    }
}

impl From<String> for TaskError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for TaskError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

/// ConfigError is returned when a pipeline config cannot be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config io: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn bind_error_messages() {
        let e = BindError::Arity { want: 2, got: 1 };
        assert_eq!(e.to_string(), "params length mismatch, want: 2, but: 1");

        let e = BindError::TypeMismatch {
            index: 0,
            expected: "i32",
            actual: "alloc::string::String",
        };
        assert_eq!(
            e.to_string(),
            "params #0 type mismatch: i32 != alloc::string::String"
        );
        assert_eq!(e.index(), Some(0));
    }

    #[test]
    fn task_error_keeps_bind_error_as_source() {
        let err: TaskError = BindError::NotWritable { index: 3 }.into();
        assert_eq!(err.to_string(), "params #3 cannot set");
        assert_eq!(err.bind_error(), Some(&BindError::NotWritable { index: 3 }));
        assert!(err.source().is_some());
    }

    #[test]
    fn plain_task_error_has_no_source() {
        let err = TaskError::from("boom");
        assert_eq!(err.message(), "boom");
        assert!(err.bind_error().is_none());
        assert!(err.source().is_none());
    }
}
