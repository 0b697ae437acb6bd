//! Domain-level error types.

use thiserror::Error;

/// A single rejected input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: &'static str,
    pub message: String,
    /// Machine-readable error kind, e.g. `value_error`.
    pub kind: &'static str,
}

impl Violation {
    pub fn new(field: &'static str, kind: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
            kind,
        }
    }
}

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity_type} not found")]
    NotFound { entity_type: &'static str, id: i32 },

    #[error("Validation failed: {}", summarize(.0))]
    Validation(Vec<Violation>),
}

impl DomainError {
    /// Fails with every collected violation, or succeeds when there are none.
    pub fn check(violations: Vec<Violation>) -> Result<(), DomainError> {
        if violations.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(violations))
        }
    }
}

fn summarize(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Repository-level errors.
///
/// Absence is not an error: lookups return `Ok(None)` instead.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error(transparent)]
    Invalid(#[from] DomainError),
}
