//! Cross-cutting error types.
//!
//! Domain-specific errors (e.g. `ClientError`, `StagingError`) live in their
//! respective crates. Everything converges into `anyhow` in `lms-cli`.

use thiserror::Error;

use crate::validation::FieldViolation;

/// Errors that can be raised by any LMS crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// A draft failed one or more field constraints.
    #[error("Validation error: {}", FieldViolation::join(.0))]
    Validation(Vec<FieldViolation>),

    /// A string could not be parsed into a domain enum.
    #[error("Invalid {field} value '{value}'")]
    InvalidValue { field: String, value: String },
}
