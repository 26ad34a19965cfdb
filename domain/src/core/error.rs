//! Domain error types

use thiserror::Error;

/// Domain-level errors raised by strategy contracts and lookups.
///
/// Shape violations and unsupported-variant lookups are raised at the point
/// of detection. Orchestrators return them to the caller unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Record {record} is missing field '{field}'")]
    MissingField { record: usize, field: String },

    #[error("Record {record} has unexpected field '{field}'")]
    UnexpectedField { record: usize, field: String },

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Unsupported {family} variant '{key}' (available: {})", .available.join(", "))]
    UnsupportedVariant {
        family: &'static str,
        key: String,
        available: Vec<String>,
    },
}

impl DomainError {
    /// Check if this error is a shape violation of the input records
    pub fn is_shape_violation(&self) -> bool {
        matches!(
            self,
            DomainError::MissingField { .. }
                | DomainError::UnexpectedField { .. }
                | DomainError::MalformedInput(_)
        )
    }

    /// Check if this error came from a lookup of an unknown variant key
    pub fn is_unsupported_variant(&self) -> bool {
        matches!(self, DomainError::UnsupportedVariant { .. })
    }
}
