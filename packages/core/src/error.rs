//! Introspection Errors
//!
//! Absent metadata is never an error; these variants cover structural defects in
//! producer output and failed accessor or constructor calls.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, IntrospectionError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntrospectionError {
    /// A property was written to a slot outside the declared property count.
    #[error("Invalid metadata generated during introspection: property slot {index} is out of range for {len} properties")]
    SlotOutOfRange { index: usize, len: usize },

    /// The declared property count disagrees with the supplied property array.
    #[error("Invalid metadata generated during introspection: expected {expected} properties but {actual} were supplied")]
    PropertyCountMismatch { expected: usize, actual: usize },

    /// Population finished with unset property slots.
    #[error("Invalid metadata generated during introspection of {bean}: property slots {missing:?} were never populated")]
    IncompleteProperties { bean: String, missing: Vec<usize> },

    #[error("Property [{property}] is read-only")]
    ReadOnlyProperty { property: String },

    #[error("Property [{property}] is write-only")]
    WriteOnlyProperty { property: String },

    #[error("Cannot convert value for property [{property}]: {reason}")]
    PropertyConversion { property: String, reason: String },

    #[error("Instantiation error: {0}")]
    Instantiation(String),
}

impl IntrospectionError {
    /// Whether the error signals malformed producer output rather than a failed call.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            IntrospectionError::SlotOutOfRange { .. }
                | IntrospectionError::PropertyCountMismatch { .. }
                | IntrospectionError::IncompleteProperties { .. }
        )
    }
}
