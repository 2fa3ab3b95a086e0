//! Error types for name store operations.

/// Result type for name store insertions.
pub type InsertResult = Result<(), DuplicateNameError>;

/// Error returned when a name that is already stored is inserted again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("name '{name}' already exists in the notebook")]
pub struct DuplicateNameError {
    /// The name that was already present.
    pub name: String,
}

impl DuplicateNameError {
    /// Creates a new error for the given name.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into() }
    }
}
