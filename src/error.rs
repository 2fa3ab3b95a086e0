//! Error module for the notebook.
//!
//! One crate-wide error enum aggregates the component errors with `#[from]`
//! conversions, so any layer can propagate with `?` and the REPL can print
//! a single error value regardless of where it originated.

use thiserror::Error;

use crate::command::CommandError;
use crate::store::DuplicateNameError;

/// Result type alias used throughout the notebook.
pub type NamebookResult<T> = Result<T, NamebookError>;

/// Core error enum for the notebook.
#[derive(Error, Debug)]
pub enum NamebookError {
    /// A command line failed to parse.
    #[error(transparent)]
    Command(#[from] CommandError),

    /// The name being added is already stored.
    #[error(transparent)]
    Duplicate(#[from] DuplicateNameError),

    /// IO errors from the input/output streams or preload files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
