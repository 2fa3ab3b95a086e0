//! Command parsing and dispatch for the interactive notebook.
//!
//! Raw input lines are split into word tokens, the action keyword is
//! matched against the recognized set, and the parsed command is applied
//! to a name store. Parsing is strict: a line must yield exactly two
//! tokens, and the first must be a known action. Both tokens are
//! lowercased, which is the case normalization the stores rely on.

use std::str::FromStr;

use crate::store::{DuplicateNameError, NameStore};

/// Errors produced while parsing a command line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// The input line was empty or all whitespace.
    #[error("input cannot be empty")]
    EmptyInput,

    /// The input did not split into exactly two tokens.
    #[error("expected exactly two arguments, got {found}")]
    MalformedAction {
        /// How many tokens the line actually produced.
        found: usize,
    },

    /// The action keyword is not one of the recognized actions.
    #[error("unknown action '{action}', expected 'add' or 'find'")]
    UnknownAction {
        /// The unrecognized keyword, as entered (after lowercasing).
        action: String,
    },
}

/// The set of recognized actions.
///
/// Keeping the actions in an enum makes the set statically exhaustive:
/// an unrecognized keyword is rejected during parsing, and dispatch is a
/// total match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Store a new name.
    Add,
    /// Count stored names starting with a prefix.
    Find,
}

impl FromStr for Action {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, CommandError> {
        match s {
            "add" => Ok(Self::Add),
            "find" => Ok(Self::Find),
            other => Err(CommandError::UnknownAction {
                action: other.to_string(),
            }),
        }
    }
}

/// A fully parsed command: an action and its name-or-prefix argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// The action to perform.
    pub action: Action,
    /// The lowercased name (for add) or prefix (for find).
    pub argument: String,
}

impl Command {
    /// Parses a raw input line into a command.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        if line.trim().is_empty() {
            return Err(CommandError::EmptyInput);
        }

        let tokens = tokenize(line);
        if tokens.len() != 2 {
            return Err(CommandError::MalformedAction {
                found: tokens.len(),
            });
        }

        let action = tokens[0].to_lowercase().parse()?;
        Ok(Self {
            action,
            argument: tokens[1].to_lowercase(),
        })
    }
}

/// Splits a line into word tokens, discarding empty fragments.
///
/// A token boundary is any character outside the word class (alphanumeric
/// or underscore).
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| !token.is_empty())
        .collect()
}

/// The result of a successfully dispatched command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The name was added to the store.
    Added {
        /// The stored (normalized) name.
        name: String,
    },
    /// Number of stored names starting with the queried prefix.
    Count(usize),
}

/// Applies a parsed command to the store.
pub fn dispatch<S>(command: &Command, store: &mut S) -> Result<Reply, DuplicateNameError>
where
    S: NameStore + ?Sized,
{
    match command.action {
        Action::Add => {
            store.insert(&command.argument)?;
            tracing::debug!(name = %command.argument, total = store.len(), "name added");
            Ok(Reply::Added {
                name: command.argument.clone(),
            })
        }
        Action::Find => {
            let count = store.count_with_prefix(&command.argument);
            tracing::debug!(prefix = %command.argument, count, "prefix counted");
            Ok(Reply::Count(count))
        }
    }
}
