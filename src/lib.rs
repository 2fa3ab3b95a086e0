//! Namebook Library
//!
//! This library contains the core components of the namebook, a
//! prefix-counting dictionary of unique names: the store backends, the
//! command parsing layer, and the interactive loop built on top of them.
//! The library is designed to be used by the binary crate, but can also
//! be used as a dependency by other projects.
//!
//! # Architecture
//!
//! The notebook is designed with the following principles in mind:
//! - One owned store value, passed explicitly; no process-wide state
//! - A trait seam between the store backends and the command layer
//! - Explicit error values for every caller-facing failure
//! - Loop-based traversals, so input length never grows the stack

// Re-export public modules
pub mod command;
pub mod error;
pub mod repl;
pub mod store;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the namebook.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
