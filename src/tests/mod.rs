//! Test modules for the namebook.
//!
//! This module contains the cross-cutting test infrastructure:
//! - Cross-backend scenario grids (every backend must pass the same table)
//! - Property-based tests comparing each backend against a naive model
//!
//! Per-module unit tests live next to the code they cover.
