// src/errors.rs

//! Crate-wide error aliases and helpers.
//!
//! The core task machinery has no runtime error channel (its contracts are
//! enforced by the type system), so this is just a thin wrapper around
//! `anyhow` for the script and runtime layers, and a single place to add
//! more structured error types later.

pub use anyhow::{Error, Result};
