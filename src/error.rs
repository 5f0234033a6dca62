//! # Error Handling
//!
//! This module defines the centralized error handling mechanism for the
//! `config-tree` library. It uses the `thiserror` library to create a small
//! `Error` enum covering the anticipated failure modes of path-addressed
//! access, with clear and descriptive error messages.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum that represents all possible errors. Each
//!   variant corresponds to a specific failure and carries the offending
//!   path where applicable.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`, used
//!   throughout the library to simplify function signatures.
//!
//! The taxonomy is deliberately small:
//!
//! - Empty path strings (rejected before any traversal).
//! - Child lookups that resolve to nothing.
//! - Child lookups that resolve to a scalar where a mapping was expected.
//!
//! Merging has no error conditions and contributes no variants. All errors
//! are raised at the point of detection and propagate unmodified to the
//! caller; the library never retries, logs a failure, or returns a partial
//! result in place of an error.

use thiserror::Error;

/// Main error type for config-tree operations
#[derive(Error, Debug)]
pub enum Error {
    /// The path string was empty.
    ///
    /// Raised before any traversal takes place. The empty string never
    /// addresses anything; a path addressing the empty-string key is
    /// written as `/` (leading separator).
    #[error("Path operation error: empty path is not addressable")]
    InvalidPath,

    /// A child lookup's path did not resolve to any value and the caller
    /// did not request tolerant behavior.
    #[error("Path \"{path}\" does not exist")]
    NotFound { path: String },

    /// A child lookup's path resolved to a value that is not a mapping
    /// where a sub-configuration was expected.
    #[error("Path \"{path}\" is expected to hold a mapping but holds a leaf value")]
    InvalidStructure { path: String },
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
