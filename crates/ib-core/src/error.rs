//! # BoardError
//!
//! Failures the board absorbs while loading persisted state.
//! None of them escape a store operation: they are logged and replaced by
//! the fallback value for the affected key.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    /// The persistence adapter could not be read or written.
    #[error("storage error on key {key}: {cause:#}")]
    Storage {
        key: &'static str,
        cause: anyhow::Error,
    },

    /// A persisted value was present but not well-formed.
    #[error("malformed snapshot under key {key}: {source}")]
    MalformedSnapshot {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// A specialized Result type for board internals.
pub type Result<T> = std::result::Result<T, BoardError>;
