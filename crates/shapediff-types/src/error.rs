//! Error types for the types crate.

use thiserror::Error;

/// Errors produced while building values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValueError {
    #[error("invalid JSON document: {0}")]
    Parse(String),
}

/// Convenience alias for value results.
pub type ValueResult<T> = Result<T, ValueError>;
