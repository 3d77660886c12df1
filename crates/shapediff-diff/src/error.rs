//! Error types for the diff crate.

use crate::path::Path;

/// Errors that can occur during diff operations.
///
/// [`compare`](crate::compare) itself never fails; these surface only from
/// the strict entry point [`Comparator::try_compare`](crate::Comparator::try_compare)
/// and from configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// The comparison reached the configured depth bound.
    #[error("maximum comparison depth {limit} exceeded at {path}")]
    DepthExceeded { path: Path, limit: usize },

    /// The configuration could not be parsed or is inconsistent.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
