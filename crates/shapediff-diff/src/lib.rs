//! Structural diff engine for Shapediff.
//!
//! Compares two [`Value`]s that are expected to share a shape and produces a
//! [`Comparison`] tree locating every divergence: scalar mismatches, kind
//! mismatches, sequence elements that differ or have no counterpart, and
//! record fields that differ.
//!
//! # Key Types
//!
//! - [`compare`] / [`Comparator`] -- Entry points (default and configured)
//! - [`Comparison`] / [`DifferenceKind`] / [`Difference`] -- The result tree
//! - [`Path`] / [`PathSegment`] -- Location of a node inside the tree
//! - [`CompareConfig`] / [`UnsupportedKinds`] -- Depth bound and unsupported-kind policy
//!
//! # Example
//!
//! ```rust
//! use shapediff_diff::{compare, DifferenceKind};
//! use shapediff_types::Value;
//!
//! let left = Value::from_json_str("[1, 2, 3]").unwrap();
//! let right = Value::from_json_str("[1, 5]").unwrap();
//!
//! let tree = compare(&left, &right);
//! assert_eq!(tree.children.len(), 2);
//! assert_eq!(tree.children[0].kind, DifferenceKind::SequenceElementMismatch);
//! assert_eq!(tree.children[1].kind, DifferenceKind::SequenceLengthMismatch);
//! ```

mod aggregate;
mod classify;
mod scalar;
mod sequence;

pub mod compare;
pub mod comparison;
pub mod config;
pub mod error;
pub mod path;

pub use compare::{compare, compare_with, Comparator};
pub use comparison::{Comparison, Difference, DifferenceKind};
pub use config::{CompareConfig, UnsupportedKinds, DEFAULT_MAX_DEPTH};
pub use error::{DiffError, DiffResult};
pub use path::{Path, PathSegment};

pub use shapediff_types::Value;
