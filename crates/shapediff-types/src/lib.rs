//! Foundation types for Shapediff.
//!
//! This crate provides the dynamically-typed input model that the diff engine
//! walks. Every other Shapediff crate depends on `shapediff-types`.
//!
//! # Key Types
//!
//! - [`Value`] — Closed set of comparable values (scalars, sequences, records, absent)
//! - [`Kind`] — Coarse structural category used to pick a comparison rule
//! - [`Record`] — Ordered, named fields of an aggregate value
//! - [`Aggregate`] / [`Field`] — Per-type field descriptor tables (see [`aggregate!`])
//! - [`ToValue`] — Conversion from Rust values into [`Value`]
//! - [`tagged`] — Lossless serde encoding that keeps record type names and non-finite floats

pub mod aggregate;
pub mod convert;
pub mod error;
pub mod kind;
pub mod record;
pub mod tagged;
pub mod value;

pub use aggregate::{Aggregate, Field};
pub use convert::ToValue;
pub use error::{ValueError, ValueResult};
pub use kind::Kind;
pub use record::Record;
pub use value::Value;
