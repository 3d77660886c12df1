//! Field descriptor tables for typed aggregates.
//!
//! A Rust struct takes part in comparison by exposing a static table of
//! [`Field`]s: one entry per field, holding the field name and an accessor
//! that converts the field into a [`Value`]. The table is fixed at compile
//! time, so no runtime introspection is involved.
//!
//! The [`aggregate!`](crate::aggregate!) macro builds the table and the
//! matching [`ToValue`](crate::ToValue) impl:
//!
//! ```rust
//! use shapediff_types::{aggregate, Aggregate, ToValue, Value};
//!
//! struct Point {
//!     x: i64,
//!     y: i64,
//! }
//!
//! aggregate!(Point { x, y });
//!
//! let names: Vec<_> = Point::fields().iter().map(|f| f.name()).collect();
//! assert_eq!(names, ["x", "y"]);
//!
//! let value = Point { x: 1, y: 2 }.to_value();
//! assert_eq!(value.as_record().unwrap().get("y"), Some(&Value::Int(2)));
//! ```

use std::fmt;

use crate::record::Record;
use crate::value::Value;

/// One entry of a field descriptor table: a name and an accessor.
pub struct Field<T> {
    name: &'static str,
    read: fn(&T) -> Value,
}

impl<T> Field<T> {
    pub const fn new(name: &'static str, read: fn(&T) -> Value) -> Self {
        Self { name, read }
    }

    /// The declared field name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Read this field from `target`.
    pub fn read(&self, target: &T) -> Value {
        (self.read)(target)
    }
}

impl<T> Clone for Field<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Field<T> {}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Field({})", self.name)
    }
}

/// A record-like type with a compile-time field table.
pub trait Aggregate: Sized + 'static {
    /// Name recorded on the produced [`Record`].
    const TYPE_NAME: &'static str;

    /// Field descriptors in declaration order.
    fn fields() -> &'static [Field<Self>];

    /// Read every field through the descriptor table.
    fn to_record(&self) -> Record {
        let mut record = Record::named(Self::TYPE_NAME);
        for field in Self::fields() {
            record.set(field.name(), field.read(self));
        }
        record
    }
}

/// Declare a struct as an [`Aggregate`] and implement
/// [`ToValue`](crate::ToValue) for it.
///
/// List the fields to expose, in the order they should be compared. Every
/// listed field's type must itself implement `ToValue`.
#[macro_export]
macro_rules! aggregate {
    ($ty:ident { $($field:ident),* $(,)? }) => {
        impl $crate::Aggregate for $ty {
            const TYPE_NAME: &'static str = stringify!($ty);

            fn fields() -> &'static [$crate::Field<Self>] {
                $(
                    #[allow(non_snake_case)]
                    fn $field(target: &$ty) -> $crate::Value {
                        $crate::ToValue::to_value(&target.$field)
                    }
                )*
                static FIELDS: &[$crate::Field<$ty>] = &[
                    $($crate::Field::new(stringify!($field), $field)),*
                ];
                FIELDS
            }
        }

        impl $crate::ToValue for $ty {
            fn to_value(&self) -> $crate::Value {
                $crate::Value::Record($crate::Aggregate::to_record(self))
            }
        }
    };
}
