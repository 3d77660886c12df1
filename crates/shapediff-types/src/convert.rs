//! Conversion of Rust values into [`Value`].

use crate::record::Record;
use crate::value::Value;

/// Borrowing conversion into a [`Value`].
///
/// Implemented for the primitive kinds, strings, options, sequences, and any
/// type declared with [`aggregate!`](crate::aggregate!).
pub trait ToValue {
    fn to_value(&self) -> Value;
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl ToValue for Record {
    fn to_value(&self) -> Value {
        Value::Record(self.clone())
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

macro_rules! lossless_int {
    ($($t:ty),*) => {
        $(
            impl ToValue for $t {
                fn to_value(&self) -> Value {
                    Value::Int(i64::from(*self))
                }
            }
        )*
    };
}

lossless_int!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! wide_int {
    ($($t:ty),*) => {
        $(
            impl ToValue for $t {
                fn to_value(&self) -> Value {
                    i64::try_from(*self).map_or(Value::Float(*self as f64), Value::Int)
                }
            }
        )*
    };
}

// Out-of-range values fall back to `Float`, matching the JSON decoder.
wide_int!(isize, u64, usize);

impl ToValue for f32 {
    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }
}

impl ToValue for f64 {
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::Text(self.to_owned())
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Absent, ToValue::to_value)
    }
}

impl<T: ToValue> ToValue for [T] {
    fn to_value(&self) -> Value {
        Value::Seq(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl<T: ToValue, const N: usize> ToValue for [T; N] {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for Box<T> {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_widen_to_int() {
        assert_eq!(7u8.to_value(), Value::Int(7));
        assert_eq!((-3i16).to_value(), Value::Int(-3));
        assert_eq!(u32::MAX.to_value(), Value::Int(i64::from(u32::MAX)));
        assert_eq!(12usize.to_value(), Value::Int(12));
    }

    #[test]
    fn oversized_u64_becomes_float() {
        assert_eq!(u64::MAX.to_value().kind(), crate::Kind::Float);
    }

    #[test]
    fn strings_and_slices() {
        assert_eq!("abc".to_value(), Value::Text("abc".into()));
        assert_eq!(
            vec!["a", "b"].to_value(),
            Value::Seq(vec![Value::from("a"), Value::from("b")])
        );
        assert_eq!([true, false].to_value().as_seq().map(<[Value]>::len), Some(2));
    }

    #[test]
    fn none_is_absent() {
        let missing: Option<String> = None;
        assert_eq!(missing.to_value(), Value::Absent);
        assert_eq!(Some(1i32).to_value(), Value::Int(1));
    }

    #[test]
    fn nested_options_in_sequences() {
        let items = vec![Some(1i64), None, Some(3)];
        assert_eq!(
            items.to_value(),
            Value::Seq(vec![Value::Int(1), Value::Absent, Value::Int(3)])
        );
    }
}
