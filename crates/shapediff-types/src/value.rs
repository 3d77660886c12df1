//! The dynamically-typed value model.
//!
//! [`Value`] is what the diff engine compares. It can be built by hand, from
//! typed Rust values through [`ToValue`](crate::ToValue), or decoded from any
//! self-describing serde format. JSON maps to values as follows:
//!
//! | JSON                      | Value          |
//! |---------------------------|----------------|
//! | `null`                    | `Absent`       |
//! | `true` / `false`          | `Bool`         |
//! | integer fitting in `i64`  | `Int`          |
//! | any other number          | `Float`        |
//! | string                    | `Text`         |
//! | array                     | `Seq`          |
//! | object                    | `Record` (document key order kept) |
//!
//! This plain encoding drops record type names and, in JSON, writes
//! non-finite floats as `null`. [`tagged`](crate::tagged) keeps both.

use std::fmt;

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ValueError, ValueResult};
use crate::kind::Kind;
use crate::record::Record;

/// A comparable value.
///
/// Equality is structural and covers any depth. Two records are equal only
/// if they carry the same type name and the same fields in the same order.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    #[default]
    Absent,
    Bool(bool),
    Int(i64),
    Text(String),
    Seq(Vec<Value>),
    Record(Record),
    Float(f64),
}

impl Value {
    /// Decode a value from a JSON document.
    pub fn from_json_str(s: &str) -> ValueResult<Self> {
        serde_json::from_str(s).map_err(|e| ValueError::Parse(e.to_string()))
    }

    /// The structural category of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Absent => Kind::Absent,
            Value::Bool(_) => Kind::Boolean,
            Value::Int(_) => Kind::Integer,
            Value::Text(_) => Kind::Text,
            Value::Seq(_) => Kind::Sequence,
            Value::Record(_) => Kind::Aggregate,
            Value::Float(_) => Kind::Float,
        }
    }

    /// Returns `true` for [`Value::Absent`].
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// The elements, if this is a sequence.
    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Value::Seq(items) => Some(items),
            _ => None,
        }
    }

    /// The record, if this is an aggregate.
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Structural equality that looks inside at most `levels` nested
    /// containers.
    ///
    /// Returns `None` when the answer depends on contents below that level.
    /// A pair is still decided at the cut when the container shapes already
    /// differ, or when both containers are empty.
    pub fn eq_within(&self, other: &Value, levels: usize) -> Option<bool> {
        match (self, other) {
            (Value::Seq(l), Value::Seq(r)) => {
                if l.len() != r.len() {
                    return Some(false);
                }
                if l.is_empty() {
                    return Some(true);
                }
                all_within(l.iter().zip(r), levels.checked_sub(1)?)
            }
            (Value::Record(l), Value::Record(r)) => {
                if l.type_name() != r.type_name() || l.len() != r.len() || !l.names().eq(r.names()) {
                    return Some(false);
                }
                if l.is_empty() {
                    return Some(true);
                }
                let pairs = l.fields().map(|(_, v)| v).zip(r.fields().map(|(_, v)| v));
                all_within(pairs, levels.checked_sub(1)?)
            }
            _ => Some(self == other),
        }
    }

    /// A copy holding at most `levels` nested containers.
    ///
    /// Containers at the cut keep their kind and type name but lose their
    /// contents.
    pub fn truncated(&self, levels: usize) -> Value {
        match self {
            Value::Seq(items) => Value::Seq(match levels.checked_sub(1) {
                Some(next) => items.iter().map(|item| item.truncated(next)).collect(),
                None => Vec::new(),
            }),
            Value::Record(record) => Value::Record(record.truncated(levels)),
            other => other.clone(),
        }
    }
}

fn all_within<'v>(pairs: impl Iterator<Item = (&'v Value, &'v Value)>, levels: usize) -> Option<bool> {
    let mut decided = true;
    for (l, r) in pairs {
        match l.eq_within(r, levels) {
            Some(false) => return Some(false),
            Some(true) => {}
            None => decided = false,
        }
    }
    decided.then_some(true)
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Seq(v)
    }
}

impl From<Record> for Value {
    fn from(v: Record) -> Self {
        Value::Record(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Absent, Into::into)
    }
}

// ---------------------------------------------------------------------------
// serde
// ---------------------------------------------------------------------------

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Absent => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::Seq(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            // The type name has no place in a plain map and is dropped.
            Value::Record(record) => {
                let mut map = serializer.serialize_map(Some(record.len()))?;
                for (name, value) in record.fields() {
                    map.serialize_entry(name, value)?;
                }
                map.end()
            }
        }
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a null, boolean, number, string, sequence or map")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Absent)
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Absent)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        Value::deserialize(deserializer)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
        Ok(Value::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
        Ok(i64::try_from(v).map_or(Value::Float(v as f64), Value::Int))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
        Ok(Value::Float(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
        Ok(Value::Text(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
        Ok(Value::Text(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Value, A::Error> {
        let mut items = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(item) = access.next_element::<Value>()? {
            items.push(item);
        }
        Ok(Value::Seq(items))
    }

    fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Value, M::Error> {
        let mut record = Record::new();
        while let Some((name, value)) = access.next_entry::<String, Value>()? {
            record.set(name, value);
        }
        Ok(Value::Record(record))
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}
