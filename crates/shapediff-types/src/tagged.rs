//! Lossless serde encoding of values.
//!
//! Identical to the plain [`Value`] encoding except in three places:
//!
//! - a record with a type name becomes `{"$record": "Name", "$fields": {..}}`
//! - an anonymous record whose keys all start with `$` is wrapped the same
//!   way, with `"$record": null`, so it cannot be read back as a marker
//! - NaN and the infinities become `{"$float": "NaN" | "inf" | "-inf"}`
//!
//! Use it on a field with `#[serde(with = "shapediff_types::tagged")]`.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::record::Record;
use crate::value::Value;

const RECORD_KEY: &str = "$record";
const FIELDS_KEY: &str = "$fields";
const FLOAT_KEY: &str = "$float";

pub fn serialize<S: Serializer>(value: &Value, serializer: S) -> Result<S::Ok, S::Error> {
    Tagged(value).serialize(serializer)
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Value, D::Error> {
    Value::deserialize(deserializer).map(untag)
}

struct Tagged<'v>(&'v Value);

impl Serialize for Tagged<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Value::Float(f) if !f.is_finite() => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(FLOAT_KEY, float_name(*f))?;
                map.end()
            }
            Value::Seq(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(&Tagged(item))?;
                }
                seq.end()
            }
            Value::Record(record) if needs_wrapper(record) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry(RECORD_KEY, &record.type_name())?;
                map.serialize_entry(FIELDS_KEY, &TaggedFields(record))?;
                map.end()
            }
            Value::Record(record) => TaggedFields(record).serialize(serializer),
            other => other.serialize(serializer),
        }
    }
}

struct TaggedFields<'v>(&'v Record);

impl Serialize for TaggedFields<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in self.0.fields() {
            map.serialize_entry(name, &Tagged(value))?;
        }
        map.end()
    }
}

fn needs_wrapper(record: &Record) -> bool {
    record.type_name().is_some()
        || (!record.is_empty() && record.names().all(|name| name.starts_with('$')))
}

fn float_name(f: f64) -> &'static str {
    if f.is_nan() {
        "NaN"
    } else if f > 0.0 {
        "inf"
    } else {
        "-inf"
    }
}

fn parse_float_name(name: &str) -> Option<f64> {
    match name {
        "NaN" => Some(f64::NAN),
        "inf" => Some(f64::INFINITY),
        "-inf" => Some(f64::NEG_INFINITY),
        _ => None,
    }
}

fn untag(value: Value) -> Value {
    match value {
        Value::Seq(items) => Value::Seq(items.into_iter().map(untag).collect()),
        Value::Record(record) => untag_record(record),
        other => other,
    }
}

fn untag_record(record: Record) -> Value {
    let (type_name, mut fields) = record.into_parts();

    if let [(key, Value::Text(name))] = fields.as_slice() {
        if key == FLOAT_KEY {
            if let Some(f) = parse_float_name(name) {
                return Value::Float(f);
            }
        }
    }

    if fields.len() == 2 {
        let name_at = fields.iter().position(|(key, _)| key == RECORD_KEY);
        let fields_at = fields.iter().position(|(key, _)| key == FIELDS_KEY);
        if let (Some(n), Some(f)) = (name_at, fields_at) {
            if matches!(
                (&fields[n].1, &fields[f].1),
                (Value::Text(_) | Value::Absent, Value::Record(_))
            ) {
                let inner = fields.swap_remove(f).1;
                let type_name = match fields.pop() {
                    Some((_, Value::Text(name))) => Some(name),
                    _ => None,
                };
                return match inner {
                    Value::Record(inner) => Value::Record(untag_fields(type_name, inner)),
                    other => other,
                };
            }
        }
    }

    Value::Record(untag_fields(type_name, Record::from_parts(None, fields)))
}

fn untag_fields(type_name: Option<String>, record: Record) -> Record {
    let fields = record
        .into_parts()
        .1
        .into_iter()
        .map(|(name, value)| (name, untag(value)))
        .collect();
    Record::from_parts(type_name, fields)
}
