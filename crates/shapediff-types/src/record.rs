//! Record values: the aggregate kind.
//!
//! A [`Record`] keeps its fields in declaration order. The diff engine walks
//! the left-hand record in that order and looks fields up on the right-hand
//! record by name.

use crate::value::Value;

/// An ordered set of named fields, optionally tagged with the name of the
/// Rust type it was built from.
///
/// Field names are unique: [`Record::set`] replaces an existing field in
/// place rather than appending a duplicate.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    type_name: Option<String>,
    fields: Vec<(String, Value)>,
}

impl Record {
    /// Create an anonymous, empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty record tagged with a type name.
    pub fn named(type_name: impl Into<String>) -> Self {
        Self {
            type_name: Some(type_name.into()),
            fields: Vec::new(),
        }
    }

    /// Builder-style [`Record::set`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Set a field. An existing field keeps its position.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Look up a field by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// The type name, if the record was built from a typed value.
    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Field names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// See [`Value::truncated`].
    pub(crate) fn truncated(&self, levels: usize) -> Record {
        let fields = match levels.checked_sub(1) {
            Some(next) => self
                .fields
                .iter()
                .map(|(name, value)| (name.clone(), value.truncated(next)))
                .collect(),
            None => Vec::new(),
        };
        Record {
            type_name: self.type_name.clone(),
            fields,
        }
    }

    pub(crate) fn into_parts(self) -> (Option<String>, Vec<(String, Value)>) {
        (self.type_name, self.fields)
    }

    /// Rebuild a record from parts taken from another record, whose field
    /// names are already unique.
    pub(crate) fn from_parts(type_name: Option<String>, fields: Vec<(String, Value)>) -> Record {
        Record { type_name, fields }
    }
}
