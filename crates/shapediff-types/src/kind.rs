use std::fmt;

use serde::{Deserialize, Serialize};

/// The coarse structural category of a [`Value`](crate::Value).
///
/// The set is closed: every value falls into exactly one kind, and the diff
/// engine dispatches on it with a single `match`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Kind {
    /// A missing value (JSON `null`, `None`, or a sequence/record slot with
    /// no counterpart).
    Absent,
    Boolean,
    Integer,
    Text,
    Sequence,
    Aggregate,
    /// Floating-point numbers. Representable but outside the set of kinds
    /// the engine knows how to diff.
    Float,
}

impl Kind {
    /// Returns `true` if the diff engine has a comparison rule for this kind.
    pub fn is_supported(self) -> bool {
        !matches!(self, Kind::Float)
    }

    /// Returns `true` for boolean, integer and text.
    pub fn is_scalar(self) -> bool {
        matches!(self, Kind::Boolean | Kind::Integer | Kind::Text)
    }

    /// Stable lowercase name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Absent => "absent",
            Kind::Boolean => "boolean",
            Kind::Integer => "integer",
            Kind::Text => "text",
            Kind::Sequence => "sequence",
            Kind::Aggregate => "aggregate",
            Kind::Float => "float",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_float_is_unsupported() {
        let all = [
            Kind::Absent,
            Kind::Boolean,
            Kind::Integer,
            Kind::Text,
            Kind::Sequence,
            Kind::Aggregate,
            Kind::Float,
        ];
        let unsupported: Vec<_> = all.iter().filter(|k| !k.is_supported()).collect();
        assert_eq!(unsupported, vec![&Kind::Float]);
    }

    #[test]
    fn scalar_kinds() {
        assert!(Kind::Boolean.is_scalar());
        assert!(Kind::Integer.is_scalar());
        assert!(Kind::Text.is_scalar());
        assert!(!Kind::Absent.is_scalar());
        assert!(!Kind::Sequence.is_scalar());
        assert!(!Kind::Float.is_scalar());
    }

    #[test]
    fn display_matches_serde_name() {
        let json = serde_json::to_string(&Kind::Aggregate).unwrap();
        assert_eq!(json, format!("\"{}\"", Kind::Aggregate));
    }
}
