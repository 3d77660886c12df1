//! Classifier: decides how a pair of values is compared.

use shapediff_types::{Kind, Record, Value};

/// The dispatch decision for one pair of values.
#[derive(Debug, PartialEq)]
pub(crate) enum Classification<'v> {
    /// Deeply equal: nothing to report.
    Equal,
    /// The kinds differ: report a type mismatch without recursing.
    Mismatch { left: Kind, right: Kind },
    /// Both sides are the same scalar or unsupported kind.
    Scalars(Kind),
    /// Both sides are sequences.
    Sequences(&'v [Value], &'v [Value]),
    /// Both sides are records.
    Aggregates(&'v Record, &'v Record),
}

/// Classify a pair, checking equality at most `levels` containers deep.
///
/// With `None` the equality check is unbounded. A pair whose equality cannot
/// be decided within `levels` is dispatched like an unequal one.
pub(crate) fn classify<'v>(
    left: &'v Value,
    right: &'v Value,
    levels: Option<usize>,
) -> Classification<'v> {
    let equal = match levels {
        Some(levels) => left.eq_within(right, levels) == Some(true),
        None => left == right,
    };
    if equal {
        return Classification::Equal;
    }

    match (left, right) {
        (Value::Seq(l), Value::Seq(r)) => Classification::Sequences(l, r),
        (Value::Record(l), Value::Record(r)) => Classification::Aggregates(l, r),
        _ => {
            let (lk, rk) = (left.kind(), right.kind());
            if lk == rk {
                Classification::Scalars(lk)
            } else {
                Classification::Mismatch {
                    left: lk,
                    right: rk,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_values_short_circuit() {
        assert_eq!(classify(&Value::Absent, &Value::Absent, None), Classification::Equal);
        let seq = Value::Seq(vec![Value::Int(1), Value::from("a")]);
        assert_eq!(classify(&seq, &seq.clone(), None), Classification::Equal);
        assert_eq!(classify(&seq, &seq.clone(), Some(1)), Classification::Equal);
    }

    #[test]
    fn equality_below_the_budget_is_not_assumed() {
        let deep = Value::Seq(vec![Value::Seq(vec![Value::Int(1)])]);
        assert!(matches!(classify(&deep, &deep.clone(), Some(1)), Classification::Sequences(..)));
        assert_eq!(classify(&deep, &deep.clone(), Some(2)), Classification::Equal);
    }

    #[test]
    fn absent_against_present_is_mismatch() {
        assert_eq!(
            classify(&Value::Absent, &Value::Bool(true), None),
            Classification::Mismatch {
                left: Kind::Absent,
                right: Kind::Boolean
            }
        );
    }

    #[test]
    fn empty_sequence_is_still_a_sequence() {
        let empty = Value::Seq(vec![]);
        let full = Value::Seq(vec![Value::Int(1)]);
        assert!(matches!(classify(&empty, &full, None), Classification::Sequences(l, r) if l.is_empty() && r.len() == 1));
    }

    #[test]
    fn records_of_different_types_share_a_kind() {
        let a = Value::Record(Record::named("A").with("x", 1i64));
        let b = Value::Record(Record::named("B").with("x", 1i64));
        assert!(matches!(classify(&a, &b, None), Classification::Aggregates(..)));
    }

    #[test]
    fn unequal_scalars_dispatch_on_kind() {
        assert_eq!(
            classify(&Value::Int(1), &Value::Int(2), None),
            Classification::Scalars(Kind::Integer)
        );
        assert_eq!(
            classify(&Value::Float(1.0), &Value::Float(2.0), None),
            Classification::Scalars(Kind::Float)
        );
    }

    #[test]
    fn sequence_against_record_is_mismatch() {
        let seq = Value::Seq(vec![]);
        let rec = Value::Record(Record::new());
        assert_eq!(
            classify(&seq, &rec, None),
            Classification::Mismatch {
                left: Kind::Sequence,
                right: Kind::Aggregate
            }
        );
    }
}
