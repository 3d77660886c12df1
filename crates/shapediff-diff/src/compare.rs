//! Orchestrator: the public entry points and the recursive walk.

use shapediff_types::{ToValue, Value};
use tracing::{debug, trace, warn};

use crate::aggregate;
use crate::classify::{classify, Classification};
use crate::comparison::{Comparison, DifferenceKind};
use crate::config::CompareConfig;
use crate::error::{DiffError, DiffResult};
use crate::scalar;
use crate::sequence;

/// Stand-in for a missing sequence element or record field.
pub(crate) static ABSENT: Value = Value::Absent;

/// Compare two values with the default configuration.
///
/// Never fails: kind mismatches, absent values and length mismatches are all
/// reported as nodes of the returned tree. Deeply equal inputs produce the
/// empty sentinel.
pub fn compare(left: &Value, right: &Value) -> Comparison {
    Comparator::default().compare(left, right)
}

/// [`compare`] for any two convertible Rust values.
pub fn compare_with<L, R>(left: &L, right: &R) -> Comparison
where
    L: ToValue + ?Sized,
    R: ToValue + ?Sized,
{
    Comparator::default().compare_with(left, right)
}

/// A configured comparison engine.
///
/// Holds only its configuration: a single comparator can be shared across
/// threads and reused for any number of comparisons.
#[derive(Clone, Debug, Default)]
pub struct Comparator {
    config: CompareConfig,
}

impl Comparator {
    pub fn new(config: CompareConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &CompareConfig {
        &self.config
    }

    /// Compare two values.
    ///
    /// Sequences and records nested deeper than the depth bound are not
    /// explored. Unless their equality is already clear from their shape,
    /// such a pair is reported as a `depth-exceeded` leaf whose values are
    /// cut to empty containers.
    pub fn compare(&self, left: &Value, right: &Value) -> Comparison {
        Walk::new(&self.config).compare(left, right)
    }

    /// Convert both sides with [`ToValue`] and compare them.
    pub fn compare_with<L, R>(&self, left: &L, right: &R) -> Comparison
    where
        L: ToValue + ?Sized,
        R: ToValue + ?Sized,
    {
        self.compare(&left.to_value(), &right.to_value())
    }

    /// Like [`Comparator::compare`], but a reached depth bound is an error
    /// naming the first location where it happened.
    pub fn try_compare(&self, left: &Value, right: &Value) -> DiffResult<Comparison> {
        let tree = self.compare(left, right);
        if let Some((path, _)) = tree.find(DifferenceKind::DepthExceeded) {
            return Err(DiffError::DepthExceeded {
                path,
                limit: self.config.max_depth.unwrap_or_default(),
            });
        }
        Ok(tree)
    }
}

/// State of one recursive comparison.
///
/// Under a bounded config nothing here looks more than `max_depth + 1`
/// levels below the root.
pub(crate) struct Walk<'c> {
    config: &'c CompareConfig,
    depth: usize,
}

impl<'c> Walk<'c> {
    fn new(config: &'c CompareConfig) -> Self {
        Self { config, depth: 0 }
    }

    /// Classify a pair and apply the matching rule.
    fn compare(&mut self, left: &Value, right: &Value) -> Comparison {
        match classify(left, right, self.levels()) {
            Classification::Equal => Comparison::empty(),
            Classification::Mismatch { left: lk, right: rk } => {
                debug!(left = %lk, right = %rk, depth = self.depth, "kind mismatch");
                Comparison::type_mismatch(self.capture(left), self.capture(right))
            }
            Classification::Scalars(kind) => {
                trace!(%kind, depth = self.depth, "comparing scalars");
                scalar::compare_scalars(left, right, self.config.unsupported)
            }
            Classification::Sequences(l, r) => {
                if self.exhausted() {
                    return self.depth_exceeded(left, right);
                }
                trace!(left_len = l.len(), right_len = r.len(), depth = self.depth, "aligning sequences");
                sequence::align(self, l, r)
            }
            Classification::Aggregates(l, r) => {
                if self.exhausted() {
                    return self.depth_exceeded(left, right);
                }
                trace!(fields = l.len(), depth = self.depth, "matching record fields");
                aggregate::match_fields(self, l, r)
            }
        }
    }

    /// Compare a child pair one level further down.
    pub(crate) fn descend(&mut self, left: &Value, right: &Value) -> Comparison {
        self.depth += 1;
        let comparison = self.compare(left, right);
        self.depth -= 1;
        comparison
    }

    /// Container levels left below the current node, or `None` when
    /// unbounded.
    fn levels(&self) -> Option<usize> {
        self.config
            .max_depth
            .map(|limit| limit.saturating_add(1).saturating_sub(self.depth))
    }

    fn exhausted(&self) -> bool {
        self.config.max_depth.is_some_and(|limit| self.depth > limit)
    }

    /// Copy a value into the tree, cut at the depth bound.
    fn capture(&self, value: &Value) -> Value {
        match self.levels() {
            Some(levels) => value.truncated(levels),
            None => value.clone(),
        }
    }

    fn depth_exceeded(&self, left: &Value, right: &Value) -> Comparison {
        warn!(limit = self.config.max_depth, depth = self.depth, "maximum comparison depth reached");
        Comparison::depth_exceeded(self.capture(left), self.capture(right))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use shapediff_types::Record;

    fn arb_value() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Absent),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::Int),
            "[a-z]{0,6}".prop_map(Value::Text),
            (-1.0e6f64..1.0e6).prop_map(Value::Float),
        ];
        leaf.prop_recursive(4, 32, 5, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..5).prop_map(Value::Seq),
                prop::collection::vec(("[a-d]", inner), 0..4).prop_map(|fields| {
                    let mut record = Record::new();
                    for (name, value) in fields {
                        record.set(name, value);
                    }
                    Value::Record(record)
                }),
            ]
        })
    }

    proptest! {
        #[test]
        fn reflexive(v in arb_value()) {
            prop_assert!(compare(&v, &v).is_empty());
        }

        #[test]
        fn deterministic(a in arb_value(), b in arb_value()) {
            prop_assert_eq!(compare(&a, &b), compare(&a, &b));
        }

        #[test]
        fn kind_mismatch_is_symmetric(a in arb_value(), b in arb_value()) {
            prop_assume!(a.kind() != b.kind());
            let forward = compare(&a, &b);
            let backward = compare(&b, &a);
            prop_assert_eq!(forward.kind, DifferenceKind::TypeMismatch);
            prop_assert_eq!(backward.kind, DifferenceKind::TypeMismatch);
            let forward = forward.difference.unwrap();
            let backward = backward.difference.unwrap();
            prop_assert_eq!(forward.left, backward.right);
            prop_assert_eq!(forward.right, backward.left);
        }

        #[test]
        fn non_empty_implies_unequal(a in arb_value(), b in arb_value()) {
            if !compare(&a, &b).is_empty() {
                prop_assert_ne!(a, b);
            }
        }

        #[test]
        fn leaves_are_never_empty(a in arb_value(), b in arb_value()) {
            let tree = compare(&a, &b);
            for (_, leaf) in tree.leaves() {
                prop_assert!(!leaf.is_empty());
            }
        }
    }
}
