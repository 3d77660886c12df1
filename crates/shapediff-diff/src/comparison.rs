//! The comparison tree.
//!
//! A [`Comparison`] is either the empty sentinel (the two values are equal)
//! or a node describing one divergence: a leaf [`Difference`], a list of
//! child nodes, or both. Children are attached only when non-empty and always
//! in traversal order: ascending index for sequences, left-hand declaration
//! order for records.

use std::fmt;

use serde::{Deserialize, Serialize};
use shapediff_types::Value;

use crate::path::{Path, PathSegment};

/// Why a comparison node exists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DifferenceKind {
    /// No positional tag: the root node, or the empty sentinel.
    #[default]
    None,
    /// The two values have different kinds.
    TypeMismatch,
    /// A sequence element present on both sides differs.
    SequenceElementMismatch,
    /// A sequence element has no counterpart on the other side.
    SequenceLengthMismatch,
    /// A record field differs.
    AggregateFieldMismatch,
    /// Two unequal values of a kind the engine has no rule for.
    UnsupportedKind,
    /// Recursion stopped at the configured depth bound.
    DepthExceeded,
}

impl DifferenceKind {
    /// Kinds that record *what* was found rather than *where*. Positional
    /// tagging by a parent sequence or record leaves them in place.
    pub fn is_sticky(self) -> bool {
        matches!(
            self,
            DifferenceKind::UnsupportedKind | DifferenceKind::DepthExceeded
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DifferenceKind::None => "none",
            DifferenceKind::TypeMismatch => "type-mismatch",
            DifferenceKind::SequenceElementMismatch => "sequence-element-mismatch",
            DifferenceKind::SequenceLengthMismatch => "sequence-length-mismatch",
            DifferenceKind::AggregateFieldMismatch => "aggregate-field-mismatch",
            DifferenceKind::UnsupportedKind => "unsupported-kind",
            DifferenceKind::DepthExceeded => "depth-exceeded",
        }
    }
}

impl fmt::Display for DifferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The raw pair of values at a leaf.
///
/// Serialized with the tagged value encoding, so record type names and
/// non-finite floats survive a round trip.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Difference {
    #[serde(with = "shapediff_types::tagged")]
    pub left: Value,
    #[serde(with = "shapediff_types::tagged")]
    pub right: Value,
}

impl Difference {
    pub fn new(left: impl Into<Value>, right: impl Into<Value>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }
}

/// One node of a comparison tree.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Why this node exists.
    #[serde(default)]
    pub kind: DifferenceKind,
    /// Set only for sequence elements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    /// Set only for record fields; holds the field name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Set for scalar, type, unsupported-kind and depth-exceeded nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difference: Option<Difference>,
    /// Nested divergences, in traversal order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Comparison>,
}

impl Comparison {
    /// The empty sentinel: no difference.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A scalar leaf difference with no positional tag.
    pub fn leaf(left: Value, right: Value) -> Self {
        Self {
            difference: Some(Difference { left, right }),
            ..Self::default()
        }
    }

    pub fn type_mismatch(left: Value, right: Value) -> Self {
        Self::leaf(left, right).with_kind(DifferenceKind::TypeMismatch)
    }

    pub fn unsupported(left: Value, right: Value) -> Self {
        Self::leaf(left, right).with_kind(DifferenceKind::UnsupportedKind)
    }

    pub fn depth_exceeded(left: Value, right: Value) -> Self {
        Self::leaf(left, right).with_kind(DifferenceKind::DepthExceeded)
    }

    /// A node holding only children. Empty when `children` is empty.
    pub fn branch(children: Vec<Comparison>) -> Self {
        Self {
            children,
            ..Self::default()
        }
    }

    fn with_kind(mut self, kind: DifferenceKind) -> Self {
        self.kind = kind;
        self
    }

    /// Returns `true` for the empty sentinel.
    ///
    /// `index` and `label` are positional tags added by a parent and do not
    /// count: an untagged node with no kind, no difference and no children
    /// carries no information.
    pub fn is_empty(&self) -> bool {
        self.kind == DifferenceKind::None && self.difference.is_none() && self.children.is_empty()
    }

    /// Tag this node as a sequence element.
    pub(crate) fn at_index(mut self, kind: DifferenceKind, index: usize) -> Self {
        if !self.kind.is_sticky() {
            self.kind = kind;
        }
        self.index = Some(index);
        self
    }

    /// Tag this node as a record field.
    pub(crate) fn at_field(mut self, name: &str) -> Self {
        if !self.kind.is_sticky() {
            self.kind = DifferenceKind::AggregateFieldMismatch;
        }
        self.label = Some(name.to_owned());
        self
    }

    /// The path segment a parent uses to reach this node.
    pub fn segment(&self) -> Option<PathSegment> {
        match (self.index, &self.label) {
            (Some(i), _) => Some(PathSegment::Index(i)),
            (None, Some(name)) => Some(PathSegment::Field(name.clone())),
            (None, None) => None,
        }
    }

    /// Every leaf node with its path, in traversal order.
    ///
    /// A leaf is a non-empty node without children. An empty tree has no
    /// leaves; a root-level scalar mismatch is one leaf at `$`.
    pub fn leaves(&self) -> Vec<(Path, &Comparison)> {
        let mut out = Vec::new();
        self.collect_leaves(Path::root(), &mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, path: Path, out: &mut Vec<(Path, &'a Comparison)>) {
        if self.children.is_empty() {
            if !self.is_empty() {
                out.push((path, self));
            }
            return;
        }
        for child in &self.children {
            let child_path = match child.segment() {
                Some(segment) => path.join(segment),
                None => path.clone(),
            };
            child.collect_leaves(child_path, out);
        }
    }

    /// Number of leaf differences.
    pub fn len(&self) -> usize {
        self.leaves().len()
    }

    /// The first node of the given kind in pre-order, with its path.
    pub fn find(&self, kind: DifferenceKind) -> Option<(Path, &Comparison)> {
        self.find_from(Path::root(), kind)
    }

    fn find_from(&self, path: Path, kind: DifferenceKind) -> Option<(Path, &Comparison)> {
        if self.kind == kind {
            return Some((path, self));
        }
        self.children.iter().find_map(|child| {
            let child_path = match child.segment() {
                Some(segment) => path.join(segment),
                None => path.clone(),
            };
            child.find_from(child_path, kind)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::{compare_with, Comparator};
    use crate::config::CompareConfig;
    use serde_json::json;
    use shapediff_types::{aggregate, Record};

    fn element(index: usize, left: Value, right: Value) -> Comparison {
        Comparison::leaf(left, right).at_index(DifferenceKind::SequenceElementMismatch, index)
    }

    #[test]
    fn sentinel_is_empty() {
        assert!(Comparison::empty().is_empty());
        assert!(Comparison::branch(Vec::new()).is_empty());
        assert_eq!(Comparison::empty().len(), 0);
    }

    #[test]
    fn any_payload_makes_node_non_empty() {
        assert!(!Comparison::leaf(Value::Bool(true), Value::Bool(false)).is_empty());
        assert!(!Comparison::type_mismatch(Value::Absent, Value::Int(1)).is_empty());
        assert!(!Comparison::branch(vec![Comparison::leaf(Value::Int(1), Value::Int(2))]).is_empty());
    }

    #[test]
    fn positional_tag_overrides_type_mismatch() {
        let node = Comparison::type_mismatch(Value::Int(3), Value::Absent)
            .at_index(DifferenceKind::SequenceLengthMismatch, 2);
        assert_eq!(node.kind, DifferenceKind::SequenceLengthMismatch);
        assert_eq!(node.index, Some(2));
    }

    #[test]
    fn sticky_kinds_survive_tagging() {
        let node = Comparison::depth_exceeded(Value::Int(1), Value::Int(2)).at_field("x");
        assert_eq!(node.kind, DifferenceKind::DepthExceeded);
        assert_eq!(node.label.as_deref(), Some("x"));

        let node = Comparison::unsupported(Value::Float(1.0), Value::Float(2.0))
            .at_index(DifferenceKind::SequenceElementMismatch, 0);
        assert_eq!(node.kind, DifferenceKind::UnsupportedKind);
    }

    #[test]
    fn leaves_carry_paths() {
        let tree = Comparison::branch(vec![
            Comparison::branch(vec![element(1, Value::Int(1), Value::Int(2))]).at_field("items"),
            Comparison::leaf(Value::from("a"), Value::from("b")).at_field("name"),
        ]);
        let paths: Vec<_> = tree.leaves().into_iter().map(|(p, _)| p.to_string()).collect();
        assert_eq!(paths, vec!["$.items[1]", "$.name"]);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn root_leaf_path() {
        let tree = Comparison::leaf(Value::Bool(true), Value::Bool(false));
        let leaves = tree.leaves();
        assert_eq!(leaves.len(), 1);
        assert!(leaves[0].0.is_root());
    }

    #[test]
    fn find_returns_first_in_preorder() {
        let tree = Comparison::branch(vec![
            element(0, Value::Int(1), Value::Int(2)),
            Comparison::depth_exceeded(Value::Int(1), Value::Int(2))
                .at_index(DifferenceKind::SequenceElementMismatch, 4),
        ]);
        let (path, node) = tree.find(DifferenceKind::DepthExceeded).unwrap();
        assert_eq!(path.to_string(), "$[4]");
        assert_eq!(node.index, Some(4));
        assert!(tree.find(DifferenceKind::TypeMismatch).is_none());
    }

    #[test]
    fn serialized_form_omits_unset_fields() {
        let tree = Comparison::branch(vec![element(2, Value::Bool(true), Value::Bool(false))]);
        let json = serde_json::to_value(&tree).unwrap();
        assert_eq!(
            json,
            json!({
                "kind": "none",
                "children": [{
                    "kind": "sequence-element-mismatch",
                    "index": 2,
                    "difference": { "left": true, "right": false }
                }]
            })
        );
    }

    #[test]
    fn json_roundtrip() {
        let tree = Comparison::branch(vec![
            Comparison::type_mismatch(Value::Absent, Value::from("x")).at_field("a"),
            element(0, Value::Int(1), Value::Float(1.5)),
        ]);
        let json = serde_json::to_string(&tree).unwrap();
        let parsed: Comparison = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, tree);
    }

    struct Inner {
        x: i64,
    }

    struct Outer {
        inner: Option<Inner>,
    }

    aggregate!(Inner { x });
    aggregate!(Outer { inner });

    #[test]
    fn json_roundtrip_keeps_type_names() {
        let tree = compare_with(&Outer { inner: Some(Inner { x: 1 }) }, &Outer { inner: None });
        let difference = tree.children[0].difference.as_ref().unwrap();
        assert_eq!(difference.left.as_record().and_then(Record::type_name), Some("Inner"));

        let json = serde_json::to_value(&tree).unwrap();
        assert_eq!(
            json["children"][0]["difference"],
            json!({ "left": { "$record": "Inner", "$fields": { "x": 1 } }, "right": null })
        );

        let parsed: Comparison = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, tree);
    }

    #[test]
    fn json_roundtrip_keeps_non_finite_floats() {
        let comparator = Comparator::new(CompareConfig::default().report_unsupported());
        let tree = comparator.compare(
            &Value::Seq(vec![Value::Float(f64::INFINITY), Value::Float(f64::NAN)]),
            &Value::Seq(vec![Value::Float(f64::NEG_INFINITY), Value::Float(1.0)]),
        );
        assert_eq!(tree.len(), 2);

        let json = serde_json::to_string(&tree).unwrap();
        let parsed: Comparison = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.children[0], tree.children[0]);

        let nan = parsed.children[1].difference.as_ref().unwrap();
        assert!(matches!(nan.left, Value::Float(f) if f.is_nan()));
        assert_eq!(nan.right, Value::Float(1.0));
        assert_eq!(parsed.children[1].kind, DifferenceKind::UnsupportedKind);
    }

    #[test]
    fn kind_display_matches_serde() {
        let json = serde_json::to_string(&DifferenceKind::SequenceLengthMismatch).unwrap();
        assert_eq!(json, format!("\"{}\"", DifferenceKind::SequenceLengthMismatch));
    }
}
