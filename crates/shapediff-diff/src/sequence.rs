//! Sequence aligner: positional pairing of two ordered sequences.

use shapediff_types::Value;

use crate::compare::{Walk, ABSENT};
use crate::comparison::{Comparison, DifferenceKind};

/// Compare two sequences index by index.
///
/// Indices present on both sides become `sequence-element-mismatch`
/// children; indices past the end of the shorter side are compared against
/// an absent value and become `sequence-length-mismatch` children. Equal
/// indices produce nothing.
pub(crate) fn align(walk: &mut Walk<'_>, left: &[Value], right: &[Value]) -> Comparison {
    let len = left.len().max(right.len());
    let mut children = Vec::new();

    for index in 0..len {
        let (l, r, kind) = match (left.get(index), right.get(index)) {
            (Some(l), Some(r)) => (l, r, DifferenceKind::SequenceElementMismatch),
            (l, r) => (
                l.unwrap_or(&ABSENT),
                r.unwrap_or(&ABSENT),
                DifferenceKind::SequenceLengthMismatch,
            ),
        };

        let comparison = walk.descend(l, r);
        if !comparison.is_empty() {
            children.push(comparison.at_index(kind, index));
        }
    }

    Comparison::branch(children)
}
