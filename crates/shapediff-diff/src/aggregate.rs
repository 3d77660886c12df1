//! Aggregate matcher: field-by-name comparison of two records.

use shapediff_types::Record;

use crate::compare::{Walk, ABSENT};
use crate::comparison::Comparison;

/// Compare two records field by field.
///
/// Fields are enumerated from the left record in declaration order and
/// looked up on the right by name; a name missing on the right compares
/// against an absent value. Fields that exist only on the right are not
/// visited.
pub(crate) fn match_fields(walk: &mut Walk<'_>, left: &Record, right: &Record) -> Comparison {
    let mut children = Vec::new();

    for (name, l) in left.fields() {
        let r = right.get(name).unwrap_or(&ABSENT);
        let comparison = walk.descend(l, r);
        if !comparison.is_empty() {
            children.push(comparison.at_field(name));
        }
    }

    Comparison::branch(children)
}
