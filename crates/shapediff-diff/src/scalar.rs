//! Scalar rule: booleans, integers, text, and the unsupported-kind policy.

use shapediff_types::Value;
use tracing::debug;

use crate::comparison::Comparison;
use crate::config::UnsupportedKinds;

/// Compare two values of the same non-container kind.
///
/// The result carries no positional tag; the caller assigns one.
pub(crate) fn compare_scalars(
    left: &Value,
    right: &Value,
    unsupported: UnsupportedKinds,
) -> Comparison {
    let differs = match (left, right) {
        (Value::Bool(l), Value::Bool(r)) => l != r,
        (Value::Int(l), Value::Int(r)) => l != r,
        (Value::Text(l), Value::Text(r)) => l != r,
        (Value::Float(l), Value::Float(r)) => {
            if l == r {
                return Comparison::empty();
            }
            return match unsupported {
                UnsupportedKinds::Ignore => {
                    debug!(kind = %left.kind(), "unsupported kind treated as equal");
                    Comparison::empty()
                }
                UnsupportedKinds::Report => Comparison::unsupported(left.clone(), right.clone()),
            };
        }
        _ => false,
    };

    if differs {
        Comparison::leaf(left.clone(), right.clone())
    } else {
        Comparison::empty()
    }
}
