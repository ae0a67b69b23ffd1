//! Similarity scoring between array elements.

use json_order_equal::{deep_equal, Shape};
use serde_json::Value;

/// How closely a `before` element resembles an `after` element.
///
/// Scores compare lexicographically in field order: structural overlap
/// decides, equal values break ties, and whole-value equality breaks the
/// remaining ties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Similarity {
    /// Object keys present on both sides, or the length both arrays share.
    pub shared: usize,
    /// Shared keys (or positions) holding deep-equal values.
    pub matching: usize,
    /// The two values are deep-equal.
    pub identical: bool,
}

impl Similarity {
    const EQUAL_PRIMITIVE: Similarity = Similarity {
        shared: 1,
        matching: 1,
        identical: true,
    };

    /// Whether the pair is close enough to borrow ordering from.
    pub fn is_acceptable(&self) -> bool {
        self.shared > 0 || self.identical
    }
}

/// Score `before` against `after`.
///
/// Returns `None` when the values belong to different shape families. Objects
/// are scored by the keys they share, not by their values, so a record whose
/// fields were edited still pairs with its previous version.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use json_order::score;
///
/// let s = score(&json!({"id": 1, "name": "Alice"}), &json!({"name": "Alice"})).unwrap();
/// assert_eq!((s.shared, s.matching, s.identical), (1, 1, false));
///
/// assert!(score(&json!({"id": 1}), &json!([1])).is_none());
/// ```
pub fn score(before: &Value, after: &Value) -> Option<Similarity> {
    if !Shape::same(before, after) {
        return None;
    }
    let similarity = match (before, after) {
        (Value::Object(before), Value::Object(after)) => {
            let mut shared = 0;
            let mut matching = 0;
            for (key, value) in after {
                if let Some(previous) = before.get(key) {
                    shared += 1;
                    if deep_equal(previous, value) {
                        matching += 1;
                    }
                }
            }
            Similarity {
                shared,
                matching,
                identical: before.len() == after.len() && matching == after.len(),
            }
        }
        (Value::Array(before), Value::Array(after)) => {
            let matching = before
                .iter()
                .zip(after)
                .filter(|(b, a)| deep_equal(b, a))
                .count();
            Similarity {
                shared: before.len().min(after.len()),
                matching,
                identical: before.len() == after.len() && matching == after.len(),
            }
        }
        _ if deep_equal(before, after) => Similarity::EQUAL_PRIMITIVE,
        _ => Similarity::default(),
    };
    Some(similarity)
}
